//! Configuration management for the Splunk SDK.
//!
//! This crate provides types and loaders for managing Splunk connection
//! configuration from environment variables, `.env` files, and builder calls.
//! [`Config`] also round-trips through serde for callers that persist it.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use types::{AuthConfig, AuthStrategy, Config, ConnectionConfig, Scheme};
