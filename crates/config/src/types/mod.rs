//! Configuration type definitions for the Splunk SDK.
//!
//! Responsibilities:
//! - Define configuration types for authentication and connections.
//! - Provide serialization helpers for sensitive types (secrets, durations).
//!
//! Does NOT handle:
//! - Configuration loading from files or environment variables (see `loader` module).
//! - Authorization header derivation (see the client crate's `auth` module).
//!
//! Invariants:
//! - All secret types use `secrecy::SecretString` to prevent accidental logging.
//! - Serialization helpers (`secret_string`, `duration_seconds`) are private modules.

mod auth;
mod connection;

pub use auth::{AuthConfig, AuthStrategy};
pub use connection::{Config, ConnectionConfig, Scheme};
