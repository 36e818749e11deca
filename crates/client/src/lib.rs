//! Splunk REST API client.
//!
//! This crate provides a client for the Splunk management port that runs
//! metric searches and manages alerts. It resolves the `Authorization`
//! header from a bearer token, session key or basic credentials, and turns
//! Splunk's `messages` error envelope into readable errors.

pub mod auth;
pub mod client;
pub mod endpoints;
pub mod error;
pub mod models;
mod serde_helpers;
pub mod telemetry;

#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use auth::{AuthStrategy, Credentials, resolve_auth_key};
pub use client::builder::SplunkClientBuilder;
pub use client::{SplunkClient, extract_metric};
pub use error::{AuthError, ClientError, CredentialKind, Result};
pub use models::{
    Alert, AlertEntry, AlertList, ExecMode, JobCreated, JobResults, MessageType, OutputMode,
    ResultRow, SearchParameters, SplunkMessage, SplunkMessages, TriggeredAlert,
    TriggeredAlertContent, TriggeredAlertLinks, TriggeredAlerts, TriggeredInstances,
};
pub use splunk_sdk_config::Scheme;
pub use telemetry::{TelemetryConfig, TelemetryError, init_tracing};
