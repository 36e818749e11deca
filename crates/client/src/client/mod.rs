//! Main Splunk REST API client and API methods.
//!
//! This module provides the primary [`SplunkClient`] for running searches
//! and managing alerts on a Splunk management port.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `jobs`: Search job and metric methods
//! - `alerts`: Alert (saved search) and fired alert methods
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Authorization header formatting (delegated to [`crate::auth`])
//!
//! # Invariants
//! - The client is immutable after `build()`. Target URLs are derived per call
//!   from the connection settings, so one client may serve concurrent operations.

pub mod builder;

mod alerts;
mod jobs;

pub use jobs::extract_metric;

use splunk_sdk_config::Scheme;

use crate::auth::AuthStrategy;
use crate::endpoints::resolve_service_url;

/// Splunk REST API client.
///
/// Use [`SplunkClient::builder()`] to create a new client:
///
/// ```rust,ignore
/// use splunk_sdk::{Credentials, SplunkClient};
///
/// let client = SplunkClient::builder()
///     .host("splunk.example.com")
///     .credentials(Credentials::default().with_token("my-token"))
///     .build()?;
/// let count = client.get_metric(&SearchParameters::new("index=main | stats count")).await?;
/// ```
#[derive(Debug)]
pub struct SplunkClient {
    pub(crate) http: reqwest::Client,
    pub(crate) host: String,
    pub(crate) port: u16,
    pub(crate) scheme: Scheme,
    pub(crate) auth: AuthStrategy,
}

impl SplunkClient {
    /// Create a new client builder.
    pub fn builder() -> builder::SplunkClientBuilder {
        builder::SplunkClientBuilder::new()
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    pub fn auth_strategy(&self) -> &AuthStrategy {
        &self.auth
    }

    /// Resolve the URL of a service path on this client's host.
    pub fn service_url(&self, path: &str) -> String {
        resolve_service_url(self.scheme, &self.host, self.port, path)
    }
}
