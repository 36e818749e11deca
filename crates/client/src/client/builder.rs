//! Client builder for constructing [`SplunkClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Selecting and validating the credential set once, at construction
//! - Normalizing the host (trimming whitespace and trailing slashes)
//! - Configuring the underlying HTTP client (timeouts, redirects, TLS verification)
//!
//! # What this module does NOT handle:
//! - Actual API calls (handled by [`SplunkClient`] methods)
//! - Loading configuration from the environment (see `splunk_sdk_config::ConfigLoader`)
//!
//! # Invariants
//! - A host and a usable credential set are required before `build()` succeeds.
//! - `skip_verify` only affects HTTPS connections; HTTP connections log a warning.

use std::time::Duration;

use crate::auth::{AuthStrategy, Credentials};
use crate::client::SplunkClient;
use crate::error::{ClientError, Result};
use splunk_sdk_config::{
    AuthStrategy as ConfigAuthStrategy, Config, Scheme,
    constants::{DEFAULT_MAX_REDIRECTS, DEFAULT_SPLUNK_PORT, DEFAULT_TIMEOUT_SECS},
};

/// Builder for creating a new [`SplunkClient`].
///
/// Either `credentials` or `auth_strategy` must be supplied. When both are,
/// the explicit strategy wins.
pub struct SplunkClientBuilder {
    host: Option<String>,
    port: u16,
    scheme: Scheme,
    credentials: Credentials,
    auth_strategy: Option<AuthStrategy>,
    skip_verify: bool,
    timeout: Duration,
}

impl Default for SplunkClientBuilder {
    fn default() -> Self {
        Self {
            host: None,
            port: DEFAULT_SPLUNK_PORT,
            scheme: Scheme::default(),
            credentials: Credentials::default(),
            auth_strategy: None,
            skip_verify: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl SplunkClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the Splunk host. A leading `https://` or `http://` is ignored.
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Set the management port. Default is 8089.
    pub fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn scheme(mut self, scheme: Scheme) -> Self {
        self.scheme = scheme;
        self
    }

    /// Set raw credential fields. The authoritative set is chosen at `build()`.
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = credentials;
        self
    }

    pub fn auth_strategy(mut self, strategy: AuthStrategy) -> Self {
        self.auth_strategy = Some(strategy);
        self
    }

    /// Set whether to skip TLS certificate verification.
    ///
    /// # Security Warning
    /// Only use this in development or testing environments. Disabling TLS
    /// verification makes the connection vulnerable to man-in-the-middle attacks.
    pub fn skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = skip;
        self
    }

    /// Set the request timeout. Default is 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Create a client builder from configuration.
    pub fn from_config(mut self, config: &Config) -> Self {
        let auth_strategy = match &config.auth.strategy {
            ConfigAuthStrategy::ApiToken { token } => AuthStrategy::BearerToken {
                token: token.clone(),
            },
            ConfigAuthStrategy::SessionKey { session_key } => AuthStrategy::SessionKey {
                session_key: session_key.clone(),
            },
            ConfigAuthStrategy::Basic { username, password } => AuthStrategy::Basic {
                username: username.clone(),
                password: password.clone(),
            },
        };

        self.host = Some(config.connection.host.clone());
        self.port = config.connection.port;
        self.scheme = config.connection.scheme;
        self.auth_strategy = Some(auth_strategy);
        self.skip_verify = config.connection.skip_verify;
        self.timeout = config.connection.timeout;
        self
    }

    /// Trim whitespace and trailing slashes from a host.
    ///
    /// - `" splunk.local/ "` -> `"splunk.local"`
    /// - `"https://splunk.local//"` -> `"https://splunk.local"`
    fn normalize_host(host: &str) -> String {
        host.trim().trim_end_matches('/').to_string()
    }

    /// Build the [`SplunkClient`] with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if no host was provided.
    /// Returns [`ClientError::AuthResolution`] if no usable credentials were provided.
    /// Returns [`ClientError::Transport`] if the HTTP client fails to build.
    pub fn build(self) -> Result<SplunkClient> {
        let host = self
            .host
            .as_deref()
            .map(Self::normalize_host)
            .filter(|h| !h.is_empty())
            .ok_or_else(|| ClientError::InvalidUrl("host is required".to_string()))?;

        let auth = match self.auth_strategy {
            Some(strategy) => strategy,
            None => AuthStrategy::from_credentials(&self.credentials)?,
        };
        // Surface prefix mismatches now rather than on the first request.
        auth.authorization_header()?;

        let mut http_builder = reqwest::Client::builder()
            .timeout(self.timeout)
            .redirect(reqwest::redirect::Policy::limited(DEFAULT_MAX_REDIRECTS));

        if self.skip_verify {
            if self.scheme == Scheme::Https {
                http_builder = http_builder.danger_accept_invalid_certs(true);
            } else {
                tracing::warn!(
                    "skip_verify=true has no effect on HTTP URLs. TLS verification only applies to HTTPS connections."
                );
            }
        }

        let http = http_builder.build()?;
        tracing::debug!(
            host = %host,
            port = self.port,
            scheme = %self.scheme,
            auth = %auth.kind(),
            "Built Splunk client"
        );

        Ok(SplunkClient {
            http,
            host,
            port: self.port,
            scheme: self.scheme,
            auth,
        })
    }
}
