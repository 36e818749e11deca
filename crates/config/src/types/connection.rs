//! Connection configuration types for the Splunk SDK.
//!
//! Responsibilities:
//! - Define connection settings (host, port, scheme, TLS verification, timeout).
//! - Define the main `Config` structure combining connection, auth and log level.
//! - Provide convenience constructors for each credential kind.
//!
//! Does NOT handle:
//! - Configuration loading from env (see `loader` module).
//! - Building service URLs from these settings (see client crate).
//!
//! Invariants:
//! - All duration fields are serialized as seconds (integers).
//! - Default values come from `crate::constants`, not magic numbers.

use crate::constants::{DEFAULT_SPLUNK_PORT, DEFAULT_TIMEOUT_SECS};
use crate::types::auth::{AuthConfig, AuthStrategy};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Module for serializing Duration as seconds (integer).
mod duration_seconds {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

/// URL scheme used to reach the Splunk management port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    #[default]
    Https,
    Http,
}

impl Scheme {
    /// The scheme prefix including `://`.
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::Https => "https://",
            Self::Http => "http://",
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Https => write!(f, "https"),
            Self::Http => write!(f, "http"),
        }
    }
}

impl FromStr for Scheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "https" => Ok(Self::Https),
            "http" => Ok(Self::Http),
            other => Err(format!("unsupported scheme '{other}' (expected http or https)")),
        }
    }
}

/// Connection configuration for a Splunk server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// Host name or address. A leading `http://`/`https://` is tolerated and stripped later.
    pub host: String,
    /// Management port (default 8089).
    pub port: u16,
    /// Scheme used for every request.
    #[serde(default)]
    pub scheme: Scheme,
    /// Whether to skip TLS verification (for self-signed certificates)
    pub skip_verify: bool,
    /// Request timeout (serialized as seconds)
    #[serde(with = "duration_seconds")]
    pub timeout: Duration,
}

impl ConnectionConfig {
    /// Connection settings for `host` with every other field at its default.
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: DEFAULT_SPLUNK_PORT,
            scheme: Scheme::default(),
            skip_verify: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Main configuration structure.
///
/// `Config` is part of the public API in serialized form, so callers can keep
/// it in their own settings files:
///
/// ```json
/// {
///   "connection": {"host": "splunk.local", "port": 8089, "scheme": "https",
///                  "skip_verify": false, "timeout": 30},
///   "auth": {"type": "token", "token": "..."},
///   "log_level": "info"
/// }
/// ```
///
/// `timeout` is in seconds. Secrets are written in plain text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub connection: ConnectionConfig,
    pub auth: AuthConfig,
    /// Tracing filter directive, e.g. `info` or `splunk_sdk=debug`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
}

impl Config {
    fn with_strategy(host: String, strategy: AuthStrategy) -> Self {
        Self {
            connection: ConnectionConfig::new(host),
            auth: AuthConfig { strategy },
            log_level: None,
        }
    }

    /// Create a new config for `host` authenticated with a Splunk token.
    pub fn with_api_token(host: String, token: SecretString) -> Self {
        Self::with_strategy(host, AuthStrategy::ApiToken { token })
    }

    /// Create a new config for `host` authenticated with a session key.
    pub fn with_session_key(host: String, session_key: SecretString) -> Self {
        Self::with_strategy(host, AuthStrategy::SessionKey { session_key })
    }

    /// Create a new config for `host` authenticated with username and password.
    pub fn with_basic_auth(host: String, username: String, password: SecretString) -> Self {
        Self::with_strategy(host, AuthStrategy::Basic { username, password })
    }
}
