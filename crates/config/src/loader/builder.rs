//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` for layered configuration merging.
//! - Pick exactly one credential set (token > session key > basic).
//! - Validate host, port and timeout before handing out a `Config`.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//! - Authorization header formatting (see client crate).
//!
//! Invariants / Assumptions:
//! - Later calls win: `with_*` after `from_env()` overrides the environment.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;

use super::env::apply_env;
use super::error::ConfigError;
use crate::constants::{DEFAULT_SPLUNK_PORT, DEFAULT_TIMEOUT_SECS, MAX_TIMEOUT_SECS};
use crate::types::{AuthConfig, AuthStrategy, Config, ConnectionConfig, Scheme};

/// Configuration loader that builds config from environment variables and builder calls.
#[derive(Default)]
pub struct ConfigLoader {
    host: Option<String>,
    port: Option<u16>,
    scheme: Option<Scheme>,
    token: Option<SecretString>,
    session_key: Option<SecretString>,
    username: Option<String>,
    password: Option<SecretString>,
    skip_verify: Option<bool>,
    timeout: Option<Duration>,
    log_level: Option<String>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var("DOTENV_DISABLED").ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` is set to "true" or "1", the .env file is not loaded.
    /// Missing `.env` files are silently ignored.
    ///
    /// SAFETY: Error messages never include raw .env line contents to prevent secret leakage.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(_) => Ok(self),
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Apply `SPLUNK_*` environment variables.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    pub fn with_host(mut self, host: String) -> Self {
        self.host = Some(host);
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn with_scheme(mut self, scheme: Scheme) -> Self {
        self.scheme = Some(scheme);
        self
    }

    pub fn with_token(mut self, token: String) -> Self {
        self.token = Some(SecretString::new(token.into()));
        self
    }

    pub fn with_session_key(mut self, session_key: String) -> Self {
        self.session_key = Some(SecretString::new(session_key.into()));
        self
    }

    pub fn with_username(mut self, username: String) -> Self {
        self.username = Some(username);
        self
    }

    pub fn with_password(mut self, password: String) -> Self {
        self.password = Some(SecretString::new(password.into()));
        self
    }

    pub fn with_skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = Some(skip);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_log_level(mut self, level: String) -> Self {
        self.log_level = Some(level);
        self
    }

    /// Build the final configuration.
    pub fn build(self) -> Result<Config, ConfigError> {
        let host = self
            .host
            .as_deref()
            .map(str::trim)
            .filter(|h| !h.is_empty())
            .ok_or(ConfigError::MissingHost)?
            .to_string();

        let port = self.port.unwrap_or(DEFAULT_SPLUNK_PORT);
        let scheme = self.scheme.unwrap_or_default();
        validate_host(&host, port, scheme)?;

        // Token takes precedence, then session key, then basic auth.
        // Blank values count as unset, as they do for environment variables.
        let username = self.username.filter(|u| !u.trim().is_empty());
        let strategy = if let Some(token) = non_blank(self.token) {
            AuthStrategy::ApiToken { token }
        } else if let Some(session_key) = non_blank(self.session_key) {
            AuthStrategy::SessionKey { session_key }
        } else if let (Some(username), Some(password)) = (username, non_blank(self.password)) {
            AuthStrategy::Basic { username, password }
        } else {
            return Err(ConfigError::MissingAuth);
        };
        tracing::debug!(
            host = %host,
            port,
            auth = strategy.kind(),
            "Resolved Splunk connection configuration"
        );

        let timeout = self
            .timeout
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        validate_timeout(timeout)?;

        Ok(Config {
            connection: ConnectionConfig {
                host,
                port,
                scheme,
                skip_verify: self.skip_verify.unwrap_or(false),
                timeout,
            },
            auth: AuthConfig { strategy },
            log_level: self.log_level,
        })
    }

    pub(crate) fn set_host(&mut self, host: Option<String>) {
        self.host = host;
    }

    pub(crate) fn set_port(&mut self, port: Option<u16>) {
        self.port = port;
    }

    pub(crate) fn set_scheme(&mut self, scheme: Option<Scheme>) {
        self.scheme = scheme;
    }

    pub(crate) fn set_token(&mut self, token: Option<SecretString>) {
        self.token = token;
    }

    pub(crate) fn set_session_key(&mut self, session_key: Option<SecretString>) {
        self.session_key = session_key;
    }

    pub(crate) fn set_username(&mut self, username: Option<String>) {
        self.username = username;
    }

    pub(crate) fn set_password(&mut self, password: Option<SecretString>) {
        self.password = password;
    }

    pub(crate) fn set_skip_verify(&mut self, skip: Option<bool>) {
        self.skip_verify = skip;
    }

    pub(crate) fn set_timeout(&mut self, timeout: Option<Duration>) {
        self.timeout = timeout;
    }

    pub(crate) fn set_log_level(&mut self, level: Option<String>) {
        self.log_level = level;
    }
}

/// Check that `host` and `port` form a usable authority.
///
/// A leading `http://` or `https://` on the host is ignored here; the client
/// strips it when it resolves service URLs.
fn validate_host(host: &str, port: u16, scheme: Scheme) -> Result<(), ConfigError> {
    let bare = host
        .strip_prefix("https://")
        .or_else(|| host.strip_prefix("http://"))
        .unwrap_or(host)
        .trim_end_matches('/');

    let authority = if bare.contains(':') && !bare.starts_with('[') {
        format!("[{bare}]:{port}")
    } else {
        format!("{bare}:{port}")
    };

    let parsed = url::Url::parse(&format!("{}{}", scheme.prefix(), authority)).map_err(|e| {
        ConfigError::InvalidValue {
            var: "host".to_string(),
            message: format!("'{host}' is not a valid host: {e}"),
        }
    })?;

    if parsed.host_str().is_none_or(str::is_empty) || parsed.path() != "/" {
        return Err(ConfigError::InvalidValue {
            var: "host".to_string(),
            message: format!("'{host}' must be a bare host name without a path"),
        });
    }
    Ok(())
}

fn non_blank(secret: Option<SecretString>) -> Option<SecretString> {
    secret.filter(|s| !s.expose_secret().trim().is_empty())
}

fn validate_timeout(timeout: Duration) -> Result<(), ConfigError> {
    let secs = timeout.as_secs();
    if secs == 0 {
        return Err(ConfigError::InvalidTimeout {
            message: "timeout must be greater than 0 seconds".to_string(),
        });
    }
    if secs > MAX_TIMEOUT_SECS {
        return Err(ConfigError::InvalidTimeout {
            message: format!(
                "timeout exceeds maximum allowed value of {} seconds",
                MAX_TIMEOUT_SECS
            ),
        });
    }
    Ok(())
}
