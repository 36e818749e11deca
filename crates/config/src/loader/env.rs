//! Environment variable parsing for configuration.
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - Invalid values return `ConfigError::InvalidValue` naming the variable.

use secrecy::SecretString;
use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::constants::{
    ENV_HOST, ENV_LOG_LEVEL, ENV_PASSWORD, ENV_PORT, ENV_SCHEME, ENV_SESSION_KEY, ENV_SKIP_VERIFY,
    ENV_TIMEOUT, ENV_TOKEN, ENV_USERNAME,
};
use crate::types::Scheme;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

fn invalid(var: &str, message: &str) -> ConfigError {
    ConfigError::InvalidValue {
        var: var.to_string(),
        message: message.to_string(),
    }
}

/// Apply environment variable configuration to the loader.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(host) = env_var_or_none(ENV_HOST) {
        loader.set_host(Some(host));
    }
    if let Some(port) = env_var_or_none(ENV_PORT) {
        let port: u16 = port
            .parse()
            .map_err(|_| invalid(ENV_PORT, "must be a port number between 0 and 65535"))?;
        loader.set_port(Some(port));
    }
    if let Some(scheme) = env_var_or_none(ENV_SCHEME) {
        let scheme: Scheme = scheme.parse().map_err(|e: String| invalid(ENV_SCHEME, &e))?;
        loader.set_scheme(Some(scheme));
    }
    if let Some(token) = env_var_or_none(ENV_TOKEN) {
        loader.set_token(Some(SecretString::new(token.into())));
    }
    if let Some(session_key) = env_var_or_none(ENV_SESSION_KEY) {
        loader.set_session_key(Some(SecretString::new(session_key.into())));
    }
    if let Some(username) = env_var_or_none(ENV_USERNAME) {
        loader.set_username(Some(username));
    }
    if let Some(password) = env_var_or_none(ENV_PASSWORD) {
        loader.set_password(Some(SecretString::new(password.into())));
    }
    if let Some(skip) = env_var_or_none(ENV_SKIP_VERIFY) {
        let skip: bool = skip
            .parse()
            .map_err(|_| invalid(ENV_SKIP_VERIFY, "must be true or false"))?;
        loader.set_skip_verify(Some(skip));
    }
    if let Some(timeout) = env_var_or_none(ENV_TIMEOUT) {
        let secs: u64 = timeout
            .parse()
            .map_err(|_| invalid(ENV_TIMEOUT, "must be a number"))?;
        loader.set_timeout(Some(Duration::from_secs(secs)));
    }
    if let Some(level) = env_var_or_none(ENV_LOG_LEVEL) {
        loader.set_log_level(Some(level));
    }

    Ok(())
}
