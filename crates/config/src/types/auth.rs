//! Authentication types for Splunk SDK configuration.
//!
//! Responsibilities:
//! - Define the credential union (API token, session key, basic auth).
//! - Handle serialization of secret values.
//!
//! Does NOT handle:
//! - Prefix validation or `Authorization` header formatting (see client crate).
//! - Logging in to obtain a session key.
//!
//! Invariants:
//! - All secret values use `secrecy::SecretString` to prevent accidental logging.
//! - Serialization includes secrets for config file persistence; secrecy is for runtime safety.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Module for serializing SecretString as strings.
mod secret_string {
    use secrecy::{ExposeSecret, SecretString};
    use serde::{Deserialize as DeserializeTrait, Serialize as SerializeTrait};
    use serde::{Deserializer, Serializer};

    pub fn serialize<S>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        secret.expose_secret().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(SecretString::new(s.into()))
    }
}

/// Strategy for authenticating with Splunk.
///
/// Exactly one credential set is authoritative. When several are available
/// the loader picks them in the order token, session key, basic.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AuthStrategy {
    /// Splunk authentication token, sent as `Bearer <token>`.
    #[serde(rename = "token")]
    ApiToken {
        #[serde(with = "secret_string")]
        token: SecretString,
    },
    /// Session key obtained from `/services/auth/login`, sent as `Splunk <key>`.
    #[serde(rename = "session_key")]
    SessionKey {
        #[serde(with = "secret_string")]
        session_key: SecretString,
    },
    /// Username and password, sent as HTTP basic authentication.
    #[serde(rename = "basic")]
    Basic {
        username: String,
        #[serde(with = "secret_string")]
        password: SecretString,
    },
}

impl AuthStrategy {
    /// Short, secret-free label for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ApiToken { .. } => "token",
            Self::SessionKey { .. } => "session_key",
            Self::Basic { .. } => "basic",
        }
    }
}

/// Authentication configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// The authentication strategy to use.
    #[serde(flatten)]
    pub strategy: AuthStrategy,
}
