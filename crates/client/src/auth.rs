//! Authorization header derivation.
//!
//! Responsibilities:
//! - Pick the authoritative credential set (token > session key > basic).
//! - Reject values whose prefix declares a different scheme than their slot.
//! - Format the `Authorization` header value, never double-prefixing.
//!
//! Does NOT handle:
//! - Logging in or renewing sessions. Session keys are used as supplied.
//! - Attaching the header to requests (see [`crate::endpoints::request`]).
//!
//! Invariants:
//! - Empty or whitespace-only strings count as absent.
//! - Prefix detection is a plain `starts_with` on the scheme word (`Bearer`,
//!   `Splunk`, `Basic`), so `"Bearer abc"` and `"Bearerabc"` both count as prefixed.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use secrecy::{ExposeSecret, SecretString};

use crate::error::{AuthError, CredentialKind};

const BEARER_PREFIX: &str = "Bearer";
const SESSION_KEY_PREFIX: &str = "Splunk";
const BASIC_PREFIX: &str = "Basic";

/// Raw credential fields as a caller may hold them.
///
/// More than one set may be populated; [`AuthStrategy::from_credentials`]
/// picks the authoritative one.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    pub token: Option<SecretString>,
    pub session_key: Option<SecretString>,
    pub username: Option<String>,
    pub password: Option<SecretString>,
}

impl Credentials {
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        let token: String = token.into();
        self.token = Some(SecretString::new(token.into()));
        self
    }

    pub fn with_session_key(mut self, session_key: impl Into<String>) -> Self {
        let session_key: String = session_key.into();
        self.session_key = Some(SecretString::new(session_key.into()));
        self
    }

    pub fn with_basic(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.username = Some(username.into());
        let password: String = password.into();
        self.password = Some(SecretString::new(password.into()));
        self
    }
}

/// Strategy for authenticating with Splunk.
#[derive(Debug, Clone)]
pub enum AuthStrategy {
    /// Splunk authentication token.
    BearerToken { token: SecretString },
    /// Session key from `/services/auth/login`.
    SessionKey { session_key: SecretString },
    /// HTTP basic authentication.
    Basic {
        username: String,
        password: SecretString,
    },
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn present(secret: &Option<SecretString>) -> Option<&SecretString> {
    secret.as_ref().filter(|s| !is_blank(s.expose_secret()))
}

impl AuthStrategy {
    /// Select the authoritative credential set. The first non-empty field wins.
    pub fn from_credentials(credentials: &Credentials) -> Result<Self, AuthError> {
        if let Some(token) = present(&credentials.token) {
            return Ok(Self::BearerToken {
                token: token.clone(),
            });
        }
        if let Some(session_key) = present(&credentials.session_key) {
            return Ok(Self::SessionKey {
                session_key: session_key.clone(),
            });
        }
        match (
            credentials.username.as_deref().filter(|u| !is_blank(u)),
            present(&credentials.password),
        ) {
            (Some(username), Some(password)) => Ok(Self::Basic {
                username: username.to_string(),
                password: password.clone(),
            }),
            _ => Err(AuthError::NoCredentials),
        }
    }

    pub fn kind(&self) -> CredentialKind {
        match self {
            Self::BearerToken { .. } => CredentialKind::BearerToken,
            Self::SessionKey { .. } => CredentialKind::SessionKey,
            Self::Basic { .. } => CredentialKind::Basic,
        }
    }

    /// Format the `Authorization` header value for this strategy.
    ///
    /// A blank token, session key, username or password is
    /// [`AuthError::NoCredentials`], even when the strategy was built directly.
    pub fn authorization_header(&self) -> Result<SecretString, AuthError> {
        let value = match self {
            Self::BearerToken { token } => {
                let token = token.expose_secret();
                if is_blank(token) {
                    return Err(AuthError::NoCredentials);
                }
                reject_prefix(token, CredentialKind::BearerToken, SESSION_KEY_PREFIX)?;
                reject_prefix(token, CredentialKind::BearerToken, BASIC_PREFIX)?;
                with_prefix(token, BEARER_PREFIX)
            }
            Self::SessionKey { session_key } => {
                let key = session_key.expose_secret();
                if is_blank(key) {
                    return Err(AuthError::NoCredentials);
                }
                reject_prefix(key, CredentialKind::SessionKey, BEARER_PREFIX)?;
                reject_prefix(key, CredentialKind::SessionKey, BASIC_PREFIX)?;
                with_prefix(key, SESSION_KEY_PREFIX)
            }
            Self::Basic { username, password } => {
                if is_blank(username) || is_blank(password.expose_secret()) {
                    return Err(AuthError::NoCredentials);
                }
                let pair = format!("{}:{}", username, password.expose_secret());
                format!("{} {}", BASIC_PREFIX, STANDARD.encode(pair))
            }
        };
        Ok(SecretString::new(value.into()))
    }
}

fn kind_of_prefix(prefix: &str) -> CredentialKind {
    match prefix {
        BEARER_PREFIX => CredentialKind::BearerToken,
        SESSION_KEY_PREFIX => CredentialKind::SessionKey,
        _ => CredentialKind::Basic,
    }
}

fn reject_prefix(value: &str, slot: CredentialKind, prefix: &str) -> Result<(), AuthError> {
    if value.starts_with(prefix) {
        return Err(AuthError::Mismatch {
            expected: slot,
            found: kind_of_prefix(prefix),
        });
    }
    Ok(())
}

fn with_prefix(value: &str, prefix: &str) -> String {
    if value.starts_with(prefix) {
        value.to_string()
    } else {
        format!("{} {}", prefix, value)
    }
}

/// Derive the `Authorization` header value from raw credential fields.
pub fn resolve_auth_key(credentials: &Credentials) -> Result<SecretString, AuthError> {
    AuthStrategy::from_credentials(credentials)?.authorization_header()
}
