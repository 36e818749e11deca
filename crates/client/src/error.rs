//! Error types for the Splunk client.

use reqwest::StatusCode;
use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// The credential slot a value was supplied in, or the scheme its prefix declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialKind {
    /// `Authorization: Bearer <token>`.
    BearerToken,
    /// `Authorization: Splunk <session key>`.
    SessionKey,
    /// `Authorization: Basic <base64(user:pass)>`.
    Basic,
}

impl std::fmt::Display for CredentialKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BearerToken => write!(f, "bearer token"),
            Self::SessionKey => write!(f, "session key"),
            Self::Basic => write!(f, "basic credentials"),
        }
    }
}

/// Failures while deriving the `Authorization` header value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// A credential carries the prefix of a different scheme than its slot.
    #[error("{expected} field holds a value prefixed for {found}")]
    Mismatch {
        expected: CredentialKind,
        found: CredentialKind,
    },

    /// No token, session key, or username/password pair was supplied.
    #[error("no credentials supplied: set a token, a session key, or a username and password")]
    NoCredentials,
}

/// Errors that can occur during Splunk client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The Authorization header could not be resolved.
    #[error("Authentication failed: {0}")]
    AuthResolution(#[from] AuthError),

    /// Connection, TLS, timeout or other transport failure.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx response from Splunk.
    #[error("HTTP error ({status}) at {url}: {message}")]
    HttpError {
        status: StatusCode,
        url: String,
        message: String,
    },

    /// An error body did not carry a usable `messages[0].text`.
    #[error("Error response body is not a Splunk message envelope")]
    MalformedErrorBody,

    /// A success response did not match the expected JSON shape.
    #[error("Failed to decode {context}: {source}")]
    Decode {
        context: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// Job creation succeeded but no search id came back.
    #[error("No sid found in job creation response")]
    NoSidFound,

    /// The result set did not contain exactly one row.
    #[error("Expected exactly one result row for a metric, got {rows}")]
    NotAScalarMetric { rows: usize },

    /// The metric value is not a floating point number.
    #[error("Metric value '{value}' is not a number: {source}")]
    MetricParse {
        value: String,
        #[source]
        source: std::num::ParseFloatError,
    },

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// A header name or value could not be encoded.
    #[error("Invalid header: {0}")]
    InvalidHeader(String),
}

impl ClientError {
    /// HTTP status of the failed response, if the failure was an HTTP error.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::HttpError { status, .. } => Some(*status),
            Self::Transport(e) => e.status(),
            _ => None,
        }
    }

    /// Check if this error indicates authentication failure.
    pub fn is_auth_error(&self) -> bool {
        match self {
            Self::AuthResolution(_) => true,
            Self::HttpError { status, .. } => {
                matches!(*status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN)
            }
            _ => false,
        }
    }
}
