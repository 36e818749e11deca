//! Common types shared across Splunk API models.
//!
//! This module contains shared message types used by both success and error
//! responses. It does NOT contain resource-specific models.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Type of message from Splunk API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum MessageType {
    #[serde(rename = "ERROR")]
    Error,
    #[serde(rename = "FATAL")]
    Fatal,
    #[serde(rename = "WARN")]
    Warn,
    #[serde(rename = "INFO")]
    Info,
    #[serde(rename = "DEBUG")]
    Debug,
    /// Unknown or unrecognized message type.
    #[serde(other)]
    #[default]
    Unknown,
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "ERROR"),
            Self::Fatal => write!(f, "FATAL"),
            Self::Warn => write!(f, "WARN"),
            Self::Info => write!(f, "INFO"),
            Self::Debug => write!(f, "DEBUG"),
            Self::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

/// A single message from Splunk (usually in error responses).
///
/// Only `text` is required; some endpoints omit `type`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SplunkMessage {
    #[serde(rename = "type", default)]
    pub message_type: MessageType,
    pub text: String,
}

/// A collection of messages from Splunk.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct SplunkMessages {
    pub messages: Vec<SplunkMessage>,
}
