//! Centralized constants for the Splunk SDK workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication.

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Default Splunk management port.
pub const DEFAULT_SPLUNK_PORT: u16 = 8089;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

// =============================================================================
// Environment Variables
// =============================================================================

pub const ENV_HOST: &str = "SPLUNK_HOST";
pub const ENV_PORT: &str = "SPLUNK_PORT";
pub const ENV_SCHEME: &str = "SPLUNK_SCHEME";
pub const ENV_TOKEN: &str = "SPLUNK_TOKEN";
pub const ENV_SESSION_KEY: &str = "SPLUNK_SESSION_KEY";
pub const ENV_USERNAME: &str = "SPLUNK_USERNAME";
pub const ENV_PASSWORD: &str = "SPLUNK_PASSWORD";
pub const ENV_SKIP_VERIFY: &str = "SPLUNK_SKIP_VERIFY";
pub const ENV_TIMEOUT: &str = "SPLUNK_TIMEOUT";

/// Log level filter handed to the tracing subscriber (e.g. `debug`, `splunk_sdk=trace`).
pub const ENV_LOG_LEVEL: &str = "SPLUNK_LOG_LEVEL";
