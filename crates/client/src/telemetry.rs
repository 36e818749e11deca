//! Tracing subscriber setup.
//!
//! The library only emits `tracing` events. Binaries and tests that want to
//! see them install a subscriber once at start-up with [`TelemetryConfig::init`]
//! or [`init_tracing`].
//!
//! ```rust,ignore
//! use splunk_sdk::telemetry::init_tracing;
//!
//! let config = ConfigLoader::new().load_dotenv()?.from_env()?.build()?;
//! init_tracing(config.log_level.as_deref())?;
//! ```

use thiserror::Error;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "info";

#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("invalid log filter '{directive}': {source}")]
    InvalidFilter {
        directive: String,
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },

    #[error("a global tracing subscriber is already installed")]
    AlreadyInstalled(#[source] tracing_subscriber::util::TryInitError),
}

/// Subscriber settings.
#[derive(Debug, Clone, Default)]
pub struct TelemetryConfig {
    /// Filter directive such as `debug` or `splunk_sdk=trace`. `None` falls
    /// back to `RUST_LOG`, then to `info`.
    pub filter: Option<String>,
    /// Emit JSON lines instead of human-readable output.
    pub json: bool,
}

impl TelemetryConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    /// Install the global subscriber.
    ///
    /// # Errors
    /// Returns an error if the filter does not parse or a subscriber is already installed.
    pub fn init(&self) -> Result<(), TelemetryError> {
        let filter = build_filter(self.filter.as_deref())?;
        let registry = tracing_subscriber::registry().with(filter);
        let result = if self.json {
            registry.with(fmt::layer().json()).try_init()
        } else {
            registry.with(fmt::layer()).try_init()
        };
        result.map_err(TelemetryError::AlreadyInstalled)
    }
}

/// Build the event filter for `level`.
pub fn build_filter(level: Option<&str>) -> Result<EnvFilter, TelemetryError> {
    match level.map(str::trim).filter(|l| !l.is_empty()) {
        Some(directive) => {
            EnvFilter::try_new(directive).map_err(|source| TelemetryError::InvalidFilter {
                directive: directive.to_string(),
                source,
            })
        }
        None => Ok(EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))),
    }
}

/// Install a human-readable subscriber filtered by `level`.
pub fn init_tracing(level: Option<&str>) -> Result<(), TelemetryError> {
    let mut config = TelemetryConfig::new();
    config.filter = level.map(str::to_string);
    config.init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_filter_accepts_directives() {
        assert!(build_filter(Some("debug")).is_ok());
        assert!(build_filter(Some("splunk_sdk=trace,reqwest=warn")).is_ok());
        assert!(build_filter(None).is_ok());
        assert!(build_filter(Some("   ")).is_ok());
    }

    #[test]
    fn test_build_filter_rejects_bad_level() {
        let err = build_filter(Some("splunk_sdk=loud")).unwrap_err();
        assert!(matches!(err, TelemetryError::InvalidFilter { .. }));
        assert!(err.to_string().contains("splunk_sdk=loud"));
    }

    #[test]
    fn test_second_install_is_an_error() {
        let _ = init_tracing(Some("warn"));
        let second = TelemetryConfig::new().with_filter("debug").with_json(true).init();
        assert!(matches!(second, Err(TelemetryError::AlreadyInstalled(_))));
    }
}
