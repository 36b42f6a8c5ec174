//! Logging initialization.
//!
//! Installs a global `tracing` subscriber with an `EnvFilter`. `RUST_LOG`
//! takes precedence over the configured default filter.

#[cfg(feature = "telemetry")]
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::RosterResult;

/// Output format for log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable, multi-field lines.
    #[default]
    Pretty,
    /// One JSON object per line.
    Json,
}

impl LogFormat {
    /// Parses a format name, falling back to `Pretty` for unknown names.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        if name.eq_ignore_ascii_case("json") {
            Self::Json
        } else {
            Self::Pretty
        }
    }
}

/// Builds the default filter directive for a log level.
#[must_use]
pub fn default_filter(log_level: &str) -> String {
    format!("{log_level},roster=debug,tower_http=debug")
}

/// Initialize the global subscriber.
#[cfg(feature = "telemetry")]
pub fn init_logging(log_level: &str, format: LogFormat) -> RosterResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(log_level)));

    let registry = tracing_subscriber::registry().with(filter);

    let result = match format {
        LogFormat::Json => registry.with(fmt::layer().json().with_target(true)).try_init(),
        LogFormat::Pretty => registry.with(fmt::layer().with_target(true)).try_init(),
    };

    result.map_err(|e| crate::RosterError::Internal(format!("Failed to initialize logging: {e}")))
}

/// Placeholder for when telemetry feature is disabled.
#[cfg(not(feature = "telemetry"))]
pub fn init_logging(_log_level: &str, _format: LogFormat) -> RosterResult<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_from_name() {
        assert_eq!(LogFormat::from_name("json"), LogFormat::Json);
        assert_eq!(LogFormat::from_name("JSON"), LogFormat::Json);
        assert_eq!(LogFormat::from_name("pretty"), LogFormat::Pretty);
        assert_eq!(LogFormat::from_name("anything"), LogFormat::Pretty);
    }

    #[test]
    fn test_default_filter() {
        assert_eq!(default_filter("warn"), "warn,roster=debug,tower_http=debug");
    }
}
