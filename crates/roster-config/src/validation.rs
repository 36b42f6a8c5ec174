//! Configuration validation.
//!
//! Collects every problem in a configuration at once so startup can fail
//! with a complete report.

use crate::AppConfig;
use std::fmt;

/// Configuration validation error variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValidationError {
    /// Port number is invalid (must be 1-65535).
    InvalidPort { value: u16 },
    /// Timeout value must be positive.
    NonPositiveTimeout { name: String },
    /// Request body limit must be positive.
    InvalidBodyLimit,
    /// Log level is invalid.
    InvalidLogLevel { value: String },
    /// Log format is invalid.
    InvalidLogFormat { value: String },
}

impl fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPort { value } => {
                write!(f, "Invalid server port: {value} (must be 1-65535)")
            }
            Self::NonPositiveTimeout { name } => {
                write!(f, "Timeout '{name}' must be positive")
            }
            Self::InvalidBodyLimit => write!(f, "max_body_size must be positive"),
            Self::InvalidLogLevel { value } => {
                write!(
                    f,
                    "Invalid log level: '{value}' (valid: trace, debug, info, warn, error)"
                )
            }
            Self::InvalidLogFormat { value } => {
                write!(f, "Invalid log format: '{value}' (valid: pretty, json)")
            }
        }
    }
}

impl std::error::Error for ConfigValidationError {}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Valid log levels.
    const VALID_LOG_LEVELS: &'static [&'static str] = &["trace", "debug", "info", "warn", "error"];
    /// Valid log formats.
    const VALID_LOG_FORMATS: &'static [&'static str] = &["pretty", "json"];

    /// Validates the entire application configuration.
    ///
    /// Returns Ok(()) if valid, or Err with all validation errors found.
    pub fn validate(config: &AppConfig) -> Result<(), Vec<ConfigValidationError>> {
        let mut errors = Vec::new();

        if config.server.port == 0 {
            errors.push(ConfigValidationError::InvalidPort {
                value: config.server.port,
            });
        }
        if config.server.request_timeout_secs == 0 {
            errors.push(ConfigValidationError::NonPositiveTimeout {
                name: "request_timeout_secs".to_string(),
            });
        }
        if config.server.max_body_size == 0 {
            errors.push(ConfigValidationError::InvalidBodyLimit);
        }

        let level = config.observability.log_level.to_lowercase();
        if !Self::VALID_LOG_LEVELS.contains(&level.as_str()) {
            errors.push(ConfigValidationError::InvalidLogLevel {
                value: config.observability.log_level.clone(),
            });
        }

        let format = config.observability.log_format.to_lowercase();
        if !Self::VALID_LOG_FORMATS.contains(&format.as_str()) {
            errors.push(ConfigValidationError::InvalidLogFormat {
                value: config.observability.log_format.clone(),
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Formats validation errors for display.
#[must_use]
pub fn format_validation_errors(errors: &[ConfigValidationError]) -> String {
    let mut output = String::from("Configuration validation failed:\n");
    for (i, error) in errors.iter().enumerate() {
        output.push_str(&format!("  {}. {}\n", i + 1, error));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_passes() {
        assert!(ConfigValidator::validate(&AppConfig::default()).is_ok());
    }

    #[test]
    fn test_invalid_port() {
        let mut config = AppConfig::default();
        config.server.port = 0;

        let errors = ConfigValidator::validate(&config).unwrap_err();
        assert_eq!(errors, vec![ConfigValidationError::InvalidPort { value: 0 }]);
    }

    #[test]
    fn test_invalid_log_settings() {
        let mut config = AppConfig::default();
        config.observability.log_level = "loud".to_string();
        config.observability.log_format = "xml".to_string();

        let errors = ConfigValidator::validate(&config).unwrap_err();
        assert!(errors.iter().any(|e| matches!(e, ConfigValidationError::InvalidLogLevel { .. })));
        assert!(errors.iter().any(|e| matches!(e, ConfigValidationError::InvalidLogFormat { .. })));
    }

    #[test]
    fn test_log_level_is_case_insensitive() {
        let mut config = AppConfig::default();
        config.observability.log_level = "DEBUG".to_string();
        assert!(ConfigValidator::validate(&config).is_ok());
    }

    #[test]
    fn test_multiple_errors() {
        let mut config = AppConfig::default();
        config.server.port = 0;
        config.server.request_timeout_secs = 0;
        config.server.max_body_size = 0;

        let errors = ConfigValidator::validate(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_format_validation_errors() {
        let errors = vec![
            ConfigValidationError::InvalidPort { value: 0 },
            ConfigValidationError::InvalidBodyLimit,
        ];

        let output = format_validation_errors(&errors);
        assert!(output.contains("1. Invalid server port"));
        assert!(output.contains("2. max_body_size must be positive"));
    }
}
