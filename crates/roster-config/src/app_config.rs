//! Application configuration structures.

use crate::InputMode;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application name and metadata.
    #[serde(default)]
    pub app: AppMetadata,

    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,

    /// User store behaviour.
    #[serde(default)]
    pub store: StoreConfig,

    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

/// Application metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppMetadata {
    /// Application name.
    pub name: String,
    /// Application version.
    pub version: String,
    /// Environment (development, staging, production).
    pub environment: String,
}

impl Default for AppMetadata {
    fn default() -> Self {
        Self {
            name: "roster".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            environment: "development".to_string(),
        }
    }
}

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind host.
    pub host: String,
    /// Bind port.
    pub port: u16,
    /// Request timeout in seconds.
    pub request_timeout_secs: u64,
    /// Maximum request body size in bytes.
    pub max_body_size: usize,
    /// Enable permissive CORS.
    pub cors_enabled: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            request_timeout_secs: 30,
            max_body_size: 1024 * 1024, // 1MB
            cors_enabled: true,
        }
    }
}

impl ServerConfig {
    /// Returns the server bind address.
    #[must_use]
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Returns the request timeout as a Duration.
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// User store configuration.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// How malformed `:id` path parameters are handled.
    pub id_parsing: InputMode,
    /// How malformed create bodies are handled.
    pub body_parsing: InputMode,
    /// Reject users without a name or email on create.
    pub validate_on_create: bool,
}

/// Observability configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
    /// Log format (json, pretty).
    pub log_format: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: "pretty".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_legacy_behaviour() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.addr(), "0.0.0.0:8080");
        assert_eq!(config.store.id_parsing, InputMode::Lenient);
        assert_eq!(config.store.body_parsing, InputMode::Lenient);
        assert!(!config.store.validate_on_create);
    }

    #[test]
    fn test_request_timeout() {
        let config = ServerConfig {
            request_timeout_secs: 5,
            ..ServerConfig::default()
        };
        assert_eq!(config.request_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_partial_sections_fill_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{"server":{"port":9000},"store":{"id_parsing":"strict"}}"#).unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.store.id_parsing, InputMode::Strict);
        assert_eq!(config.store.body_parsing, InputMode::Lenient);
        assert_eq!(config.observability.log_level, "info");
    }
}
