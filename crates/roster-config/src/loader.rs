//! Configuration loader with layered sources.

use crate::{format_validation_errors, AppConfig, ConfigValidator};
use config::{Config, ConfigError, Environment, File};
use roster_core::RosterError;
use std::path::Path;
use tracing::{debug, info};

/// Environment variable selecting the environment-specific config file.
pub const ENVIRONMENT_VAR: &str = "ROSTER_ENVIRONMENT";
/// Environment variable overriding the config directory.
pub const CONFIG_DIR_VAR: &str = "ROSTER_CONFIG_DIR";
/// Prefix for per-key environment overrides (`ROSTER__SERVER__PORT`).
pub const ENV_PREFIX: &str = "ROSTER";

/// Configuration loaded once at startup.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: AppConfig,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    ///
    /// Configuration is loaded from multiple sources in order:
    /// 1. `config/default.toml` - Default values
    /// 2. `config/{environment}.toml` - Environment-specific overrides
    /// 3. `config/local.toml` - Local overrides
    /// 4. Environment variables with `ROSTER__` prefix
    ///
    /// Missing files are skipped; built-in defaults fill every gap.
    pub fn new(config_dir: impl AsRef<str>) -> Result<Self, RosterError> {
        let config = Self::load_config(config_dir.as_ref())?;
        Ok(Self { config })
    }

    /// Loads configuration from `$ROSTER_CONFIG_DIR`, or `./config` if unset.
    pub fn from_default_location() -> Result<Self, RosterError> {
        let dir = std::env::var(CONFIG_DIR_VAR).unwrap_or_else(|_| "./config".to_string());
        Self::new(dir)
    }

    /// Returns the loaded configuration.
    #[must_use]
    pub fn get(&self) -> &AppConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    #[must_use]
    pub fn into_config(self) -> AppConfig {
        self.config
    }

    /// Loads configuration from the specified directory.
    fn load_config(config_dir: &str) -> Result<AppConfig, RosterError> {
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file found or error loading it: {}", e);
        }

        let environment =
            std::env::var(ENVIRONMENT_VAR).unwrap_or_else(|_| "development".to_string());

        info!("Loading configuration for environment: {}", environment);

        let mut builder = Config::builder();

        for name in ["default", environment.as_str(), "local"] {
            let path = format!("{config_dir}/{name}.toml");
            if Path::new(&path).exists() {
                debug!("Loading config layer from: {}", path);
                builder = builder.add_source(File::with_name(&path).required(false));
            }
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().map_err(config_error_to_roster_error)?;

        let app_config: AppConfig = config
            .try_deserialize()
            .map_err(config_error_to_roster_error)?;

        ConfigValidator::validate(&app_config)
            .map_err(|errors| RosterError::Configuration(format_validation_errors(&errors)))?;

        Ok(app_config)
    }
}

fn config_error_to_roster_error(err: ConfigError) -> RosterError {
    RosterError::Configuration(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::InputMode;
    use parking_lot::Mutex;
    use std::fs;

    // Loading reads process-wide environment variables.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_missing_directory_uses_defaults() {
        let _env = ENV_LOCK.lock();
        let loader = ConfigLoader::new("/nonexistent/roster/config").unwrap();
        let config = loader.get();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.store.id_parsing, InputMode::Lenient);
        assert!(!config.store.validate_on_create);
    }

    #[test]
    fn test_default_file_overrides_builtins() {
        let _env = ENV_LOCK.lock();
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("default.toml"),
            "[server]\nport = 9100\n\n[store]\nid_parsing = \"strict\"\n",
        )
        .unwrap();

        let config = ConfigLoader::new(dir.path().to_string_lossy()).unwrap().into_config();
        assert_eq!(config.server.port, 9100);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.store.id_parsing, InputMode::Strict);
        assert_eq!(config.store.body_parsing, InputMode::Lenient);
    }

    #[test]
    fn test_local_file_wins_over_default() {
        let _env = ENV_LOCK.lock();
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("default.toml"), "[server]\nport = 9100\n").unwrap();
        fs::write(dir.path().join("local.toml"), "[server]\nport = 9200\n").unwrap();

        let loader = ConfigLoader::new(dir.path().to_string_lossy()).unwrap();
        assert_eq!(loader.get().server.port, 9200);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let _env = ENV_LOCK.lock();
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("default.toml"), "[server]\nport = 0\n").unwrap();

        let err = ConfigLoader::new(dir.path().to_string_lossy()).err().unwrap();
        assert!(matches!(err, RosterError::Configuration(ref m) if m.contains("Invalid server port")));
    }

    #[test]
    fn test_environment_overrides_port() {
        let _env = ENV_LOCK.lock();
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("default.toml"), "[server]\nport = 9100\n").unwrap();

        std::env::set_var("ROSTER__SERVER__PORT", "9000");
        let loaded = ConfigLoader::new(dir.path().to_string_lossy());
        std::env::remove_var("ROSTER__SERVER__PORT");

        assert_eq!(loaded.unwrap().get().server.port, 9000);
    }

    #[test]
    fn test_environment_overrides_strings_and_modes() {
        let _env = ENV_LOCK.lock();
        std::env::set_var("ROSTER__APP__NAME", "roster-env-test");
        std::env::set_var("ROSTER__STORE__BODY_PARSING", "strict");
        let loaded = ConfigLoader::new("/nonexistent/roster/config");
        std::env::remove_var("ROSTER__APP__NAME");
        std::env::remove_var("ROSTER__STORE__BODY_PARSING");

        let config = loaded.unwrap().into_config();
        assert_eq!(config.app.name, "roster-env-test");
        assert_eq!(config.store.body_parsing, InputMode::Strict);
    }
}
