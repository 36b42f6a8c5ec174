//! Server startup utilities.

use roster_config::AppConfig;
use tracing::info;

/// Prints server startup information.
pub fn print_startup_info(config: &AppConfig) {
    let separator = "=".repeat(60);
    let addr = config.server.addr();
    info!("{}", separator);
    info!("{} v{} ({})", config.app.name, config.app.version, config.app.environment);
    info!("Users:     http://{}/users", addr);
    info!("Health:    http://{}/health", addr);
    info!("API Docs:  http://{}/api-docs/openapi.json", addr);
    info!(
        "Input:     id={} body={} validate_on_create={}",
        config.store.id_parsing, config.store.body_parsing, config.store.validate_on_create
    );
    info!("{}", separator);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_startup_info_does_not_panic() {
        let _ = tracing_subscriber::fmt::try_init();
        print_startup_info(&AppConfig::default());
    }

    #[test]
    fn test_print_startup_info_custom_port() {
        let _ = tracing_subscriber::fmt::try_init();
        let mut config = AppConfig::default();
        config.server.port = 3000;
        print_startup_info(&config);
    }
}
