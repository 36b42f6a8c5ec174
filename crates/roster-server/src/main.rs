//! # Roster Server
//!
//! Main entry point: loads configuration, installs logging, and serves the
//! user API until Ctrl+C or SIGTERM.

use roster_config::{AppConfig, ConfigLoader};
use roster_core::{
    telemetry::{init_logging, LogFormat},
    RosterError, RosterResult,
};
use roster_server::{app::build_app, startup::print_startup_info};
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        // Logging may not be installed yet if configuration failed to load.
        let _ = init_logging("info", LogFormat::Pretty);
        error!("Application error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> RosterResult<()> {
    let config = ConfigLoader::from_default_location()?.into_config();

    init_logging(
        &config.observability.log_level,
        LogFormat::from_name(&config.observability.log_format),
    )?;

    info!("Starting Roster Server...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    serve(config).await
}

async fn serve(config: AppConfig) -> RosterResult<()> {
    let router = build_app(&config);

    let addr = config.server.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| RosterError::Internal(format!("Failed to bind {addr}: {e}")))?;

    print_startup_info(&config);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| RosterError::Internal(format!("Server error: {e}")))?;

    info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received terminate signal, initiating graceful shutdown...");
        }
    }
}
