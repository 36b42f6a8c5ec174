//! Main application router.

use crate::{
    controllers::{health_controller, user_controller},
    middleware::logging_middleware,
    openapi::openapi_json,
    state::AppState,
};
use axum::{extract::DefaultBodyLimit, http::StatusCode, middleware, routing::get, Router};
use roster_config::ServerConfig;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::info;

/// Creates the main application router.
pub fn create_router(state: AppState, server_config: &ServerConfig) -> Router {
    let router = Router::new()
        .merge(user_controller::router())
        .merge(health_controller::router())
        .route("/api-docs/openapi.json", get(openapi_json))
        .with_state(state)
        .layer(DefaultBodyLimit::max(server_config.max_body_size))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            server_config.request_timeout(),
        ))
        .layer(create_cors_layer(server_config))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(logging_middleware));

    info!("Router created with user endpoints and OpenAPI document at /api-docs/openapi.json");
    router
}

/// Creates a CORS layer based on server configuration.
fn create_cors_layer(server_config: &ServerConfig) -> CorsLayer {
    if server_config.cors_enabled {
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
    }
}
