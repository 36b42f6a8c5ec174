//! Application assembly.

use crate::di::build_module;
use axum::Router;
use roster_config::AppConfig;
use roster_rest::{create_router, AppState, InputPolicy};

/// Builds the HTTP application for a configuration.
///
/// Each call owns a fresh, empty user store.
pub fn build_app(config: &AppConfig) -> Router {
    let module = build_module(&config.store);
    let state = AppState::from_module(module.as_ref(), InputPolicy::from(&config.store));
    create_router(state, &config.server)
}
