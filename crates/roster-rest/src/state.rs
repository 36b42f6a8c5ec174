//! Application state for Axum handlers.

use roster_config::{InputMode, StoreConfig};
use roster_service::UserService;
use shaku::{HasComponent, Module};
use std::sync::Arc;

/// How extractors treat malformed client input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputPolicy {
    /// Handling of unparseable `:id` path parameters.
    pub id_parsing: InputMode,
    /// Handling of create bodies that do not bind to a user.
    pub body_parsing: InputMode,
}

impl InputPolicy {
    /// Rejects every kind of malformed input.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            id_parsing: InputMode::Strict,
            body_parsing: InputMode::Strict,
        }
    }
}

impl From<&StoreConfig> for InputPolicy {
    fn from(config: &StoreConfig) -> Self {
        Self {
            id_parsing: config.id_parsing,
            body_parsing: config.body_parsing,
        }
    }
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserService>,
    pub input: InputPolicy,
}

impl AppState {
    /// Creates a new application state.
    #[must_use]
    pub fn new(user_service: Arc<dyn UserService>, input: InputPolicy) -> Self {
        Self {
            user_service,
            input,
        }
    }

    /// Creates application state by resolving services from a Shaku module.
    #[must_use]
    pub fn from_module<M>(module: &M, input: InputPolicy) -> Self
    where
        M: Module + HasComponent<dyn UserService>,
    {
        Self::new(module.resolve(), input)
    }
}
