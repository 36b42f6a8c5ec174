//! # Roster Config
//!
//! Configuration management for Roster.
//! Supports layered configuration from files and environment variables,
//! loaded once at startup.

mod app_config;
mod input_mode;
mod loader;
mod validation;

pub use app_config::*;
pub use input_mode::*;
pub use loader::*;
pub use validation::*;
