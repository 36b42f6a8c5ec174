//! # Roster REST
//!
//! REST API layer using Axum for Roster.
//! Exposes user lookup and creation, a health check, and the OpenAPI document.

pub mod controllers;
pub mod extractors;
pub mod middleware;
pub mod openapi;
pub mod responses;
pub mod router;
pub mod state;

pub use router::*;
pub use state::*;
