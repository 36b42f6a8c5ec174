//! # Roster Core
//!
//! Core types, validation, and error definitions for Roster.
//! Every other crate in the workspace builds on the `User` entity and the
//! unified `RosterError` defined here.

pub mod error;
pub mod id;
pub mod result;
pub mod telemetry;
pub mod user;
pub mod validation;

pub use error::*;
pub use id::*;
pub use result::*;
pub use user::*;
pub use validation::*;

// Re-export shaku for dependency injection
pub use shaku::{module, HasComponent, Interface};
