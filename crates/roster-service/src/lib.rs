//! # Roster Service
//!
//! Business logic service layer for Roster.
//! Applies the create/lookup policy on top of a `UserStore`.

pub mod r#impl;
pub mod policy;
pub mod user_service;

pub use policy::*;
pub use r#impl::{UserServiceImpl, UserServiceImplParameters};
pub use user_service::*;
