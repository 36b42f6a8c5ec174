//! # Roster Server Library
//!
//! Dependency injection wiring and application assembly for the Roster
//! server binary.

pub mod app;
pub mod di;
pub mod startup;
