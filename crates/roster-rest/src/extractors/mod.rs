//! Custom Axum extractors.

mod user_body;
mod user_id;

pub use user_body::*;
pub use user_id::*;
