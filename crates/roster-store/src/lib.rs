//! # Roster Store
//!
//! Storage layer for user records.
//!
//! ```text
//! Service
//!   ↓  Arc<dyn UserStore>   (store interface)
//! InMemoryUserStore         (append-only sequence behind a RwLock)
//! ```

pub mod memory;
pub mod traits;

pub use memory::*;
pub use traits::*;
