//! Store trait definitions.

use async_trait::async_trait;
use roster_core::{Interface, RosterResult, User, UserId};

/// User store trait.
///
/// Stores are append-only: users are never updated or removed, and
/// identifiers are not required to be unique.
#[async_trait]
pub trait UserStore: Interface + Send + Sync {
    /// Finds the first user, in insertion order, with the given ID.
    async fn find_by_id(&self, id: UserId) -> RosterResult<Option<User>>;

    /// Appends a user and returns the stored record.
    async fn save(&self, user: &User) -> RosterResult<User>;

    /// Counts all users.
    async fn count(&self) -> RosterResult<u64>;
}
