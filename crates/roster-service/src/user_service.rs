//! User service trait definition.

use async_trait::async_trait;
use roster_core::{Interface, RosterResult, User, UserId};

/// User service trait.
#[async_trait]
pub trait UserService: Interface + Send + Sync {
    /// Creates a new user and returns it as stored.
    async fn create_user(&self, user: User) -> RosterResult<User>;

    /// Gets the first user created with the given ID.
    async fn get_user(&self, id: UserId) -> RosterResult<User>;

    /// Counts stored users.
    async fn user_count(&self) -> RosterResult<u64>;
}
