//! In-memory user store.

use crate::UserStore;
use async_trait::async_trait;
use parking_lot::RwLock;
use roster_core::{RosterResult, User, UserId};
use shaku::Component;
use std::collections::HashMap;
use tracing::debug;

/// Ordered user records plus the position of the first record for each ID.
///
/// Public only because the generated `InMemoryUserStoreParameters` names it.
#[doc(hidden)]
#[derive(Debug, Default)]
pub struct UserSequence {
    users: Vec<User>,
    first_index: HashMap<UserId, usize>,
}

impl UserSequence {
    fn push(&mut self, user: User) {
        let position = self.users.len();
        self.first_index.entry(user.id).or_insert(position);
        self.users.push(user);
    }

    fn first(&self, id: UserId) -> Option<&User> {
        self.first_index.get(&id).map(|&position| &self.users[position])
    }
}

/// Process-lifetime user store.
///
/// Lookups take a shared lock, appends take an exclusive one, so concurrent
/// requests never observe a half-written sequence.
#[derive(Component, Default)]
#[shaku(interface = UserStore)]
pub struct InMemoryUserStore {
    #[shaku(default)]
    sequence: RwLock<UserSequence>,
}

impl InMemoryUserStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with users, in order.
    #[must_use]
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        let store = Self::new();
        {
            let mut sequence = store.sequence.write();
            for user in users {
                sequence.push(user);
            }
        }
        store
    }

    /// Returns the first user with the given ID.
    #[must_use]
    pub fn lookup(&self, id: UserId) -> Option<User> {
        self.sequence.read().first(id).cloned()
    }

    /// Appends a user unconditionally.
    pub fn append(&self, user: User) {
        let mut sequence = self.sequence.write();
        sequence.push(user);
        debug!(len = sequence.users.len(), "User appended to store");
    }

    /// Number of stored users.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sequence.read().users.len()
    }

    /// Returns true if no users are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_id(&self, id: UserId) -> RosterResult<Option<User>> {
        Ok(self.lookup(id))
    }

    async fn save(&self, user: &User) -> RosterResult<User> {
        self.append(user.clone());
        Ok(user.clone())
    }

    async fn count(&self) -> RosterResult<u64> {
        Ok(self.len() as u64)
    }
}

impl std::fmt::Debug for InMemoryUserStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryUserStore")
            .field("len", &self.len())
            .finish()
    }
}
