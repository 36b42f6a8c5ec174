//! User service implementation.

use crate::policy::ServicePolicy;
use crate::user_service::UserService;
use async_trait::async_trait;
use roster_core::{validate_user, RosterError, RosterResult, User, UserId, ValidateExt};
use roster_store::UserStore;
use shaku::Component;
use std::sync::Arc;
use tracing::{debug, info};

/// User service backed by any `UserStore`.
#[derive(Component)]
#[shaku(interface = UserService)]
pub struct UserServiceImpl {
    #[shaku(inject)]
    store: Arc<dyn UserStore>,
    policy: ServicePolicy,
}

impl UserServiceImpl {
    /// Creates a new user service.
    #[must_use]
    pub fn new(store: Arc<dyn UserStore>, policy: ServicePolicy) -> Self {
        Self { store, policy }
    }
}

#[async_trait]
impl UserService for UserServiceImpl {
    async fn create_user(&self, user: User) -> RosterResult<User> {
        debug!(user_id = user.id, "Creating user");

        if self.policy.validate_on_create && !validate_user(&user) {
            user.validate_request()?;
        }

        let saved = self.store.save(&user).await?;

        info!(user_id = saved.id, "User created");
        Ok(saved)
    }

    async fn get_user(&self, id: UserId) -> RosterResult<User> {
        debug!(user_id = id, "Getting user");

        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| RosterError::not_found("User", id))
    }

    async fn user_count(&self) -> RosterResult<u64> {
        self.store.count().await
    }
}

impl std::fmt::Debug for UserServiceImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserServiceImpl")
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}
