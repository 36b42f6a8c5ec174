//! Dependency injection module using Shaku.

use roster_config::StoreConfig;
use roster_core::module;
use roster_service::{ServicePolicy, UserServiceImpl, UserServiceImplParameters};
use roster_store::InMemoryUserStore;
use std::sync::Arc;

// Single-process module: the in-memory store and the user service on top of it.
module! {
    pub RosterModule {
        components = [
            InMemoryUserStore,
            UserServiceImpl,
        ],
        providers = [],
    }
}

/// Builds the module, applying the store policy to the user service.
#[must_use]
pub fn build_module(store_config: &StoreConfig) -> Arc<RosterModule> {
    let module = RosterModule::builder()
        .with_component_parameters::<UserServiceImpl>(UserServiceImplParameters {
            policy: ServicePolicy::from(store_config),
        })
        .build();

    Arc::new(module)
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_core::{HasComponent, RosterError, User};
    use roster_service::UserService;

    fn user_service(module: &RosterModule) -> Arc<dyn UserService> {
        module.resolve()
    }

    #[tokio::test]
    async fn test_resolved_service_is_shared() {
        let module = build_module(&StoreConfig::default());

        user_service(&module).create_user(User::new(1, "A", "a@x.com")).await.unwrap();

        let service = user_service(&module);
        assert_eq!(service.user_count().await.unwrap(), 1);
        assert_eq!(service.get_user(1).await.unwrap(), User::new(1, "A", "a@x.com"));
    }

    #[tokio::test]
    async fn test_policy_is_applied() {
        let module = build_module(&StoreConfig {
            validate_on_create: true,
            ..StoreConfig::default()
        });

        let err = user_service(&module).create_user(User::default()).await.unwrap_err();
        assert!(matches!(err, RosterError::Validation(_)));
    }

    #[tokio::test]
    async fn test_modules_are_isolated() {
        let first = build_module(&StoreConfig::default());
        let second = build_module(&StoreConfig::default());

        user_service(&first).create_user(User::new(1, "A", "a@x.com")).await.unwrap();
        assert_eq!(user_service(&second).user_count().await.unwrap(), 0);
    }
}
