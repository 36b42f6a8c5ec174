//! Service policy derived from configuration.

use roster_config::StoreConfig;
use serde::{Deserialize, Serialize};

/// Rules the user service applies on top of the store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServicePolicy {
    /// Reject users without a name or email on create.
    pub validate_on_create: bool,
}

impl From<&StoreConfig> for ServicePolicy {
    fn from(config: &StoreConfig) -> Self {
        Self {
            validate_on_create: config.validate_on_create,
        }
    }
}
