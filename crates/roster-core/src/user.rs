//! User entity.

use crate::UserId;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A user record as stored and served over HTTP.
///
/// Missing fields deserialize to their zero value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(default)]
pub struct User {
    /// Caller-supplied identifier.
    pub id: UserId,

    /// Display name.
    #[validate(length(min = 1, message = "Name is empty"))]
    pub name: String,

    /// Contact email.
    #[validate(length(min = 1, message = "Email is empty"))]
    pub email: String,
}

impl User {
    /// Creates a new user.
    #[must_use]
    pub fn new(id: UserId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }
}
