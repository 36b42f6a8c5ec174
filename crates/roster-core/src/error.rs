//! Unified error types for all layers of the application.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use thiserror::Error;

/// Unified error type for all layers of Roster.
#[derive(Error, Debug)]
pub enum RosterError {
    // ============ Domain Errors ============
    /// Resource not found
    #[error("Resource not found: {resource_type} with id {id}")]
    NotFound {
        resource_type: &'static str,
        id: String,
    },

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    // ============ Input Errors ============
    /// Path identifier could not be parsed
    #[error("invalid user id: {0}")]
    InvalidId(String),

    /// Request body could not be bound to the target type
    #[error("invalid request body: {0}")]
    InvalidBody(String),

    // ============ Infrastructure Errors ============
    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    // ============ Internal Errors ============
    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl RosterError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::NotFound { .. } => 404,
            Self::Validation(_) | Self::InvalidId(_) | Self::InvalidBody(_) => 400,
            Self::Configuration(_) | Self::Internal(_) => 500,
        }
    }

    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::InvalidId(_) => "INVALID_ID",
            Self::InvalidBody(_) => "INVALID_BODY",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Creates a not found error for a resource.
    #[must_use]
    pub fn not_found<T: ToString>(resource_type: &'static str, id: T) -> Self {
        Self::NotFound {
            resource_type,
            id: id.to_string(),
        }
    }

    /// Creates a validation error.
    #[must_use]
    pub fn validation<T: Into<String>>(message: T) -> Self {
        Self::Validation(message.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal<T: Into<String>>(message: T) -> Self {
        Self::Internal(message.into())
    }
}

/// Serializable error body returned by the HTTP layer.
///
/// Not-found lookups always carry the literal message `not found`, so the
/// body is byte-for-byte `{"error":"not found"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
}

impl ErrorResponse {
    /// Message used for every not-found response.
    pub const NOT_FOUND: &'static str = "not found";

    /// Creates a new error response from a `RosterError`.
    #[must_use]
    pub fn from_error(error: &RosterError) -> Self {
        let error = match error {
            RosterError::NotFound { .. } => Self::NOT_FOUND.to_string(),
            other => other.to_string(),
        };
        Self { error }
    }
}

impl From<&RosterError> for ErrorResponse {
    fn from(error: &RosterError) -> Self {
        Self::from_error(error)
    }
}
