//! Validation utilities.

use crate::{RosterError, User};
use tracing::warn;
use validator::{Validate, ValidationErrors};

/// Extension trait for validation.
pub trait ValidateExt: Validate {
    /// Validates the struct and returns a `RosterError` on failure.
    fn validate_request(&self) -> Result<(), RosterError> {
        self.validate().map_err(validation_errors_to_roster_error)
    }
}

impl<T: Validate> ValidateExt for T {}

/// Converts `validator::ValidationErrors` to `RosterError`.
///
/// Fields are reported in name order so the message is stable.
#[must_use]
pub fn validation_errors_to_roster_error(errors: ValidationErrors) -> RosterError {
    let mut fields: Vec<(String, String)> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| {
                let message = error
                    .message
                    .as_ref()
                    .map_or_else(|| error.code.to_string(), ToString::to_string);
                (field.to_string(), message)
            })
        })
        .collect();
    fields.sort();

    let message = fields
        .iter()
        .map(|(field, message)| format!("{field}: {message}"))
        .collect::<Vec<_>>()
        .join("; ");

    RosterError::Validation(message)
}

/// Reports whether a user has both a name and an email.
///
/// Each missing field is logged at `warn`.
#[must_use]
pub fn validate_user(user: &User) -> bool {
    match user.validate() {
        Ok(()) => true,
        Err(errors) => {
            for (field, errors) in errors.field_errors() {
                for error in errors {
                    warn!(user_id = user.id, field = %field, code = %error.code, "User failed validation");
                }
            }
            false
        }
    }
}
