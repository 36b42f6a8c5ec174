//! JSON body extractor for user creation.
//!
//! The content type is not checked; the body is always decoded as JSON.

use crate::{responses::AppError, state::AppState};
use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    response::{IntoResponse, Response},
};
use roster_core::{RosterError, User};
use serde_json::{Deserializer, Map, Value};
use tracing::debug;

/// User decoded from the request body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserBody(pub User);

/// Decodes a user, rejecting anything that does not bind cleanly.
///
/// Keys are matched case-sensitively and trailing data is an error.
pub fn bind_user_strict(bytes: &[u8]) -> Result<User, RosterError> {
    serde_json::from_slice(bytes).map_err(|e| RosterError::InvalidBody(e.to_string()))
}

/// Decodes a user without ever failing.
///
/// Only the first JSON value in the body is read; anything after it is
/// ignored. Each field of a JSON object that has the expected type is kept,
/// matching keys exactly first and then ignoring ASCII case. Every other
/// field takes its zero value. Anything that is not a JSON object yields the
/// all-zero user.
#[must_use]
pub fn bind_user_lenient(bytes: &[u8]) -> User {
    match Deserializer::from_slice(bytes).into_iter::<Value>().next() {
        Some(Ok(Value::Object(fields))) => User {
            id: field(&fields, "id").and_then(Value::as_i64).unwrap_or_default(),
            name: string_field(&fields, "name"),
            email: string_field(&fields, "email"),
        },
        Some(Ok(_)) => {
            debug!("Request body is not a JSON object, binding empty user");
            User::default()
        }
        Some(Err(e)) => {
            debug!("Request body is not valid JSON, binding empty user: {}", e);
            User::default()
        }
        None => {
            debug!("Request body is empty, binding empty user");
            User::default()
        }
    }
}

fn field<'a>(fields: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    fields.get(key).or_else(|| {
        fields
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(key))
            .map(|(_, value)| value)
    })
}

fn string_field(fields: &Map<String, Value>, key: &str) -> String {
    field(fields, key)
        .and_then(Value::as_str)
        .map(str::to_owned)
        .unwrap_or_default()
}

#[async_trait]
impl FromRequest<AppState> for UserBody {
    type Rejection = Response;

    async fn from_request(req: Request, state: &AppState) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(IntoResponse::into_response)?;

        if state.input.body_parsing.is_strict() {
            bind_user_strict(&bytes)
                .map(Self)
                .map_err(|e| AppError(e).into_response())
        } else {
            Ok(Self(bind_user_lenient(&bytes)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lenient_binds_complete_user() {
        let user = bind_user_lenient(br#"{"id":1,"name":"A","email":"a@x.com"}"#);
        assert_eq!(user, User::new(1, "A", "a@x.com"));
    }

    #[test]
    fn test_lenient_zero_user_for_garbage() {
        assert_eq!(bind_user_lenient(b"not json"), User::default());
        assert_eq!(bind_user_lenient(b""), User::default());
        assert_eq!(bind_user_lenient(b"[1,2,3]"), User::default());
        assert_eq!(bind_user_lenient(b"null"), User::default());
    }

    #[test]
    fn test_lenient_keeps_well_typed_fields() {
        let user = bind_user_lenient(br#"{"id":"x","name":"A","email":7}"#);
        assert_eq!(user, User::new(0, "A", ""));
    }

    #[test]
    fn test_lenient_rejects_fractional_ids() {
        let user = bind_user_lenient(br#"{"id":1.5,"name":"A"}"#);
        assert_eq!(user.id, 0);
    }

    #[test]
    fn test_lenient_ignores_unknown_fields() {
        let user = bind_user_lenient(br#"{"id":2,"role":"admin"}"#);
        assert_eq!(user, User::new(2, "", ""));
    }

    #[test]
    fn test_lenient_matches_keys_ignoring_case() {
        let user = bind_user_lenient(br#"{"ID":5,"Name":"A","EMAIL":"a@x.com"}"#);
        assert_eq!(user, User::new(5, "A", "a@x.com"));
    }

    #[test]
    fn test_lenient_prefers_exact_key() {
        let user = bind_user_lenient(br#"{"NAME":"upper","name":"exact"}"#);
        assert_eq!(user.name, "exact");
    }

    #[test]
    fn test_lenient_reads_only_first_value() {
        let user = bind_user_lenient(br#"{"id":1,"name":"A","email":"a@x.com"} trailing"#);
        assert_eq!(user, User::new(1, "A", "a@x.com"));

        let user = bind_user_lenient(br#"{"id":2} {"id":3}"#);
        assert_eq!(user.id, 2);
    }

    #[test]
    fn test_strict_is_case_sensitive_and_rejects_trailing_data() {
        assert_eq!(bind_user_strict(br#"{"ID":5}"#).unwrap(), User::default());
        assert!(matches!(
            bind_user_strict(br#"{"id":1} trailing"#),
            Err(RosterError::InvalidBody(_))
        ));
    }

    #[test]
    fn test_strict_accepts_partial_object() {
        assert_eq!(bind_user_strict(br#"{"id":4}"#).unwrap(), User::new(4, "", ""));
    }

    #[test]
    fn test_strict_rejects_garbage_and_type_errors() {
        assert!(matches!(bind_user_strict(b"not json"), Err(RosterError::InvalidBody(_))));
        assert!(matches!(bind_user_strict(b""), Err(RosterError::InvalidBody(_))));
        assert!(matches!(bind_user_strict(br#"{"id":"x"}"#), Err(RosterError::InvalidBody(_))));
    }
}
