//! `:id` path parameter extractor.

use crate::{responses::AppError, state::AppState};
use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use roster_core::{parse_user_id, parse_user_id_lenient, RosterError, UserId};

/// User ID taken from the `:id` path segment.
///
/// In lenient mode an unparseable segment yields ID `0`; in strict mode it
/// is rejected with 400.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserIdPath(pub UserId);

#[async_trait]
impl FromRequestParts<AppState> for UserIdPath {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let strict = state.input.id_parsing.is_strict();

        let raw = match Path::<String>::from_request_parts(parts, state).await {
            Ok(Path(raw)) => raw,
            Err(rejection) if strict => {
                return Err(AppError(RosterError::InvalidId(rejection.body_text())));
            }
            Err(_) => return Ok(Self(0)),
        };

        if strict {
            Ok(Self(parse_user_id(&raw)?))
        } else {
            Ok(Self(parse_user_id_lenient(&raw)))
        }
    }
}
