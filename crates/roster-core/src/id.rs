//! User identifier parsing.

use crate::{RosterError, RosterResult};
use std::num::IntErrorKind;
use tracing::debug;

/// Identifier of a user. Uniqueness is not enforced anywhere.
pub type UserId = i64;

/// Parses a path parameter into a user ID.
///
/// Accepts an optional `+`/`-` sign followed by ASCII digits. Anything else,
/// including out-of-range values, is rejected.
pub fn parse_user_id(raw: &str) -> RosterResult<UserId> {
    raw.parse::<UserId>()
        .map_err(|_| RosterError::InvalidId(raw.to_string()))
}

/// Parses a path parameter into a user ID, never failing.
///
/// Malformed input becomes `0`. Out-of-range input saturates to
/// `UserId::MAX` / `UserId::MIN`.
#[must_use]
pub fn parse_user_id_lenient(raw: &str) -> UserId {
    match raw.parse::<UserId>() {
        Ok(id) => id,
        Err(err) => {
            let id = match err.kind() {
                IntErrorKind::PosOverflow => UserId::MAX,
                IntErrorKind::NegOverflow => UserId::MIN,
                _ => 0,
            };
            debug!(raw = %raw, id, "Malformed user id, substituting default");
            id
        }
    }
}
