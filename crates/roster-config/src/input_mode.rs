//! Handling mode for malformed client input.

use serde::{Deserialize, Serialize};
use std::fmt;

/// What to do with a path parameter or request body that cannot be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    /// Substitute zero values and carry on.
    #[default]
    Lenient,
    /// Reject the request with a client error.
    Strict,
}

impl InputMode {
    /// Returns true if malformed input is rejected.
    #[must_use]
    pub const fn is_strict(&self) -> bool {
        matches!(self, Self::Strict)
    }
}

impl fmt::Display for InputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lenient => write!(f, "lenient"),
            Self::Strict => write!(f, "strict"),
        }
    }
}
