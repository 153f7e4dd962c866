//! Identifier newtypes for ships and platform users.
//!
//! Platform user ids are opaque strings handed to us by the webhook payload;
//! ship ids are assigned by the storage backend at creation and double as the
//! insertion-order tiebreaker for rankings.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque platform user identifier.
///
/// Treated as an uninterpreted string: the bot never parses it, only compares
/// it and passes it back to the platform API.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for UserId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Storage-assigned ship identifier, stable for the record's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShipId(i64);

impl ShipId {
    #[inline]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    #[inline]
    pub const fn into_inner(self) -> i64 {
        self.0
    }
}

impl fmt::Display for ShipId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ShipId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// Normalize a user pair into a canonical order.
///
/// Every pair lookup goes through this so `(a, b)` and `(b, a)` address the
/// same record regardless of which way the command was invoked.
pub fn canonical_pair<'a>(a: &'a UserId, b: &'a UserId) -> (&'a UserId, &'a UserId) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
