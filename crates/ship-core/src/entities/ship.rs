//! Ship entity - a named pairing of two users with a support counter

use crate::value_objects::{canonical_pair, ShipId, UserId};

/// A named pairing record.
///
/// The name is unique across all live ships (case-insensitive); the user pair
/// is order-insensitive for lookup purposes. `support_count` never goes below
/// zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ship {
    pub id: ShipId,
    pub user1_id: UserId,
    pub user2_id: UserId,
    pub name: String,
    pub support_count: i64,
}

impl Ship {
    /// Create a new Ship with a zero support count
    pub fn new(id: ShipId, user1_id: UserId, user2_id: UserId, name: String) -> Self {
        Self {
            id,
            user1_id,
            user2_id,
            name,
            support_count: 0,
        }
    }

    /// Check whether this ship pairs the two given users, in either order
    pub fn involves(&self, a: &UserId, b: &UserId) -> bool {
        canonical_pair(&self.user1_id, &self.user2_id) == canonical_pair(a, b)
    }

    /// Case-insensitive name comparison
    pub fn matches_name(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}
