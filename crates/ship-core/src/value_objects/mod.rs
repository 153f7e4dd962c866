//! Value objects - identifier newtypes shared across the domain

mod ids;

pub use ids::{canonical_pair, ShipId, UserId};
