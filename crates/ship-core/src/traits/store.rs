//! Storage port - defines the interface for ship persistence
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Backends (relational, key-value) are
//! selected at process startup; nothing above this trait ever learns
//! which engine is in use.

use async_trait::async_trait;

use crate::entities::Ship;
use crate::error::DomainError;
use crate::value_objects::UserId;

/// Result type for storage operations
pub type RepoResult<T> = Result<T, DomainError>;

#[async_trait]
pub trait ShipStore: Send + Sync {
    /// Create a new ship with a zero support count.
    ///
    /// Fails with [`DomainError::DuplicateName`] when a ship with the same
    /// name (case-insensitive) already exists.
    async fn create(&self, user1: &UserId, user2: &UserId, name: &str) -> RepoResult<Ship>;

    /// Find a ship by name, case-insensitive exact match
    async fn find_by_name(&self, name: &str) -> RepoResult<Option<Ship>>;

    /// Find a ship by user pair, regardless of argument order
    async fn find_by_pair(&self, user1: &UserId, user2: &UserId) -> RepoResult<Option<Ship>>;

    /// Rename the ship for the given user pair.
    ///
    /// Fails with [`DomainError::PairNotFound`] when no ship matches the pair
    /// and [`DomainError::DuplicateName`] when the new name collides with a
    /// different ship.
    async fn rename(&self, user1: &UserId, user2: &UserId, new_name: &str) -> RepoResult<Ship>;

    /// Delete a ship by name. Fails with [`DomainError::ShipNotFound`] if absent.
    async fn delete(&self, name: &str) -> RepoResult<()>;

    /// Add one support vote and return the post-increment count.
    ///
    /// Must be atomic at the storage layer: concurrent increments on the same
    /// name never lose an update.
    async fn increment_support(&self, name: &str) -> RepoResult<i64>;

    /// Administrative absolute override of the support count.
    ///
    /// Fails with [`DomainError::InvalidSupportValue`] when `value < 0`.
    async fn set_support(&self, name: &str, value: i64) -> RepoResult<()>;

    /// Top ships ordered by support count descending, ties broken by
    /// insertion order (earliest first).
    async fn top_by_score(&self, limit: usize) -> RepoResult<Vec<Ship>>;
}
