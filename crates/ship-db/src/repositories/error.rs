//! Error mapping for the ship repository

use ship_core::DomainError;
use sqlx::Error as SqlxError;

/// Wrap a SQLx failure as an opaque database error
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Map a unique-index violation to the caller's error, anything else to a
/// database error. The ships table keeps its name-uniqueness invariant in a
/// unique index, so duplicate names surface here.
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
    }
    DomainError::DatabaseError(e.to_string())
}
