//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Ship not found: {0}")]
    ShipNotFound(String),

    #[error("No ship exists for that user pair")]
    PairNotFound,

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Ship name already taken: {0}")]
    DuplicateName(String),

    #[error("Support count must be non-negative, got {0}")]
    InvalidSupportValue(i64),

    // =========================================================================
    // Platform Errors
    // =========================================================================
    #[error("Platform API request failed: {0}")]
    FetchError(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Cache error: {0}")]
    CacheError(String),
}

impl DomainError {
    /// Get an error code string for logs and diagnostics
    pub fn code(&self) -> &'static str {
        match self {
            Self::ShipNotFound(_) => "UNKNOWN_SHIP",
            Self::PairNotFound => "UNKNOWN_PAIR",
            Self::DuplicateName(_) => "DUPLICATE_NAME",
            Self::InvalidSupportValue(_) => "INVALID_SUPPORT_VALUE",
            Self::FetchError(_) => "FETCH_ERROR",
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::CacheError(_) => "CACHE_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ShipNotFound(_) | Self::PairNotFound)
    }

    /// Check if this is a user-correctable validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::DuplicateName(_) | Self::InvalidSupportValue(_))
    }

    /// Check if this is an infrastructure failure rather than a business outcome
    pub fn is_infrastructure(&self) -> bool {
        matches!(
            self,
            Self::FetchError(_) | Self::DatabaseError(_) | Self::CacheError(_)
        )
    }
}
