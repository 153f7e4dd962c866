//! Application error types
//!
//! Unified error handling above the domain layer. Only signature failures
//! ever surface to the webhook caller as protocol errors; everything else is
//! converted into ordinary chat content before it reaches the wire.

use ship_core::DomainError;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Request authentication
    #[error("Invalid request signature")]
    InvalidSignature,

    #[error("Missing signature headers")]
    MissingSignatureHeaders,

    // Payload problems
    #[error("Malformed interaction payload: {0}")]
    MalformedPayload(String),

    // Infrastructure
    #[error("Database error: {0}")]
    Database(String),

    #[error("Cache error: {0}")]
    Cache(String),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    // Internal errors
    #[error("Internal server error")]
    Internal(#[source] anyhow::Error),

    // Domain errors
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl AppError {
    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            // 401 Unauthorized
            Self::InvalidSignature | Self::MissingSignatureHeaders => 401,

            // 400 Bad Request
            Self::MalformedPayload(_) => 400,

            // 500 Internal Server Error
            Self::Database(_) | Self::Cache(_) | Self::Config(_) | Self::Internal(_) => 500,

            // Domain errors are rendered as chat content by the service
            // layer; reaching HTTP with one is an internal failure.
            Self::Domain(_) => 500,
        }
    }

    /// Get error code for logs and diagnostics
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidSignature => "INVALID_SIGNATURE",
            Self::MissingSignatureHeaders => "MISSING_SIGNATURE_HEADERS",
            Self::MalformedPayload(_) => "MALFORMED_PAYLOAD",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Cache(_) => "CACHE_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
            Self::Domain(e) => e.code(),
        }
    }

    /// Check if this is a client error (4xx)
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        let status = self.status_code();
        (400..500).contains(&status)
    }

    /// Create an internal error from any error
    pub fn internal(err: impl Into<anyhow::Error>) -> Self {
        Self::Internal(err.into())
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
