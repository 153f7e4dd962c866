//! Error responses for the webhook endpoint
//!
//! The platform expects a plain-text 401 for signature failures; everything
//! else a handler can produce is already a normal interaction response by
//! the time it reaches the wire.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use ship_common::AppError;
use thiserror::Error;
use tracing::warn;

/// API error type for the webhook endpoint
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    App(#[from] AppError),
}

impl ApiError {
    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::App(e) => StatusCode::from_u16(e.status_code())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        }
    }

    /// Get error code for logs
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::App(e) => e.error_code(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status == StatusCode::UNAUTHORIZED {
            warn!(code = self.error_code(), "Rejected interaction request");
            // Fixed plain-text body, per the interactions contract
            return (status, "Invalid request signature").into_response();
        }
        (status, self.to_string()).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;
