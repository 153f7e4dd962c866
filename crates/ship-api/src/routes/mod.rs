//! Route definitions

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{health, interactions};
use crate::state::AppState;

/// Create the application router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/interactions", post(interactions::post_interaction))
        .route("/health", get(health::health_check))
}
