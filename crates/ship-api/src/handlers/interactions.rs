//! Interactions webhook handler
//!
//! Verification happens against the raw body bytes before any JSON parsing,
//! so the handler takes `Bytes` rather than an extractor that would consume
//! the body first.

use axum::{body::Bytes, extract::State, http::HeaderMap, Json};
use ship_common::AppError;
use ship_discord::protocol::{Interaction, InteractionResponse};

use crate::response::{ApiError, ApiResult};
use crate::state::AppState;

/// Signature header carrying the hex-encoded Ed25519 signature
pub const SIGNATURE_HEADER: &str = "x-signature-ed25519";
/// Signature header carrying the request timestamp
pub const TIMESTAMP_HEADER: &str = "x-signature-timestamp";

/// Receive one interaction
///
/// POST /interactions
pub async fn post_interaction(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> ApiResult<Json<InteractionResponse>> {
    let signature = header_str(&headers, SIGNATURE_HEADER)?;
    let timestamp = header_str(&headers, TIMESTAMP_HEADER)?;

    state
        .verifier()
        .verify(signature, timestamp, &body)
        .map_err(|_| ApiError::from(AppError::InvalidSignature))?;

    let interaction: Interaction = serde_json::from_slice(&body)
        .map_err(|e| ApiError::from(AppError::MalformedPayload(e.to_string())))?;

    let response = state.interactions().handle(interaction).await;
    Ok(Json(response))
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> ApiResult<&'a str> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| ApiError::from(AppError::MissingSignatureHeaders))
}
