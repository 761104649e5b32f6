//! HTTP request handlers
//!
//! This module contains the request handlers for the webhook service.
//! Handlers translate HTTP requests to domain operations and domain results
//! to HTTP responses.
//!
//! The webhook handler hands the raw body bytes to the processor untouched;
//! signature verification needs them exactly as they arrived on the wire,
//! before any deserialization.

use axum::{body::Bytes, extract::State, http::HeaderMap, Json};
use serde::{Deserialize, Serialize};

use github_events::SIGNATURE_HEADER;
use review_roulette_core::ReviewOutcome;

use crate::{errors::ApiError, AppState};

/// Header GitHub sets to identify a delivery attempt. Used for log
/// correlation only.
const DELIVERY_HEADER: &str = "x-github-delivery";

/// POST /github-webhook
///
/// Receive a GitHub webhook delivery, verify its signature, and reward the
/// pull request author when the delivery is an approved review submission.
///
/// Returns `200 "OK"` both for rewarded deliveries and for authentic
/// deliveries that are not approved review submissions (pings, comment
/// reviews, change requests).
pub async fn handle_github_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<&'static str, ApiError> {
    let delivery_id = headers
        .get(DELIVERY_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("<none>");

    let signature_header = headers
        .get(SIGNATURE_HEADER)
        .and_then(|value| value.to_str().ok());

    let outcome = state.processor.process(&body, signature_header).await?;

    match outcome {
        ReviewOutcome::Rewarded { recipient, reward } => {
            tracing::info!(
                delivery_id = %delivery_id,
                recipient = %recipient,
                reward = %reward,
                "Webhook delivery rewarded"
            );
        }
        ReviewOutcome::Ignored {
            action,
            review_state,
        } => {
            tracing::debug!(
                delivery_id = %delivery_id,
                action = action.as_deref().unwrap_or("<none>"),
                review_state = review_state.as_deref().unwrap_or("<none>"),
                "Webhook delivery ignored"
            );
        }
    }

    Ok("OK")
}

/// GET /health
///
/// Health check endpoint.
///
/// Returns service health status with version and timestamp.
pub async fn health_check() -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse {
        status: "healthy".to_string(),
        version: Some(env!("CARGO_PKG_VERSION").to_string()),
        timestamp: chrono::Utc::now().to_rfc3339(),
        error: None,
    })
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthCheckResponse {
    /// Service status: "healthy" or "unhealthy"
    pub status: String,

    /// Service version
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Current timestamp (ISO 8601)
    pub timestamp: String,

    /// Error message (if unhealthy)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[cfg(test)]
#[path = "handlers_tests.rs"]
mod tests;
