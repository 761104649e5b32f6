//! Error handling and HTTP error conversion
//!
//! This module defines how domain errors are translated to HTTP error
//! responses. Domain errors from `review_roulette_core` are converted at the
//! HTTP boundary and never expose internal implementation details.
//!
//! Response bodies stay terse. The callers are GitHub's delivery system and
//! monitoring probes, not humans, and the bodies must never echo payload
//! contents or signature material.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use review_roulette_core::ProcessError;

/// Axum response wrapper for webhook processing errors.
///
/// This type wraps domain errors and converts them to appropriate
/// HTTP responses when returning from handlers.
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(state: AppState, body: Bytes) -> Result<&'static str, ApiError> {
///     state.processor.process(&body, None).await?; // Converts domain error to ApiError
///     Ok("OK")
/// }
/// ```
pub struct ApiError(ProcessError);

impl From<ProcessError> for ApiError {
    fn from(err: ProcessError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = convert_error(&self.0);

        // Log error server-side
        log_error(&self.0, status);

        (status, body).into_response()
    }
}

/// Convert domain error to HTTP status code and response body.
///
/// Signature failures map to 401 with the body `"Invalid signature"`; every
/// other processing failure maps to 500 with a bare `"Error"`.
fn convert_error(error: &ProcessError) -> (StatusCode, &'static str) {
    match error {
        ProcessError::SignatureInvalid => (StatusCode::UNAUTHORIZED, "Invalid signature"),
        ProcessError::MalformedPayload { .. } | ProcessError::Dispatch(_) => {
            (StatusCode::INTERNAL_SERVER_ERROR, "Error")
        }
    }
}

/// Log error with appropriate level based on HTTP status
fn log_error(error: &ProcessError, status: StatusCode) {
    match status {
        StatusCode::INTERNAL_SERVER_ERROR | StatusCode::BAD_GATEWAY => {
            tracing::error!("Webhook error: {} - {}", status, error);
        }
        StatusCode::UNAUTHORIZED | StatusCode::BAD_REQUEST => {
            tracing::warn!("Webhook error: {} - {}", status, error);
        }
        _ => {
            tracing::info!("Webhook error: {} - {}", status, error);
        }
    }
}

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;
