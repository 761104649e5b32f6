//! Request tracing middleware
//!
//! Webhook deliveries authenticate through their HMAC signature, which is
//! checked inside the processing pipeline against the raw body. The
//! middleware stack therefore carries observability concerns only.

use axum::{extract::Request, middleware::Next, response::Response};

/// Request tracing middleware.
///
/// Adds request ID and logging context for observability.
pub async fn tracing_middleware(request: Request, next: Next) -> Response {
    // Generate request ID
    let request_id = uuid::Uuid::new_v4().to_string();

    tracing::info!(
        request_id = %request_id,
        method = %request.method(),
        uri = %request.uri(),
        "Request started"
    );

    let response = next.run(request).await;

    tracing::info!(
        request_id = %request_id,
        status = %response.status(),
        "Request completed"
    );

    response
}
