//! HTTP routing configuration
//!
//! This module defines all HTTP routes and their corresponding handlers.
//!
//! # Route Structure
//!
//! - POST /github-webhook - Receive GitHub webhook deliveries
//! - GET  /health         - Health check

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::time::Duration;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::{handlers, middleware as api_middleware, AppState};

/// Create the complete router with all routes configured.
///
/// This function sets up:
/// - All endpoint routes
/// - Request tracing
/// - Timeout handling
pub fn create_router(state: AppState) -> Router {
    // Configure request tracing. Header capture stays off so signature
    // values never reach the logs.
    let trace_layer = TraceLayer::new_for_http();

    // Configure request timeout (30 seconds)
    let timeout_layer = TimeoutLayer::new(Duration::from_secs(30));

    Router::new()
        .route("/github-webhook", post(handlers::handle_github_webhook))
        .route("/health", get(handlers::health_check))
        .layer(middleware::from_fn(api_middleware::tracing_middleware))
        .layer(timeout_layer)
        .layer(trace_layer)
        .with_state(state)
}

#[cfg(test)]
#[path = "routes_tests.rs"]
mod tests;
