//! ReviewRoulette webhook API
//!
//! This crate provides the HTTP surface for ReviewRoulette. It exposes the
//! GitHub webhook endpoint that receives pull request review deliveries and
//! a health check endpoint for liveness probes.
//!
//! # Architecture
//!
//! This crate exists in the HTTP layer and handles:
//! - HTTP request/response translation
//! - Error mapping from domain to HTTP
//! - Routing and server configuration
//! - Environment-derived configuration
//!
//! **CRITICAL**: This crate must never be imported by business logic.
//! The dependency flows: HTTP API → Business Logic, never the reverse.
//! Signature verification lives in the processing pipeline, not here; the
//! webhook handler only carries the raw bytes and headers across.

use std::sync::Arc;

use review_roulette_core::ReviewProcessor;

pub mod config;
pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;

// Re-export key types for convenience
pub use config::{AppConfig, ConfigError};
pub use errors::ApiError;
pub use server::{ApiConfig, ApiServer};

/// Default API port
pub const DEFAULT_PORT: u16 = 8080;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Webhook processing pipeline, shared by all in-flight requests
    pub processor: Arc<ReviewProcessor>,
}

impl AppState {
    /// Create new application state around the processing pipeline
    pub fn new(processor: Arc<ReviewProcessor>) -> Self {
        Self { processor }
    }
}
