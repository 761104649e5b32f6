//! GitHub webhook event types and signature verification for ReviewRoulette.
//!
//! This crate owns the inbound half of the GitHub integration: the payload
//! types for `pull_request_review` deliveries and the HMAC-SHA256 signature
//! check that authenticates them. It performs no I/O; callers hand it raw
//! body bytes and header values.

pub mod errors;
pub mod events;
pub mod signature;

// Re-export for convenient access
pub use errors::{EventError, EventResult};
pub use events::{
    parse_envelope, parse_review_event, Account, PullRequestReviewEvent, PullRequestSummary,
    ReviewEventEnvelope, ReviewSummary,
};
pub use signature::{sign_payload, verify_signature, SIGNATURE_HEADER};
