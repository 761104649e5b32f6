//! GitHub event error types.

use thiserror::Error;

/// Errors produced while decoding webhook deliveries.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EventError {
    #[error("Failed to parse pull request review payload: {reason}")]
    PayloadParse { reason: String },
}

/// Result type alias for event decoding operations.
pub type EventResult<T> = Result<T, EventError>;
