//! Review processing error types.
//!
//! One variant per pipeline stage that can fail. Deliveries that are merely
//! irrelevant are not errors; they surface as
//! [`crate::ReviewOutcome::Ignored`].

use thiserror::Error;

use crate::notifier::NotifyError;

/// Errors produced while processing a webhook delivery.
#[derive(Error, Debug)]
pub enum ProcessError {
    /// The signature header is missing or does not match the request body.
    #[error("Webhook signature verification failed")]
    SignatureInvalid,

    /// The body is not valid JSON, or an approved review is missing the
    /// pull request fields the notification needs.
    #[error("Malformed webhook payload: {reason}")]
    MalformedPayload { reason: String },

    /// The chat notification could not be delivered.
    #[error("Failed to dispatch reward notification: {0}")]
    Dispatch(#[from] NotifyError),
}

/// Result type alias for processing operations.
pub type ProcessResult<T> = Result<T, ProcessError>;
