//! # ReviewRoulette Core
//!
//! This crate provides the core orchestration logic for ReviewRoulette, a
//! service that hands out weighted-random rewards when GitHub pull request
//! reviews come back approved.
//!
//! ## Overview
//!
//! Every webhook delivery flows through the same pipeline:
//! 1. Signature verification over the raw body (`x-hub-signature-256`)
//! 2. Envelope parse and relevance filter (submitted + approved)
//! 3. Full payload parse for the pull request fields
//! 4. Weighted random reward selection from the catalog
//! 5. Notification formatting and dispatch to the chat webhook
//!
//! The pipeline keeps no state between deliveries. The catalog and the
//! webhook secret are read-only after startup, so one [`ReviewProcessor`]
//! serves all requests concurrently.
//!
//! ## Architecture
//!
//! The crate follows a dependency injection pattern for testability:
//! - [`ChatNotifier`] trait for outbound notification delivery
//! - [`reward_catalog::RewardCatalog`] loaded and validated by the binary
//!   before the processor is built
//!
//! ## Error Handling
//!
//! [`ReviewProcessor::process`] returns [`ProcessError`] with one variant per
//! pipeline stage that can fail. Deliveries that are authentic but simply not
//! approved review submissions are not errors; they come back as
//! [`ReviewOutcome::Ignored`].

use std::sync::Arc;

use rand::thread_rng;
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, info};

use github_events::{events, signature};
use reward_catalog::{selector, RewardCatalog};

pub mod errors;
pub mod message;
pub mod notifier;

// Re-export for convenient access
pub use errors::{ProcessError, ProcessResult};
pub use message::format_reward_message;
pub use notifier::{ChatNotifier, HttpChatNotifier, NotifyError};

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;

/// Outcome of a successfully handled webhook delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewOutcome {
    /// An approved review was rewarded and the notification dispatched.
    Rewarded {
        /// Login of the pull request author who received the reward
        recipient: String,
        /// Name of the reward that was drawn
        reward: String,
    },

    /// The delivery was authentic but not an approved review submission.
    Ignored {
        /// Action field of the delivery, when present
        action: Option<String>,
        /// Review state of the delivery, when present
        review_state: Option<String>,
    },
}

/// Processes webhook deliveries end to end.
///
/// Owns the reward catalog, the webhook secret, and the notifier used to
/// dispatch messages. One instance is shared across all requests.
pub struct ReviewProcessor {
    catalog: RewardCatalog,
    webhook_secret: SecretString,
    notifier: Arc<dyn ChatNotifier>,
}

impl ReviewProcessor {
    /// Creates a processor from its collaborators.
    pub fn new(
        catalog: RewardCatalog,
        webhook_secret: SecretString,
        notifier: Arc<dyn ChatNotifier>,
    ) -> Self {
        Self {
            catalog,
            webhook_secret,
            notifier,
        }
    }

    /// Runs one delivery through the pipeline.
    ///
    /// `body` must be the raw request bytes exactly as received from the
    /// wire; the signature covers them byte for byte.
    ///
    /// # Errors
    ///
    /// - `ProcessError::SignatureInvalid` when the signature header is
    ///   missing or does not match the body.
    /// - `ProcessError::MalformedPayload` when the body is not valid JSON,
    ///   or an approved review is missing the pull request fields the
    ///   notification needs.
    /// - `ProcessError::Dispatch` when the chat notification cannot be
    ///   delivered. The notification is attempted exactly once.
    pub async fn process(
        &self,
        body: &[u8],
        signature_header: Option<&str>,
    ) -> ProcessResult<ReviewOutcome> {
        if !signature::verify_signature(
            body,
            signature_header,
            self.webhook_secret.expose_secret().as_bytes(),
        ) {
            return Err(ProcessError::SignatureInvalid);
        }

        let envelope = events::parse_envelope(body).map_err(|e| ProcessError::MalformedPayload {
            reason: e.to_string(),
        })?;

        if !envelope.is_approved_submission() {
            debug!(
                action = envelope.action.as_deref().unwrap_or("<none>"),
                "Ignoring delivery that is not an approved review submission"
            );
            return Ok(ReviewOutcome::Ignored {
                action: envelope.action,
                review_state: envelope.review.and_then(|review| review.state),
            });
        }

        let event =
            events::parse_review_event(body).map_err(|e| ProcessError::MalformedPayload {
                reason: e.to_string(),
            })?;

        let reward = selector::select(&self.catalog, &mut thread_rng());
        let text = message::format_reward_message(&event.pull_request, reward);

        self.notifier.notify(&text).await?;

        info!(
            recipient = %event.pull_request.user.login,
            reward = %reward.name,
            rarity = reward.rarity.glyph(),
            pull_request = %event.pull_request.html_url,
            "Reward notification dispatched"
        );

        Ok(ReviewOutcome::Rewarded {
            recipient: event.pull_request.user.login,
            reward: reward.name.clone(),
        })
    }
}
