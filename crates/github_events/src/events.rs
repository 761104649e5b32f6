//! Pull request review event payloads.
//!
//! Deliveries are decoded in two stages. [`ReviewEventEnvelope`] reads just
//! enough to decide whether the delivery is an approved review submission;
//! every field is optional so unrelated deliveries (pings, comment events,
//! payloads from other hook types) filter out as irrelevant instead of
//! failing. [`PullRequestReviewEvent`] is parsed only after the filter has
//! matched, and its fields are required: an approval without them cannot be
//! turned into a notification and counts as malformed.
//!
//! See [GitHub `pull_request_review` payload documentation](https://docs.github.com/en/webhooks/webhook-events-and-payloads#pull_request_review).

use serde::Deserialize;

use crate::errors::{EventError, EventResult};

#[cfg(test)]
#[path = "events_tests.rs"]
mod tests;

/// Review action value for a newly submitted review.
pub const ACTION_SUBMITTED: &str = "submitted";

/// Review state value for an approval.
pub const STATE_APPROVED: &str = "approved";

/// Minimal fields used to filter deliveries.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReviewEventEnvelope {
    /// Action performed on the review ("submitted", "edited", "dismissed")
    #[serde(default)]
    pub action: Option<String>,

    /// The review itself; absent on deliveries that are not review events
    #[serde(default)]
    pub review: Option<ReviewSummary>,
}

/// Review fields needed by the envelope filter.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReviewSummary {
    /// Review verdict ("approved", "changes_requested", "commented")
    #[serde(default)]
    pub state: Option<String>,
}

impl ReviewEventEnvelope {
    /// True when the delivery is a newly submitted review with an approved
    /// verdict. Everything else is irrelevant to this service.
    pub fn is_approved_submission(&self) -> bool {
        let approved = self
            .review
            .as_ref()
            .and_then(|review| review.state.as_deref())
            == Some(STATE_APPROVED);

        self.action.as_deref() == Some(ACTION_SUBMITTED) && approved
    }
}

/// Full payload of an approved review submission.
///
/// Parsed only after the envelope filter has matched.
#[derive(Debug, Clone, Deserialize)]
pub struct PullRequestReviewEvent {
    /// Pull request the review belongs to
    pub pull_request: PullRequestSummary,
}

/// Pull request fields used to build the reward notification.
#[derive(Debug, Clone, Deserialize)]
pub struct PullRequestSummary {
    /// Author of the pull request; the reward recipient
    pub user: Account,

    /// Pull request title
    pub title: String,

    /// Browser URL of the pull request
    pub html_url: String,
}

/// A GitHub account reference.
#[derive(Debug, Clone, Deserialize)]
pub struct Account {
    /// Login name of the account
    pub login: String,
}

/// Parses the minimal envelope used to filter deliveries.
///
/// # Errors
///
/// Returns `EventError::PayloadParse` when the body is not a JSON object.
pub fn parse_envelope(body: &[u8]) -> EventResult<ReviewEventEnvelope> {
    serde_json::from_slice(body).map_err(|e| EventError::PayloadParse {
        reason: e.to_string(),
    })
}

/// Parses the full payload of an approved review submission.
///
/// # Errors
///
/// Returns `EventError::PayloadParse` when the body is missing any of the
/// pull request fields the notification needs.
pub fn parse_review_event(body: &[u8]) -> EventResult<PullRequestReviewEvent> {
    serde_json::from_slice(body).map_err(|e| EventError::PayloadParse {
        reason: e.to_string(),
    })
}
