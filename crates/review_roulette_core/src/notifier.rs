//! Outbound chat notification dispatch.
//!
//! The [`ChatNotifier`] trait is the seam between the processing pipeline
//! and the chat service. Production uses [`HttpChatNotifier`], which POSTs
//! the message as `{"text": ...}` to a configured webhook URL; tests swap in
//! recording or failing implementations.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use thiserror::Error;
use tracing::{debug, error};
use url::Url;

#[cfg(test)]
#[path = "notifier_tests.rs"]
mod tests;

/// Timeout for a single notification request.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Errors produced while dispatching a notification.
#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("Failed to send notification request: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Notification endpoint returned status {status}")]
    UnexpectedStatus { status: u16 },
}

/// Delivers a formatted message to a chat service.
#[async_trait]
pub trait ChatNotifier: Send + Sync {
    /// Sends one message. A single attempt is made; the caller decides what
    /// a failure means.
    async fn notify(&self, text: &str) -> Result<(), NotifyError>;
}

/// [`ChatNotifier`] backed by an HTTP webhook.
///
/// Sends `{"text": message}` as JSON, the shape Teams-style incoming
/// webhooks accept.
pub struct HttpChatNotifier {
    client: Client,
    webhook_url: Url,
}

impl HttpChatNotifier {
    /// Creates a notifier that posts to the given webhook URL.
    pub fn new(webhook_url: Url) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            webhook_url,
        }
    }
}

#[async_trait]
impl ChatNotifier for HttpChatNotifier {
    async fn notify(&self, text: &str) -> Result<(), NotifyError> {
        let response = self
            .client
            .post(self.webhook_url.clone())
            .json(&json!({ "text": text }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            error!(
                status = status.as_u16(),
                "Notification endpoint rejected the message"
            );
            return Err(NotifyError::UnexpectedStatus {
                status: status.as_u16(),
            });
        }

        debug!("Posted notification to chat webhook");
        Ok(())
    }
}
