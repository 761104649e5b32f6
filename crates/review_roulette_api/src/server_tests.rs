//! Tests for server module

use super::*;
use std::sync::Arc;

use async_trait::async_trait;
use secrecy::SecretString;

use review_roulette_core::{ChatNotifier, NotifyError, ReviewProcessor};
use reward_catalog::{Rarity, RewardCatalog, RewardItem};

struct NoopNotifier;

#[async_trait]
impl ChatNotifier for NoopNotifier {
    async fn notify(&self, _text: &str) -> Result<(), NotifyError> {
        Ok(())
    }
}

fn test_state() -> AppState {
    let catalog = RewardCatalog::from_items(vec![RewardItem {
        name: "Pikachu".to_string(),
        weight: 1.0,
        rarity: Rarity::Rare,
    }])
    .unwrap();

    let processor = ReviewProcessor::new(
        catalog,
        SecretString::from("server-secret"),
        Arc::new(NoopNotifier),
    );
    AppState::new(Arc::new(processor))
}

#[test]
fn test_default_config() {
    let config = ApiConfig::default();
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.host, "0.0.0.0");
}

#[test]
fn test_server_creation() {
    let server = ApiServer::new(ApiConfig::default(), test_state());
    let _router = server.router();
    // Server and router creation should succeed
}
