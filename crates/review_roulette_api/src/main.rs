//! ReviewRoulette webhook server
//!
//! Main binary for running the webhook receiver in production or development.
//!
//! # Environment Variables
//!
//! - `GITHUB_WEBHOOK_SECRET`: Shared secret GitHub signs deliveries with (required)
//! - `CHAT_WEBHOOK_URL`: Chat service incoming-webhook URL (required)
//! - `PORT`: Port to listen on (default: 8080)
//! - `HOST`: Host to bind to (default: 0.0.0.0)
//! - `REWARD_CATALOG_PATH`: Path to the reward catalog file (default: rewards.json)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::sync::Arc;

use anyhow::Context;

use review_roulette_api::{ApiConfig, ApiServer, AppConfig, AppState};
use review_roulette_core::{HttpChatNotifier, ReviewProcessor};
use reward_catalog::RewardCatalog;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()))
        .init();

    // Load configuration from environment
    let config = AppConfig::from_env().context("Failed to load configuration")?;

    // Load and validate the reward catalog before accepting traffic
    let catalog = RewardCatalog::load(&config.reward_catalog_path).with_context(|| {
        format!(
            "Failed to load reward catalog from {}",
            config.reward_catalog_path.display()
        )
    })?;

    tracing::info!(
        catalog = %config.reward_catalog_path.display(),
        rewards = catalog.items().len(),
        "Reward catalog loaded"
    );

    // Create app state and server
    let notifier = Arc::new(HttpChatNotifier::new(config.chat_webhook_url.clone()));
    let processor = ReviewProcessor::new(catalog, config.github_webhook_secret, notifier);
    let state = AppState::new(Arc::new(processor));

    let server = ApiServer::new(
        ApiConfig {
            port: config.port,
            host: config.host.clone(),
        },
        state,
    );

    tracing::info!("Starting ReviewRoulette webhook service");

    // Start server with graceful shutdown
    server.serve().await
}
