//! Environment-derived application configuration
//!
//! Configuration is read once at startup and validated before the server
//! binds. A missing secret or an unparseable URL stops the process
//! immediately instead of surfacing later as a per-request failure.

use std::env;
use std::path::PathBuf;

use secrecy::SecretString;
use thiserror::Error;
use url::Url;

use crate::DEFAULT_PORT;

/// Environment variable carrying the shared GitHub webhook secret.
pub const ENV_WEBHOOK_SECRET: &str = "GITHUB_WEBHOOK_SECRET";

/// Environment variable carrying the chat incoming-webhook URL.
pub const ENV_CHAT_WEBHOOK_URL: &str = "CHAT_WEBHOOK_URL";

/// Environment variable overriding the listen port.
pub const ENV_PORT: &str = "PORT";

/// Environment variable overriding the bind host.
pub const ENV_HOST: &str = "HOST";

/// Environment variable overriding the reward catalog location.
pub const ENV_CATALOG_PATH: &str = "REWARD_CATALOG_PATH";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_CATALOG_PATH: &str = "rewards.json";

/// Errors raised while reading configuration from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is absent or empty.
    #[error("Required environment variable {name} is not set or is empty")]
    MissingVariable {
        /// Name of the environment variable
        name: &'static str,
    },

    /// An environment variable is present but its value fails validation.
    #[error("Invalid value for environment variable {name}: {reason}")]
    InvalidVariable {
        /// Name of the environment variable
        name: &'static str,
        /// Description of what made the value invalid
        reason: String,
    },
}

/// Complete runtime configuration for the webhook service.
///
/// The webhook secret is held as a [`SecretString`] so it is redacted from
/// debug output and zeroized on drop. It is only ever exposed to the
/// signature verifier.
#[derive(Debug)]
pub struct AppConfig {
    /// Host to bind to
    pub host: String,

    /// Port to listen on
    pub port: u16,

    /// Shared secret GitHub signs deliveries with
    pub github_webhook_secret: SecretString,

    /// Chat service endpoint notifications are posted to
    pub chat_webhook_url: Url,

    /// Location of the reward catalog file
    pub reward_catalog_path: PathBuf,
}

impl AppConfig {
    /// Reads and validates configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingVariable` when `GITHUB_WEBHOOK_SECRET`
    /// or `CHAT_WEBHOOK_URL` is absent or empty, and
    /// `ConfigError::InvalidVariable` when `CHAT_WEBHOOK_URL` is not an
    /// http(s) URL or `PORT` is not a valid port number. Callers are
    /// expected to abort startup on any error.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret = lookup(ENV_WEBHOOK_SECRET)
            .filter(|value| !value.is_empty())
            .ok_or(ConfigError::MissingVariable {
                name: ENV_WEBHOOK_SECRET,
            })?;

        let chat_url = lookup(ENV_CHAT_WEBHOOK_URL)
            .filter(|value| !value.is_empty())
            .ok_or(ConfigError::MissingVariable {
                name: ENV_CHAT_WEBHOOK_URL,
            })?;
        let chat_webhook_url =
            Url::parse(&chat_url).map_err(|e| ConfigError::InvalidVariable {
                name: ENV_CHAT_WEBHOOK_URL,
                reason: e.to_string(),
            })?;
        if chat_webhook_url.scheme() != "http" && chat_webhook_url.scheme() != "https" {
            return Err(ConfigError::InvalidVariable {
                name: ENV_CHAT_WEBHOOK_URL,
                reason: format!("unsupported scheme '{}'", chat_webhook_url.scheme()),
            });
        }

        let port = match lookup(ENV_PORT) {
            Some(value) => value
                .parse::<u16>()
                .map_err(|e| ConfigError::InvalidVariable {
                    name: ENV_PORT,
                    reason: e.to_string(),
                })?,
            None => DEFAULT_PORT,
        };

        let host = lookup(ENV_HOST).unwrap_or_else(|| DEFAULT_HOST.to_string());

        let reward_catalog_path = lookup(ENV_CATALOG_PATH)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CATALOG_PATH));

        Ok(Self {
            host,
            port,
            github_webhook_secret: SecretString::from(secret),
            chat_webhook_url,
            reward_catalog_path,
        })
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
