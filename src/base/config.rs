//! Load configuration via `config` crate with env-override support.

use std::{ops::Deref, sync::Arc};

use serde::Deserialize;

use super::types::Res;

/// Default status endpoint of the Practicum API.
fn default_practicum_endpoint() -> String {
    "https://practicum.yandex.ru/api/user_api/homework_statuses/".to_string()
}

/// Default pause between two poll cycles, in seconds.
fn default_retry_period() -> u64 {
    600
}

/// Configuration for the homework-bot application.
#[derive(Debug, Clone)]
pub struct Config {
    pub inner: Arc<ConfigInner>,
}

impl Deref for Config {
    type Target = ConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ConfigInner {
    /// Practicum API token (`PRACTICUM_TOKEN`).
    #[serde(default)]
    pub practicum_token: String,
    /// Telegram bot token (`TELEGRAM_TOKEN`).
    #[serde(default)]
    pub telegram_token: String,
    /// Telegram chat that receives notifications (`TELEGRAM_CHAT_ID`).
    ///
    /// Either a numeric chat id or a `@channel` username.
    #[serde(default)]
    pub telegram_chat_id: String,
    /// Homework status endpoint (`PRACTICUM_ENDPOINT`).
    #[serde(default = "default_practicum_endpoint")]
    pub practicum_endpoint: String,
    /// Seconds to wait between poll cycles (`RETRY_PERIOD`).
    #[serde(default = "default_retry_period")]
    pub retry_period: u64,
    /// OTLP/HTTP collector endpoint for span export (`OTLP_ENDPOINT`).
    #[serde(default)]
    pub otlp_endpoint: Option<String>,
}

impl Config {
    pub fn load(explicit_path: Option<&std::path::Path>) -> Res<Self> {
        // A missing `.env` is fine; the real environment may carry everything.
        let _ = dotenvy::dotenv();

        let mut cfg = config::Config::builder().add_source(config::Environment::default());

        if let Some(p) = explicit_path {
            cfg = cfg.add_source(config::File::from(p.to_path_buf()));
        } else if std::path::Path::new(".hidden/config.toml").exists() {
            cfg = cfg.add_source(config::File::with_name(".hidden/config.toml"));
        }

        let result = Config {
            inner: Arc::new(cfg.build()?.try_deserialize()?),
        };

        if result.retry_period < 1 {
            return Err(anyhow::anyhow!("Retry period must be at least 1 second."));
        }

        if result.practicum_endpoint.trim().is_empty() {
            return Err(anyhow::anyhow!("Practicum endpoint must not be empty."));
        }

        Ok(result)
    }

    /// Returns `true` iff every required secret is present.
    pub fn check_tokens(&self) -> bool {
        self.missing_tokens().is_empty()
    }

    /// Names of the required environment variables that are empty or unset.
    pub fn missing_tokens(&self) -> Vec<&'static str> {
        [
            ("PRACTICUM_TOKEN", &self.practicum_token),
            ("TELEGRAM_TOKEN", &self.telegram_token),
            ("TELEGRAM_CHAT_ID", &self.telegram_chat_id),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    /// Retry period as a [`std::time::Duration`].
    pub fn retry_interval(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.retry_period)
    }
}

impl From<ConfigInner> for Config {
    fn from(inner: ConfigInner) -> Self {
        Self { inner: Arc::new(inner) }
    }
}
