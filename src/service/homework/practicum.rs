//! Practicum homework status API client.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, header::AUTHORIZATION};
use serde_json::Value;
use tracing::{debug, error, instrument};

use crate::base::{config::Config, types::BotError};

use super::{GenericHomeworkClient, HomeworkClient};

// Extra methods on `HomeworkClient` applied by the practicum implementation.

impl HomeworkClient {
    pub fn practicum(config: &Config) -> Self {
        let client = PracticumHomeworkClient::new(config);
        Self { inner: Arc::new(client) }
    }
}

// Specific implementations.

/// Practicum homework client implementation.
#[derive(Clone)]
pub struct PracticumHomeworkClient {
    client: Client,
    endpoint: String,
    auth_header: String,
}

impl PracticumHomeworkClient {
    /// Create a new Practicum client.
    #[instrument(name = "PracticumHomeworkClient::new", skip_all)]
    pub fn new(config: &Config) -> Self {
        Self::with_client(config, Client::new())
    }

    /// Create a new Practicum client on top of a preconfigured `reqwest` client.
    pub fn with_client(config: &Config, client: Client) -> Self {
        Self {
            client,
            endpoint: config.practicum_endpoint.clone(),
            auth_header: format!("OAuth {}", config.practicum_token),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl GenericHomeworkClient for PracticumHomeworkClient {
    #[instrument(name = "PracticumHomeworkClient::get_api_answer", skip(self))]
    async fn get_api_answer(&self, timestamp: i64) -> Result<Value, BotError> {
        let response = self
            .client
            .get(&self.endpoint)
            .header(AUTHORIZATION, &self.auth_header)
            .query(&[("from_date", timestamp)])
            .send()
            .await
            .map_err(BotError::Transport)?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(BotError::BadStatus(status));
        }

        let body = response.bytes().await.map_err(BotError::Transport)?;

        let value = serde_json::from_slice(&body).map_err(|e| {
            error!("Status API returned a body that is not JSON: {e}");
            BotError::Decode(e)
        })?;

        debug!("Received status API answer ({} bytes)", body.len());

        Ok(value)
    }
}

// Tests.

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::config::ConfigInner;

    #[test]
    fn builds_oauth_header_from_token() {
        let config = Config::from(ConfigInner {
            practicum_token: "y0_secret".to_string(),
            practicum_endpoint: "http://localhost:1/statuses/".to_string(),
            ..Default::default()
        });

        let client = PracticumHomeworkClient::new(&config);

        assert_eq!(client.auth_header, "OAuth y0_secret");
        assert_eq!(client.endpoint(), "http://localhost:1/statuses/");
    }

    #[tokio::test]
    async fn transport_failure_is_an_endpoint_error() {
        // Port 1 is reserved and refuses connections.
        let config = Config::from(ConfigInner {
            practicum_token: "token".to_string(),
            practicum_endpoint: "http://127.0.0.1:1/".to_string(),
            ..Default::default()
        });

        let err = HomeworkClient::practicum(&config).get_api_answer(0).await.unwrap_err();

        assert!(matches!(err, BotError::Transport(_)));
        assert_eq!(err.kind(), crate::base::types::ErrorKind::Endpoint);
    }
}
