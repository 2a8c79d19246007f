use std::sync::Arc;

use async_trait::async_trait;
use teloxide::{
    Bot,
    prelude::Requester,
    types::{ChatId, Recipient},
};
use tracing::instrument;

use crate::base::{config::Config, types::Void};

use super::{ChatClient, GenericChatClient};

// Extra methods on `ChatClient` applied by the telegram implementation.

impl ChatClient {
    /// Creates a new Telegram chat client.
    pub fn telegram(config: &Config) -> Self {
        let client = TelegramChatClient::new(config);
        Self { inner: Arc::new(client) }
    }
}

impl From<TelegramChatClient> for ChatClient {
    fn from(client: TelegramChatClient) -> Self {
        Self { inner: Arc::new(client) }
    }
}

// Structs.

/// Telegram client implementation.
#[derive(Clone)]
pub struct TelegramChatClient {
    bot: Bot,
    recipient: Recipient,
}

impl TelegramChatClient {
    /// Create a new Telegram chat client.
    #[instrument(name = "TelegramChatClient::new", skip_all)]
    pub fn new(config: &Config) -> Self {
        Self {
            bot: Bot::new(&config.telegram_token),
            recipient: parse_recipient(&config.telegram_chat_id),
        }
    }
}

#[async_trait]
impl GenericChatClient for TelegramChatClient {
    #[instrument(skip_all)]
    async fn send_message(&self, text: &str) -> Void {
        self.bot
            .send_message(self.recipient.clone(), text)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to send message: {}", e))?;

        Ok(())
    }
}

/// Numeric ids address a chat directly; anything else is treated as a `@channel` name.
fn parse_recipient(chat_id: &str) -> Recipient {
    let chat_id = chat_id.trim();

    match chat_id.parse::<i64>() {
        Ok(id) => Recipient::Id(ChatId(id)),
        Err(_) if chat_id.starts_with('@') => Recipient::ChannelUsername(chat_id.to_string()),
        Err(_) => Recipient::ChannelUsername(format!("@{chat_id}")),
    }
}

// Tests.
