use tracing::{debug, error, instrument};

use crate::service::chat::ChatClient;

/// Deliver `text` to the configured chat.
///
/// Delivery problems are logged and reported as `false`; they never escape.
#[instrument(skip_all)]
pub async fn send_message(chat: &ChatClient, text: &str) -> bool {
    match chat.send_message(text).await {
        Ok(()) => {
            debug!("Bot sent message: {text}");
            true
        }
        Err(err) => {
            error!("Could not send message: {err}");
            false
        }
    }
}
