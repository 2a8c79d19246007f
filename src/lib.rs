//! Library root for `homework-bot`.
//!
//! Homework-bot watches the Practicum homework review API and tells a
//! Telegram chat whenever a submission changes status:
//! - Polls the status API on a fixed interval
//! - Validates the answer and turns the newest status into a verdict sentence
//! - Reports failures to the same chat, without repeating the same failure
//!
//! The status API and the chat are both behind traits, so the poll loop can be
//! driven by other implementations (and by mocks in tests).

pub mod base;
pub mod interaction;
pub mod runtime;
pub mod service;

use base::{config::Config, types::Void};
use tracing::info;

/// Public async entry for the binary crate.
///
/// Builds the runtime context and polls until the process is interrupted.
pub async fn start(config: Config) -> Void {
    info!("Starting homework-bot ...");

    // Initialize the runtime.
    let runtime = runtime::Runtime::new(config)?;

    // Poll until Ctrl-C.
    tokio::select! {
        result = runtime.start() => result,
        _ = tokio::signal::ctrl_c() => {
            info!("Interrupted, shutting down.");
            Ok(())
        }
    }
}
