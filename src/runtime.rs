//! Runtime services and the poll loop of the homework-bot.

use chrono::Utc;
use tracing::{debug, error, info, instrument};

use crate::{
    base::{
        config::Config,
        types::{BotError, Cycle, Res, Void},
        verdicts,
    },
    interaction::{
        notify::send_message,
        status::{check_response, current_date, parse_status},
    },
    service::{chat::ChatClient, homework::HomeworkClient},
};

/// Runtime service context that can be shared across the application.
///
/// This struct holds the homework client, chat client, and configuration.
/// It is designed to be trivially cloneable, allowing it to be passed around
/// without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct Runtime {
    /// The configuration for the application.
    pub config: Config,
    /// The homework status client instance.
    pub homework: HomeworkClient,
    /// The chat client instance.
    pub chat: ChatClient,
}

impl Runtime {
    /// Create a new runtime instance.
    #[instrument(skip_all)]
    pub fn new(config: Config) -> Res<Self> {
        let homework = HomeworkClient::practicum(&config);
        let chat = ChatClient::telegram(&config);

        Ok(Self { config, homework, chat })
    }

    /// Start a session at the current time.
    pub fn session(&self) -> Session {
        Session::new(self.homework.clone(), self.chat.clone(), Utc::now().timestamp())
    }

    /// Poll forever, sleeping for the retry period after every cycle.
    pub async fn start(&self) -> Void {
        let period = self.config.retry_interval();
        let mut session = self.session();

        info!("Polling homework statuses every {}s", period.as_secs());

        loop {
            session.run_cycle().await;
            tokio::time::sleep(period).await;
        }
    }
}

/// State carried from one poll cycle to the next.
pub struct Session {
    homework: HomeworkClient,
    chat: ChatClient,
    cursor: i64,
    last_error: Option<String>,
}

impl Session {
    pub fn new(homework: HomeworkClient, chat: ChatClient, cursor: i64) -> Self {
        Self {
            homework,
            chat,
            cursor,
            last_error: None,
        }
    }

    /// The `from_date` used by the next poll.
    pub fn cursor(&self) -> i64 {
        self.cursor
    }

    /// Text of the last failure that was delivered to the chat.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Fetch, validate, and extract; advances the cursor on every well-formed answer.
    #[instrument(skip(self), fields(cursor = self.cursor))]
    pub async fn poll_once(&mut self) -> Result<Cycle, BotError> {
        let response = self.homework.get_api_answer(self.cursor).await?;
        let homework = check_response(&response)?;

        self.cursor = current_date(&response).unwrap_or(self.cursor);

        match homework {
            Some(homework) => Ok(Cycle::Updated(parse_status(homework)?)),
            None => Ok(Cycle::NoChange),
        }
    }

    /// Run one poll cycle and report its outcome to the chat.
    ///
    /// Failures are reported once until a different failure occurs or a cycle succeeds.
    pub async fn run_cycle(&mut self) {
        match self.poll_once().await {
            Ok(Cycle::Updated(text)) => {
                send_message(&self.chat, &text).await;
                self.last_error = None;
            }
            Ok(Cycle::NoChange) => {
                debug!("Homework status has not changed");
                self.last_error = None;
            }
            Err(err) => {
                let message = verdicts::failure(&err);
                error!("{message}");

                if self.last_error.as_deref() != Some(message.as_str()) && send_message(&self.chat, &message).await {
                    self.last_error = Some(message);
                }
            }
        }
    }
}
