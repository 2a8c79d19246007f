use std::{fmt, str::FromStr};

use reqwest::StatusCode;
use thiserror::Error;

use super::verdicts;

pub type Err = anyhow::Error;
pub type Res<T> = Result<T, Err>;
pub type Void = Res<()>;

// Poll errors.

/// Broad classification of a [`BotError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The status endpoint could not be reached, answered with a non-200 code, or sent garbage.
    Endpoint,
    /// The response (or part of it) had the wrong JSON type.
    Type,
    /// A required key was missing, or a value had no known meaning.
    Key,
}

/// Everything that can go wrong during a single poll cycle.
///
/// The display strings end up in the chat, so they are written for the user.
#[derive(Debug, Error)]
pub enum BotError {
    #[error("Эндпоинт недоступен: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("Ошибка в коде ответа: {0}")]
    BadStatus(StatusCode),
    #[error("Сервер вернул невалидный ответ: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("Неверный тип данных {what}: ожидался {expected}")]
    UnexpectedType { what: &'static str, expected: &'static str },
    #[error("Отсутствует ключ {0}")]
    MissingKey(&'static str),
    #[error("Отсутствует вердикт для статуса {0}")]
    UnknownStatus(String),
}

impl BotError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BotError::Transport(_) | BotError::BadStatus(_) | BotError::Decode(_) => ErrorKind::Endpoint,
            BotError::UnexpectedType { .. } => ErrorKind::Type,
            BotError::MissingKey(_) | BotError::UnknownStatus(_) => ErrorKind::Key,
        }
    }
}

// Homework status.

/// Review status of a homework record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeworkStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl HomeworkStatus {
    pub const ALL: [HomeworkStatus; 3] = [HomeworkStatus::Approved, HomeworkStatus::Reviewing, HomeworkStatus::Rejected];

    /// The wire name used by the status API.
    pub fn as_str(&self) -> &'static str {
        match self {
            HomeworkStatus::Approved => "approved",
            HomeworkStatus::Reviewing => "reviewing",
            HomeworkStatus::Rejected => "rejected",
        }
    }

    /// The sentence shown to the user for this status.
    pub fn verdict(&self) -> &'static str {
        match self {
            HomeworkStatus::Approved => verdicts::APPROVED,
            HomeworkStatus::Reviewing => verdicts::REVIEWING,
            HomeworkStatus::Rejected => verdicts::REJECTED,
        }
    }
}

impl FromStr for HomeworkStatus {
    type Err = BotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HomeworkStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| BotError::UnknownStatus(s.to_string()))
    }
}

impl fmt::Display for HomeworkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Cycle outcome.

/// Result of one successful poll cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cycle {
    /// A homework changed status; the payload is the message to send.
    Updated(String),
    /// Nothing new in the polled window.
    NoChange,
}
