//! User-facing message texts.

/// Verdict for an accepted homework.
pub const APPROVED: &str = "Работа проверена: ревьюеру всё понравилось. Ура!";

/// Verdict for a homework picked up by a reviewer.
pub const REVIEWING: &str = "Работа взята на проверку ревьюером.";

/// Verdict for a homework sent back with remarks.
pub const REJECTED: &str = "Работа проверена: у ревьюера есть замечания.";

/// Builds the status-change notification.
pub fn status_changed(homework_name: &str, verdict: &str) -> String {
    format!("Изменился статус проверки работы \"{homework_name}\": {verdict}")
}

/// Builds the notification sent when a poll cycle fails.
pub fn failure(error: &impl std::fmt::Display) -> String {
    format!("Сбой в работе программы: {error}")
}
