//! Validation of status API answers and extraction of verdicts.

use serde_json::Value;
use tracing::error;

use crate::base::{
    types::{BotError, HomeworkStatus},
    verdicts,
};

/// Check that a status API answer has the documented shape.
///
/// Returns the most recent homework record, or `None` when nothing changed
/// in the polled window.
pub fn check_response(response: &Value) -> Result<Option<&Value>, BotError> {
    let Some(response) = response.as_object() else {
        return Err(BotError::UnexpectedType { what: "API", expected: "объект" });
    };

    let homeworks = response.get("homeworks").ok_or(BotError::MissingKey("homeworks"))?;

    let Some(homeworks) = homeworks.as_array() else {
        return Err(BotError::UnexpectedType { what: "homeworks", expected: "список" });
    };

    if !response.contains_key("current_date") {
        error!("Status API answer has no `current_date` key");
        return Err(BotError::MissingKey("current_date"));
    }

    Ok(homeworks.first())
}

/// Build the notification text for a single homework record.
pub fn parse_status(homework: &Value) -> Result<String, BotError> {
    let homework_name = homework.get("homework_name").ok_or(BotError::MissingKey("homework_name"))?;
    let status = homework.get("status").ok_or(BotError::MissingKey("status"))?;

    let homework_name = match homework_name {
        Value::String(name) => name.clone(),
        other => other.to_string(),
    };

    let status: HomeworkStatus = match status {
        Value::String(status) => status.parse()?,
        other => return Err(BotError::UnknownStatus(other.to_string())),
    };

    Ok(verdicts::status_changed(&homework_name, status.verdict()))
}

/// The server-side timestamp of an answer, when it carries a usable one.
pub fn current_date(response: &Value) -> Option<i64> {
    response.get("current_date").and_then(Value::as_i64)
}

// Tests.

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::base::types::ErrorKind;

    #[test]
    fn non_object_answers_are_type_errors() {
        for answer in [json!("homeworks"), json!([{"homeworks": []}]), json!(null), json!(42)] {
            let err = check_response(&answer).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Type, "answer: {answer}");
        }
    }

    #[test]
    fn missing_homeworks_is_a_key_error() {
        let err = check_response(&json!({"current_date": 100})).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Key);
        assert_eq!(err.to_string(), "Отсутствует ключ homeworks");
    }

    #[test]
    fn homeworks_must_be_a_list() {
        let err = check_response(&json!({"homeworks": {"homework_name": "hw1"}, "current_date": 100})).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Type);
    }

    #[test]
    fn missing_current_date_is_a_key_error() {
        let err = check_response(&json!({"homeworks": []})).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Key);
        assert_eq!(err.to_string(), "Отсутствует ключ current_date");
    }

    #[test]
    fn empty_homework_list_means_no_change() {
        let answer = json!({"homeworks": [], "current_date": 100});
        assert_eq!(check_response(&answer).unwrap(), None);
    }

    #[test]
    fn first_homework_is_returned() {
        let answer = json!({
            "homeworks": [
                {"homework_name": "hw2", "status": "reviewing"},
                {"homework_name": "hw1", "status": "approved"}
            ],
            "current_date": 100
        });

        let homework = check_response(&answer).unwrap().unwrap();
        assert_eq!(homework["homework_name"], "hw2");
    }

    #[test]
    fn approved_status_sentence() {
        let text = parse_status(&json!({"homework_name": "hw1", "status": "approved"})).unwrap();
        assert_eq!(text, "Изменился статус проверки работы \"hw1\": Работа проверена: ревьюеру всё понравилось. Ура!");
    }

    #[test]
    fn every_status_maps_to_its_verdict() {
        let expected = [
            ("approved", "Работа проверена: ревьюеру всё понравилось. Ура!"),
            ("reviewing", "Работа взята на проверку ревьюером."),
            ("rejected", "Работа проверена: у ревьюера есть замечания."),
        ];

        for (status, verdict) in expected {
            let text = parse_status(&json!({"homework_name": "project", "status": status})).unwrap();
            assert_eq!(text, format!("Изменился статус проверки работы \"project\": {verdict}"));
        }
    }

    #[test]
    fn unknown_status_is_a_key_error() {
        let err = parse_status(&json!({"homework_name": "hw1", "status": "lost"})).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Key);

        let err = parse_status(&json!({"homework_name": "hw1", "status": 3})).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Key);
    }

    #[test]
    fn missing_fields_are_key_errors() {
        let err = parse_status(&json!({"status": "approved"})).unwrap_err();
        assert_eq!(err.to_string(), "Отсутствует ключ homework_name");

        let err = parse_status(&json!({"homework_name": "hw1"})).unwrap_err();
        assert_eq!(err.to_string(), "Отсутствует ключ status");
    }

    #[test]
    fn current_date_requires_an_integer() {
        assert_eq!(current_date(&json!({"current_date": 1000})), Some(1000));
        assert_eq!(current_date(&json!({"current_date": "1000"})), None);
        assert_eq!(current_date(&json!({})), None);
    }
}
