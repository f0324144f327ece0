//! Summary struct and interpretation of the webhook response body.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Heading used when the webhook does not supply a title.
pub const DEFAULT_TITLE: &str = "Content Summary";

/// Body fields checked for summary text, in priority order.
const SUMMARY_FIELDS: [&str; 3] = ["summary", "text", "content"];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResponseError {
    /// The webhook reported a failure in its `error` field.
    #[error("{0}")]
    Application(String),
    #[error("could not obtain a summary of the content")]
    EmptyResult,
}

/// Summary shown to the user after a successful request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// Heading for the summarized content
    pub title: String,
    /// Summary body text
    pub summary: String,
}

impl Summary {
    /// Create a new summary
    pub fn new(title: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            summary: summary.into(),
        }
    }
}

/// Interpret a decoded webhook response.
///
/// An `error` field wins over any summary text. Otherwise the first present
/// of `summary`, `text` and `content` becomes the summary body. Null, `false`
/// and empty strings count as absent.
pub fn interpret(body: &Value) -> Result<Summary, ResponseError> {
    if let Some(message) = error_message(body.get("error")) {
        return Err(ResponseError::Application(message));
    }

    let text = SUMMARY_FIELDS
        .iter()
        .find_map(|field| non_empty_str(body.get(field)))
        .ok_or(ResponseError::EmptyResult)?;

    let title = non_empty_str(body.get("title")).unwrap_or(DEFAULT_TITLE);

    Ok(Summary::new(title, text))
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    match value {
        Some(Value::String(s)) if !s.is_empty() => Some(s),
        _ => None,
    }
}

fn error_message(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn summary_field_wins_over_text_and_content() {
        let body = json!({"summary": "S", "text": "T", "content": "C"});
        assert_eq!(interpret(&body).unwrap().summary, "S");
    }

    #[test]
    fn falls_back_to_text_then_content() {
        assert_eq!(
            interpret(&json!({"text": "T", "content": "C"})).unwrap().summary,
            "T"
        );
        assert_eq!(interpret(&json!({"content": "C"})).unwrap().summary, "C");
    }

    #[test]
    fn empty_strings_are_skipped() {
        let body = json!({"summary": "", "text": "T"});
        assert_eq!(interpret(&body).unwrap().summary, "T");
    }

    #[test]
    fn error_field_beats_summary() {
        let body = json!({"error": "quota exceeded", "summary": "S"});
        assert_eq!(
            interpret(&body),
            Err(ResponseError::Application("quota exceeded".to_string()))
        );
    }

    #[test]
    fn falsy_error_values_are_ignored() {
        for error in [json!(null), json!(false), json!("")] {
            let body = json!({"error": error, "summary": "S"});
            assert!(interpret(&body).is_ok());
        }
    }

    #[test]
    fn non_string_error_uses_json_text() {
        let body = json!({"error": {"code": 7}});
        assert_eq!(
            interpret(&body),
            Err(ResponseError::Application(r#"{"code":7}"#.to_string()))
        );
    }

    #[test]
    fn missing_fields_are_empty_result() {
        assert_eq!(interpret(&json!({})), Err(ResponseError::EmptyResult));
        assert_eq!(
            interpret(&json!([{"summary": "S"}])),
            Err(ResponseError::EmptyResult)
        );
        assert_eq!(
            interpret(&json!({"summary": 42})),
            Err(ResponseError::EmptyResult)
        );
    }

    #[test]
    fn title_defaults_when_absent_or_empty() {
        assert_eq!(interpret(&json!({"summary": "S"})).unwrap().title, DEFAULT_TITLE);
        assert_eq!(
            interpret(&json!({"summary": "S", "title": ""})).unwrap().title,
            DEFAULT_TITLE
        );
        assert_eq!(
            interpret(&json!({"summary": "S", "title": "Example"})).unwrap(),
            Summary::new("Example", "S")
        );
    }
}
