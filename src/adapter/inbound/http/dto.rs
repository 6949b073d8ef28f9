//! Request and response bodies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /api/chat`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ChatRequest {
    /// User message. Any JSON value is accepted here and classified by
    /// [`message_field`](Self::message_field).
    #[serde(default)]
    pub message: Option<Value>,
}

/// How the `message` field of a request reads to validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageField<'a> {
    /// Absent or falsy: `null`, `false`, `0`, `[]`, `{}`.
    Missing,
    /// A string, possibly empty.
    Text(&'a str),
    /// A truthy value that is not a string.
    NotText,
}

impl ChatRequest {
    /// Classify `message` by JSON truthiness.
    #[must_use]
    pub fn message_field(&self) -> MessageField<'_> {
        match &self.message {
            None | Some(Value::Null) | Some(Value::Bool(false)) => MessageField::Missing,
            Some(Value::String(text)) => MessageField::Text(text),
            Some(Value::Number(n)) if n.as_f64().is_some_and(|v| v == 0.0) => {
                MessageField::Missing
            }
            Some(Value::Array(items)) if items.is_empty() => MessageField::Missing,
            Some(Value::Object(fields)) if fields.is_empty() => MessageField::Missing,
            Some(_) => MessageField::NotText,
        }
    }
}

/// Successful reply to `POST /api/chat`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChatResponse {
    pub response: String,
}

/// Body of every error response.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Body of `GET /health`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub model: String,
    pub started_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> ChatRequest {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn missing_and_null_message_are_missing() {
        assert_eq!(parse("{}").message_field(), MessageField::Missing);
        assert_eq!(
            parse(r#"{"message": null}"#).message_field(),
            MessageField::Missing
        );
    }

    #[test]
    fn falsy_values_are_missing() {
        for body in [
            r#"{"message": false}"#,
            r#"{"message": 0}"#,
            r#"{"message": 0.0}"#,
            r#"{"message": []}"#,
            r#"{"message": {}}"#,
        ] {
            assert_eq!(parse(body).message_field(), MessageField::Missing, "{body}");
        }
    }

    #[test]
    fn strings_are_text_even_when_empty() {
        assert_eq!(
            parse(r#"{"message": ""}"#).message_field(),
            MessageField::Text("")
        );
        assert_eq!(
            parse(r#"{"message": "hi", "history": []}"#).message_field(),
            MessageField::Text("hi")
        );
    }

    #[test]
    fn truthy_non_strings_are_not_text() {
        for body in [
            r#"{"message": true}"#,
            r#"{"message": 42}"#,
            r#"{"message": ["hi"]}"#,
            r#"{"message": {"text": "hi"}}"#,
        ] {
            assert_eq!(parse(body).message_field(), MessageField::NotText, "{body}");
        }
    }
}
