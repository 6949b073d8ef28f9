//! Chat messages and conversations.
//!
//! A [`Conversation`] is the ordered role/content list handed to a chat
//! template. The service only ever builds single-turn conversations; there
//! is no history between requests.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::DomainError;

/// Speaker of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

impl Role {
    /// Role name as written into chat templates.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::System => "system",
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One role/content pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }
}

/// A validated user message.
///
/// Only absent and empty input is rejected. Whitespace-only text is passed
/// through to the model unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserMessage(String);

impl UserMessage {
    /// Validate the raw `message` field of a request.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::EmptyMessage`] when `raw` is `None` or empty.
    pub fn try_new(raw: Option<&str>) -> Result<Self, DomainError> {
        match raw {
            Some(text) if !text.is_empty() => Ok(Self(text.to_owned())),
            _ => Err(DomainError::EmptyMessage),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Ordered message list passed to the model.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Conversation {
    messages: Vec<ChatMessage>,
}

impl Conversation {
    /// Conversation holding exactly one user turn.
    #[must_use]
    pub fn single_turn(message: UserMessage) -> Self {
        Self {
            messages: vec![ChatMessage::user(message.into_inner())],
        }
    }

    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_message_rejects_missing_field() {
        assert_eq!(UserMessage::try_new(None), Err(DomainError::EmptyMessage));
    }

    #[test]
    fn user_message_rejects_empty_string() {
        assert_eq!(
            UserMessage::try_new(Some("")),
            Err(DomainError::EmptyMessage)
        );
    }

    #[test]
    fn user_message_keeps_whitespace_only_input() {
        let message = UserMessage::try_new(Some("   ")).unwrap();
        assert_eq!(message.as_str(), "   ");
    }

    #[test]
    fn single_turn_conversation_has_one_user_message() {
        let message = UserMessage::try_new(Some("What is Rust?")).unwrap();
        let conversation = Conversation::single_turn(message);

        assert_eq!(conversation.messages().len(), 1);
        assert_eq!(conversation.messages()[0].role, Role::User);
        assert_eq!(conversation.messages()[0].content, "What is Rust?");
    }

    #[test]
    fn role_serializes_lowercase() {
        let json = serde_json::to_string(&ChatMessage::system("be brief")).unwrap();
        assert_eq!(json, r#"{"role":"system","content":"be brief"}"#);
    }
}
