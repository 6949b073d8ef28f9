//! Chat templates.
//!
//! Renders a message list into the prompt string the model was fine-tuned on.

use crate::domain::{ChatMessage, Role};

/// Prompt formats understood by the backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ChatTemplate {
    /// `<|im_start|>role\ncontent<|im_end|>\n` turns, as used by Qwen2.
    #[default]
    ChatMl,
}

impl ChatTemplate {
    /// Tokens that end an assistant turn, most specific first.
    #[must_use]
    pub const fn stop_tokens(&self) -> &'static [&'static str] {
        match self {
            Self::ChatMl => &["<|im_end|>", "<|endoftext|>"],
        }
    }

    /// Render `messages` followed by the opening of an assistant turn.
    ///
    /// When the first message is not a system message, a system turn holding
    /// `default_system` is emitted first.
    #[must_use]
    pub fn render(&self, messages: &[ChatMessage], default_system: &str) -> String {
        match self {
            Self::ChatMl => render_chatml(messages, default_system),
        }
    }
}

fn render_chatml(messages: &[ChatMessage], default_system: &str) -> String {
    let mut prompt = String::new();
    if messages.first().map(|m| m.role) != Some(Role::System) {
        push_turn(&mut prompt, Role::System.as_str(), default_system);
    }
    for message in messages {
        push_turn(&mut prompt, message.role.as_str(), &message.content);
    }
    prompt.push_str("<|im_start|>assistant\n");
    prompt
}

fn push_turn(prompt: &mut String, role: &str, content: &str) {
    prompt.push_str("<|im_start|>");
    prompt.push_str(role);
    prompt.push('\n');
    prompt.push_str(content);
    prompt.push_str("<|im_end|>\n");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_user_turn_gets_default_system_prompt() {
        let prompt = ChatTemplate::ChatMl.render(
            &[ChatMessage::user("What is 2+2?")],
            "You are a helpful assistant.",
        );

        assert_eq!(
            prompt,
            "<|im_start|>system\nYou are a helpful assistant.<|im_end|>\n\
             <|im_start|>user\nWhat is 2+2?<|im_end|>\n\
             <|im_start|>assistant\n"
        );
    }

    #[test]
    fn explicit_system_message_replaces_default() {
        let prompt = ChatTemplate::ChatMl.render(
            &[ChatMessage::system("Answer in French."), ChatMessage::user("Hi")],
            "You are a helpful assistant.",
        );

        assert!(prompt.starts_with("<|im_start|>system\nAnswer in French.<|im_end|>\n"));
        assert!(!prompt.contains("helpful assistant"));
        assert_eq!(prompt.matches("<|im_start|>system").count(), 1);
    }

    #[test]
    fn content_is_inserted_verbatim() {
        let prompt = ChatTemplate::ChatMl.render(&[ChatMessage::user("  line1\nline2  ")], "sys");
        assert!(prompt.contains("<|im_start|>user\n  line1\nline2  <|im_end|>\n"));
    }
}
