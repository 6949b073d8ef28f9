//! Scripted chat model.

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::domain::{ChatMessage, Completion, FinishReason};
use crate::error::{Error, Result};
use crate::port::ChatModel;

enum Script {
    Reply(String),
    Fail(String),
}

/// [`ChatModel`] returning a fixed reply or a fixed failure.
pub struct ScriptedModel {
    script: Script,
    calls: Mutex<Vec<Vec<ChatMessage>>>,
}

impl ScriptedModel {
    /// Model that answers every request with `text`.
    pub fn replying(text: impl Into<String>) -> Self {
        Self {
            script: Script::Reply(text.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Model whose every request fails with [`Error::Task`].
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            script: Script::Fail(reason.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Message lists received so far, oldest first.
    pub fn calls(&self) -> Vec<Vec<ChatMessage>> {
        self.calls.lock().clone()
    }
}

#[async_trait]
impl ChatModel for ScriptedModel {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn complete(&self, messages: &[ChatMessage]) -> Result<Completion> {
        self.calls.lock().push(messages.to_vec());
        match &self.script {
            Script::Reply(text) => Ok(Completion {
                text: text.clone(),
                prompt_tokens: messages.iter().map(|m| m.content.len()).sum(),
                completion_tokens: text.split_whitespace().count(),
                finish: FinishReason::Stop,
            }),
            Script::Fail(reason) => Err(Error::Task(reason.clone())),
        }
    }
}
