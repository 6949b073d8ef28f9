//! Single-turn chat service.

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info};

use crate::domain::{Completion, Conversation, UserMessage};
use crate::error::Result;
use crate::port::ChatModel;

/// Validates user input and delegates generation to a [`ChatModel`].
#[derive(Clone)]
pub struct ChatService {
    model: Arc<dyn ChatModel>,
}

impl ChatService {
    pub fn new(model: Arc<dyn ChatModel>) -> Self {
        Self { model }
    }

    /// Name of the backing model.
    #[must_use]
    pub fn model_name(&self) -> &str {
        self.model.name()
    }

    /// Produce a reply to the raw `message` field of a request.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::EmptyMessage`](crate::domain::DomainError::EmptyMessage)
    /// when `raw` is absent or empty, or the model's error if generation fails.
    pub async fn reply(&self, raw: Option<&str>) -> Result<Completion> {
        let message = UserMessage::try_new(raw)?;
        let conversation = Conversation::single_turn(message);

        debug!(
            model = self.model.name(),
            messages = conversation.messages().len(),
            "Generating reply"
        );

        let started = Instant::now();
        let completion = self.model.complete(conversation.messages()).await?;

        info!(
            model = self.model.name(),
            prompt_tokens = completion.prompt_tokens,
            completion_tokens = completion.completion_tokens,
            finish = ?completion.finish,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Reply generated"
        );

        Ok(completion)
    }
}
