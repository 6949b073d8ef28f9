//! Chat completion port for model backends.

use async_trait::async_trait;

use crate::domain::{ChatMessage, Completion};
use crate::error::Result;

/// Backend that turns a conversation into a completion.
///
/// Implementations own their tokenizer, chat template and decoding settings.
/// Callers only hand over messages.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so a single instance can be shared
/// by every request handler. Whether requests run concurrently is up to the
/// implementation.
///
/// # Errors
///
/// [`complete`](Self::complete) returns an error for tokenization, tensor or
/// decoding failures.
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// Identifier of the loaded model, for logging and health reporting.
    fn name(&self) -> &str;

    /// Generate the assistant reply to `messages`.
    async fn complete(&self, messages: &[ChatMessage]) -> Result<Completion>;
}
