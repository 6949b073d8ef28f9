//! Backend-agnostic chat types.
//!
//! - [`chat`] - Roles, messages, validated user input, conversations
//! - [`generation`] - Decoding settings and completion results
//! - [`error`] - Domain validation errors

pub mod chat;
pub mod error;
pub mod generation;

pub use chat::{ChatMessage, Conversation, Role, UserMessage};
pub use error::DomainError;
pub use generation::{Completion, FinishReason, GenerationConfig, SamplingStrategy};
