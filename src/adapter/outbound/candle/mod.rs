//! Local inference with candle.
//!
//! - [`loader`] - Resolves model artifacts from the hub or a directory
//! - [`defaults`] - Generation defaults shipped with the checkpoint
//! - [`tokenizer`] - Encoding, decoding and stop-token lookup
//! - [`template`] - Chat prompt rendering
//! - [`generator`] - KV-cached decoding loop
//! - [`model`] - [`CandleChatModel`], the [`ChatModel`](crate::port::ChatModel) implementation

pub mod defaults;
pub mod generator;
pub mod loader;
pub mod model;
pub mod template;
pub mod tokenizer;

pub use defaults::GenerationDefaults;
pub use generator::{CausalLm, Generated, Generator};
pub use loader::ModelFiles;
pub use model::CandleChatModel;
pub use template::ChatTemplate;
