//! Cognita - a chat-completion HTTP service over a local language model.
//!
//! The process loads a pretrained causal language model and its tokenizer
//! once, then answers `POST /api/chat` requests by formatting the user
//! message with the model's chat template, decoding greedily, and returning
//! the generated text as JSON.
//!
//! # Architecture
//!
//! - **`domain`** - Messages, validated input, generation settings
//! - **`port`** - The [`ChatModel`](port::ChatModel) seam
//! - **`application`** - [`ChatService`](application::ChatService): validate, delegate, log
//! - **`adapter::outbound::candle`** - Qwen2 inference with candle
//! - **`adapter::inbound`** - axum HTTP API and clap CLI
//! - **`infrastructure`** - Configuration, logging, process wiring
//!
//! # Features
//!
//! - `testkit` - Expose [`testkit`] helpers to integration tests
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use cognita::adapter::outbound::candle::CandleChatModel;
//! use cognita::application::ChatService;
//! use cognita::infrastructure::config::settings::Config;
//!
//! # async fn run() -> cognita::error::Result<()> {
//! let config = Config::resolve(None)?;
//! let model = CandleChatModel::load(&config.model, config.generation.clone())?;
//! let chat = ChatService::new(Arc::new(model));
//! let completion = chat.reply(Some("What is Rust?")).await?;
//! println!("{}", completion.text);
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
