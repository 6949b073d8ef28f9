use thiserror::Error;

use crate::domain::error::DomainError;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Errors raised while resolving and loading model artifacts.
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("model file not found: {0}")]
    MissingFile(String),

    #[error("tokenizer has no stop token (tried {tried})")]
    NoStopToken { tried: String },

    #[error("prompt encoded to zero tokens")]
    EmptyPrompt,

    #[error("prompt of {prompt_tokens} tokens does not fit the context window of {context}")]
    PromptTooLong { prompt_tokens: usize, context: usize },

    #[error("tokenizer error: {0}")]
    Tokenizer(String),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error("tensor error: {0}")]
    Candle(#[from] candle::Error),

    #[error("model hub error: {0}")]
    Hub(#[from] hf_hub::api::sync::ApiError),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("generation task failed: {0}")]
    Task(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<tokio::task::JoinError> for Error {
    fn from(err: tokio::task::JoinError) -> Self {
        Error::Task(err.to_string())
    }
}
