//! Model source configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Which pretrained model to load and where from.
///
/// Weights come from the Hugging Face hub unless `local_dir` is set. The hub
/// token is read from `HF_TOKEN` at runtime and never from the file.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ModelConfig {
    /// Hub repository id.
    ///
    /// Defaults to "Qwen/Qwen2-0.5B-Instruct".
    #[serde(default = "default_model_id")]
    pub id: String,

    /// Hub revision (branch, tag or commit).
    ///
    /// Defaults to "main".
    #[serde(default = "default_revision")]
    pub revision: String,

    /// Directory holding `config.json`, `tokenizer.json` and safetensors
    /// weights. Skips the hub entirely when set.
    #[serde(default)]
    pub local_dir: Option<PathBuf>,

    /// System turn inserted ahead of the user message.
    #[serde(default = "default_system_prompt")]
    pub system_prompt: String,

    /// Hub access token, from `HF_TOKEN`.
    #[serde(skip)]
    pub hf_token: Option<String>,
}

fn default_model_id() -> String {
    "Qwen/Qwen2-0.5B-Instruct".into()
}

fn default_revision() -> String {
    "main".into()
}

fn default_system_prompt() -> String {
    "You are a helpful assistant.".into()
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            id: default_model_id(),
            revision: default_revision(),
            local_dir: None,
            system_prompt: default_system_prompt(),
            hf_token: None,
        }
    }
}
