//! Generation defaults shipped with a model.
//!
//! Hub checkpoints carry a `generation_config.json` next to the weights.
//! Only the fields that still matter under greedy decoding are read: the
//! repetition penalty and the end-of-sequence ids. Sampling fields in the
//! file are ignored since sampling is controlled by the service config.

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::domain::GenerationConfig;
use crate::error::Result;

/// One id or a list of ids, as `eos_token_id` appears in the file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum EosTokens {
    Single(u32),
    Multiple(Vec<u32>),
}

impl EosTokens {
    fn ids(&self) -> &[u32] {
        match self {
            Self::Single(id) => std::slice::from_ref(id),
            Self::Multiple(ids) => ids,
        }
    }
}

/// Parsed `generation_config.json`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct GenerationDefaults {
    #[serde(default)]
    pub repetition_penalty: Option<f32>,
    #[serde(default)]
    pub eos_token_id: Option<EosTokens>,
}

impl GenerationDefaults {
    /// Read defaults from `path`, or use none when the model has no file.
    ///
    /// # Errors
    ///
    /// Returns an IO or JSON error if the file exists but cannot be parsed.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let defaults: Self = serde_json::from_slice(&std::fs::read(path)?)?;
        debug!(?defaults, "Model generation defaults loaded");
        Ok(defaults)
    }

    /// End-of-sequence ids declared by the model.
    #[must_use]
    pub fn eos_token_ids(&self) -> &[u32] {
        match &self.eos_token_id {
            Some(eos) => eos.ids(),
            None => &[],
        }
    }

    /// Fill settings the service config leaves unset.
    #[must_use]
    pub fn apply(&self, mut config: GenerationConfig) -> GenerationConfig {
        if config.repeat_penalty.is_none() {
            config.repeat_penalty = self.repetition_penalty;
        }
        config
    }
}
