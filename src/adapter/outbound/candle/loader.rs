//! Model artifact resolution.
//!
//! Finds `config.json`, `tokenizer.json`, the safetensors weights and the
//! optional `generation_config.json` either in the Hugging Face hub cache
//! (downloading on first use) or in a local directory.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use hf_hub::api::sync::{ApiBuilder, ApiRepo};
use hf_hub::{Repo, RepoType};
use serde::Deserialize;
use tracing::{debug, info};

use crate::error::{ModelError, Result};
use crate::infrastructure::config::model::ModelConfig;

const CONFIG_FILE: &str = "config.json";
const TOKENIZER_FILE: &str = "tokenizer.json";
const GENERATION_CONFIG_FILE: &str = "generation_config.json";
const SINGLE_WEIGHTS_FILE: &str = "model.safetensors";
const WEIGHTS_INDEX_FILE: &str = "model.safetensors.index.json";

/// Local paths of everything needed to build a model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelFiles {
    pub config: PathBuf,
    pub tokenizer: PathBuf,
    pub weights: Vec<PathBuf>,
    /// Model-supplied generation defaults, when the checkpoint has them.
    pub generation_config: Option<PathBuf>,
}

#[derive(Deserialize)]
struct WeightIndex {
    weight_map: std::collections::HashMap<String, String>,
}

impl ModelFiles {
    /// Resolve files for `model`, preferring `local_dir` when set.
    ///
    /// # Errors
    ///
    /// Returns a hub error if a download fails, or
    /// [`ModelError::MissingFile`] if a local file is absent.
    pub fn resolve(model: &ModelConfig) -> Result<Self> {
        match &model.local_dir {
            Some(dir) => Self::from_dir(dir),
            None => Self::from_hub(model),
        }
    }

    /// Resolve files through the hub cache.
    ///
    /// # Errors
    ///
    /// Returns a hub error if the repository or a required file cannot be
    /// fetched.
    pub fn from_hub(model: &ModelConfig) -> Result<Self> {
        info!(model = %model.id, revision = %model.revision, "Resolving model from hub");
        let api = ApiBuilder::new()
            .with_token(model.hf_token.clone())
            .with_progress(false)
            .build()?;
        let repo = api.repo(Repo::with_revision(
            model.id.clone(),
            RepoType::Model,
            model.revision.clone(),
        ));

        let config = repo.get(CONFIG_FILE)?;
        let tokenizer = repo.get(TOKENIZER_FILE)?;
        let weights = hub_weights(&repo)?;
        debug!(shards = weights.len(), "Model weights resolved");
        let generation_config = match repo.get(GENERATION_CONFIG_FILE) {
            Ok(path) => Some(path),
            Err(e) => {
                debug!(error = %e, "No generation config on the hub");
                None
            }
        };

        Ok(Self {
            config,
            tokenizer,
            weights,
            generation_config,
        })
    }

    /// Resolve files in a local directory.
    ///
    /// Weights are taken from `model.safetensors`, else from the shards named
    /// in `model.safetensors.index.json`, else from every `*.safetensors`
    /// file in the directory.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::MissingFile`] if the config, tokenizer or any
    /// weights are absent.
    pub fn from_dir(dir: &Path) -> Result<Self> {
        info!(dir = %dir.display(), "Resolving model from local directory");
        let config = existing(dir.join(CONFIG_FILE))?;
        let tokenizer = existing(dir.join(TOKENIZER_FILE))?;

        let single = dir.join(SINGLE_WEIGHTS_FILE);
        let index = dir.join(WEIGHTS_INDEX_FILE);
        let weights = if single.is_file() {
            vec![single]
        } else if index.is_file() {
            shard_names(&index)?
                .into_iter()
                .map(|name| existing(dir.join(name)))
                .collect::<Result<Vec<_>>>()?
        } else {
            let mut found: Vec<PathBuf> = std::fs::read_dir(dir)?
                .filter_map(|entry| entry.ok().map(|e| e.path()))
                .filter(|path| path.extension().is_some_and(|ext| ext == "safetensors"))
                .collect();
            found.sort();
            found
        };

        if weights.is_empty() {
            let expected = dir.join(SINGLE_WEIGHTS_FILE);
            return Err(ModelError::MissingFile(expected.display().to_string()).into());
        }
        let generation_config = Some(dir.join(GENERATION_CONFIG_FILE)).filter(|p| p.is_file());

        Ok(Self {
            config,
            tokenizer,
            weights,
            generation_config,
        })
    }
}

fn hub_weights(repo: &ApiRepo) -> Result<Vec<PathBuf>> {
    match repo.get(SINGLE_WEIGHTS_FILE) {
        Ok(path) => Ok(vec![path]),
        Err(single_err) => {
            let Ok(index) = repo.get(WEIGHTS_INDEX_FILE) else {
                return Err(single_err.into());
            };
            shard_names(&index)?
                .iter()
                .map(|name| repo.get(name).map_err(Into::into))
                .collect()
        }
    }
}

/// Distinct shard file names listed in a safetensors index, sorted.
fn shard_names(index: &Path) -> Result<Vec<String>> {
    let index: WeightIndex = serde_json::from_slice(&std::fs::read(index)?)?;
    let names: BTreeSet<String> = index.weight_map.into_values().collect();
    Ok(names.into_iter().collect())
}

fn existing(path: PathBuf) -> Result<PathBuf> {
    if path.is_file() {
        Ok(path)
    } else {
        Err(ModelError::MissingFile(path.display().to_string()).into())
    }
}
