//! Tokenizer helpers.

use std::path::Path;

use tokenizers::Tokenizer;

use crate::error::{ModelError, Result};

/// Load a `tokenizer.json` file.
///
/// # Errors
///
/// Returns [`ModelError::Tokenizer`] if the file is missing or malformed.
pub fn load(path: &Path) -> Result<Tokenizer> {
    Tokenizer::from_file(path).map_err(|e| ModelError::Tokenizer(e.to_string()).into())
}

/// Stop ids: the model's `declared` end-of-sequence ids followed by the
/// `candidates` present in the tokenizer's vocabulary, without duplicates.
///
/// # Errors
///
/// Returns [`ModelError::NoStopToken`] when the result is empty.
pub fn stop_token_ids(
    tokenizer: &Tokenizer,
    candidates: &[&str],
    declared: &[u32],
) -> Result<Vec<u32>> {
    let mut ids = declared.to_vec();
    for id in candidates
        .iter()
        .filter_map(|token| tokenizer.token_to_id(token))
    {
        if !ids.contains(&id) {
            ids.push(id);
        }
    }
    if ids.is_empty() {
        return Err(ModelError::NoStopToken {
            tried: candidates.join(", "),
        }
        .into());
    }
    Ok(ids)
}

/// Token ids for a rendered prompt.
///
/// # Errors
///
/// Returns [`ModelError::Tokenizer`] if encoding fails.
pub fn encode(tokenizer: &Tokenizer, prompt: &str) -> Result<Vec<u32>> {
    let encoding = tokenizer
        .encode(prompt, true)
        .map_err(|e| ModelError::Tokenizer(e.to_string()))?;
    Ok(encoding.get_ids().to_vec())
}

/// Text for generated ids with special tokens removed.
///
/// # Errors
///
/// Returns [`ModelError::Tokenizer`] if decoding fails.
pub fn decode(tokenizer: &Tokenizer, ids: &[u32]) -> Result<String> {
    tokenizer
        .decode(ids, true)
        .map_err(|e| ModelError::Tokenizer(e.to_string()).into())
}
