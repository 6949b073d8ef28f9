//! Generation settings and results.

use serde::{Deserialize, Serialize};

/// Decoding settings passed through to the model backend.
///
/// Defaults reproduce deterministic greedy decoding with a 512 token limit.
/// `temperature` and `top_p` only take effect when `do_sample` is true.
/// An unset `repeat_penalty` is filled from the model's own generation
/// defaults when it is loaded.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct GenerationConfig {
    /// Maximum number of tokens generated after the prompt.
    #[serde(default = "default_max_new_tokens")]
    pub max_new_tokens: usize,

    /// Sample from the distribution instead of taking the arg-max token.
    #[serde(default)]
    pub do_sample: bool,

    /// Softmax temperature when sampling.
    #[serde(default = "default_temperature")]
    pub temperature: f64,

    /// Nucleus sampling threshold when sampling.
    #[serde(default)]
    pub top_p: Option<f64>,

    /// Penalty applied to tokens already in the sequence. 1.0 disables it.
    #[serde(default)]
    pub repeat_penalty: Option<f32>,

    /// Window of recent tokens the repeat penalty looks at. Unset covers the
    /// whole sequence, prompt included.
    #[serde(default)]
    pub repeat_last_n: Option<usize>,

    /// Sampling seed. A random seed is drawn when absent.
    #[serde(default)]
    pub seed: Option<u64>,
}

const fn default_max_new_tokens() -> usize {
    512
}

fn default_temperature() -> f64 {
    0.7
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            max_new_tokens: default_max_new_tokens(),
            do_sample: false,
            temperature: default_temperature(),
            top_p: None,
            repeat_penalty: None,
            repeat_last_n: None,
            seed: None,
        }
    }
}

impl GenerationConfig {
    /// Token selection policy implied by these settings.
    #[must_use]
    pub fn sampling(&self) -> SamplingStrategy {
        if !self.do_sample {
            return SamplingStrategy::Greedy;
        }
        match self.top_p {
            Some(p) => SamplingStrategy::TopP {
                p,
                temperature: self.temperature,
            },
            None => SamplingStrategy::Temperature {
                temperature: self.temperature,
            },
        }
    }

    /// Repeat penalty in effect, 1.0 when unset.
    #[must_use]
    pub fn effective_repeat_penalty(&self) -> f32 {
        self.repeat_penalty.unwrap_or(1.0)
    }

    /// Whether the repeat penalty changes logits at all.
    #[must_use]
    pub fn applies_repeat_penalty(&self) -> bool {
        (self.effective_repeat_penalty() - 1.0).abs() > f32::EPSILON
    }

    /// Index of the first token the repeat penalty looks at in a sequence of
    /// `len` tokens.
    #[must_use]
    pub fn repeat_window_start(&self, len: usize) -> usize {
        self.repeat_last_n.map_or(0, |n| len.saturating_sub(n))
    }
}

/// How the next token is chosen from the logits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SamplingStrategy {
    /// Always take the highest-probability token.
    Greedy,
    /// Sample from the full distribution.
    Temperature { temperature: f64 },
    /// Sample from the smallest set whose mass exceeds `p`.
    TopP { p: f64, temperature: f64 },
}

/// Why generation stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FinishReason {
    /// The model emitted a stop token.
    Stop,
    /// The token budget or context window was exhausted.
    Length,
}

/// Decoded model output for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub text: String,
    pub prompt_tokens: usize,
    pub completion_tokens: usize,
    pub finish: FinishReason,
}
