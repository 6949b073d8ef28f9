//! Autoregressive decoding loop.
//!
//! The loop is written against [`CausalLm`] rather than a concrete
//! architecture so it can run over any candle model exposing a KV-cached
//! forward pass.

use candle::{DType, Device, Tensor};
use candle_transformers::generation::{LogitsProcessor, Sampling};
use candle_transformers::models::qwen2;

use crate::domain::{FinishReason, GenerationConfig, SamplingStrategy};
use crate::error::{ModelError, Result};

/// Causal language model with an internal KV cache.
pub trait CausalLm {
    /// Logits for the last position of `input_ids` (shape `(1, seq_len)`),
    /// where `seqlen_offset` is the number of tokens already cached.
    fn forward(&mut self, input_ids: &Tensor, seqlen_offset: usize) -> candle::Result<Tensor>;

    /// Drop cached keys and values from a previous sequence.
    fn clear_kv_cache(&mut self);
}

impl CausalLm for qwen2::ModelForCausalLM {
    fn forward(&mut self, input_ids: &Tensor, seqlen_offset: usize) -> candle::Result<Tensor> {
        qwen2::ModelForCausalLM::forward(self, input_ids, seqlen_offset)
    }

    fn clear_kv_cache(&mut self) {
        qwen2::ModelForCausalLM::clear_kv_cache(self);
    }
}

/// Token ids produced for one prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    pub tokens: Vec<u32>,
    pub finish: FinishReason,
}

/// Decoding settings bound to a model's stop tokens and context window.
#[derive(Debug, Clone)]
pub struct Generator {
    config: GenerationConfig,
    stop_tokens: Vec<u32>,
    context_len: usize,
    device: Device,
}

impl Generator {
    pub fn new(
        config: GenerationConfig,
        stop_tokens: Vec<u32>,
        context_len: usize,
        device: Device,
    ) -> Self {
        Self {
            config,
            stop_tokens,
            context_len,
            device,
        }
    }

    fn logits_processor(&self) -> LogitsProcessor {
        let sampling = match self.config.sampling() {
            SamplingStrategy::Greedy => Sampling::ArgMax,
            SamplingStrategy::Temperature { temperature } => Sampling::All { temperature },
            SamplingStrategy::TopP { p, temperature } => Sampling::TopP { p, temperature },
        };
        let seed = self.config.seed.unwrap_or_else(rand::random::<u64>);
        LogitsProcessor::from_sampling(seed, sampling)
    }

    /// Continue `prompt` until a stop token, the token budget, or the end of
    /// the context window. Stop tokens are not included in the output.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::EmptyPrompt`] for an empty prompt,
    /// [`ModelError::PromptTooLong`] when the prompt leaves no room to
    /// generate, or a tensor error from the model.
    pub fn generate<M>(&self, model: &mut M, prompt: &[u32]) -> Result<Generated>
    where
        M: CausalLm + ?Sized,
    {
        if prompt.is_empty() {
            return Err(ModelError::EmptyPrompt.into());
        }
        if prompt.len() >= self.context_len {
            return Err(ModelError::PromptTooLong {
                prompt_tokens: prompt.len(),
                context: self.context_len,
            }
            .into());
        }

        model.clear_kv_cache();
        let mut processor = self.logits_processor();
        let budget = self
            .config
            .max_new_tokens
            .min(self.context_len - prompt.len());

        let mut tokens = prompt.to_vec();
        let mut generated = Vec::new();
        let mut finish = FinishReason::Length;

        for index in 0..budget {
            let context_size = if index > 0 { 1 } else { tokens.len() };
            let start_pos = tokens.len() - context_size;
            let input = Tensor::new(&tokens[start_pos..], &self.device)?.unsqueeze(0)?;

            let logits = model.forward(&input, start_pos)?;
            let logits = logits.squeeze(0)?.squeeze(0)?.to_dtype(DType::F32)?;
            let logits = if self.config.applies_repeat_penalty() {
                let start_at = self.config.repeat_window_start(tokens.len());
                candle_transformers::utils::apply_repeat_penalty(
                    &logits,
                    self.config.effective_repeat_penalty(),
                    &tokens[start_at..],
                )?
            } else {
                logits
            };

            let next = processor.sample(&logits)?;
            if self.stop_tokens.contains(&next) {
                finish = FinishReason::Stop;
                break;
            }
            tokens.push(next);
            generated.push(next);
        }

        Ok(Generated {
            tokens: generated,
            finish,
        })
    }
}
