//! [`ChatModel`] backed by a candle causal language model.

use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use candle::{DType, Device};
use candle_nn::VarBuilder;
use candle_transformers::models::qwen2;
use parking_lot::Mutex;
use tokenizers::Tokenizer;
use tracing::{debug, info};

use super::defaults::GenerationDefaults;
use super::generator::{CausalLm, Generator};
use super::loader::ModelFiles;
use super::template::ChatTemplate;
use super::tokenizer;
use crate::domain::{ChatMessage, Completion, GenerationConfig};
use crate::error::Result;
use crate::infrastructure::config::model::ModelConfig;
use crate::port::ChatModel;

type SharedLm = Mutex<Box<dyn CausalLm + Send>>;

/// Chat model loaded once and shared by all requests.
///
/// Requests are serialized on the model lock; the KV cache is reset at the
/// start of each one. Generation runs on the blocking thread pool.
#[derive(Clone)]
pub struct CandleChatModel {
    inner: Arc<Inner>,
}

struct Inner {
    name: String,
    model: SharedLm,
    tokenizer: Tokenizer,
    template: ChatTemplate,
    system_prompt: String,
    generator: Generator,
}

impl CandleChatModel {
    /// Download (if needed) and load a Qwen2 model on the CPU in `f32`.
    ///
    /// The checkpoint's `generation_config.json`, when present, fills an
    /// unset repeat penalty and adds its end-of-sequence ids to the stop
    /// tokens. This blocks for the duration of the download and weight
    /// mapping.
    ///
    /// # Errors
    ///
    /// Returns an error if any artifact cannot be resolved or parsed, or if
    /// the tokenizer has no ChatML stop token.
    pub fn load(config: &ModelConfig, generation: GenerationConfig) -> Result<Self> {
        let started = Instant::now();
        let files = ModelFiles::resolve(config)?;
        let device = Device::Cpu;

        let lm_config: qwen2::Config = serde_json::from_slice(&std::fs::read(&files.config)?)?;
        let context_len = lm_config.max_position_embeddings;
        // SAFETY: the weight files are not modified while mapped.
        let vb =
            unsafe { VarBuilder::from_mmaped_safetensors(&files.weights, DType::F32, &device)? };
        let model = qwen2::ModelForCausalLM::new(&lm_config, vb)?;
        let tokenizer = tokenizer::load(&files.tokenizer)?;
        let defaults = GenerationDefaults::load(files.generation_config.as_deref())?;

        let name = match &config.local_dir {
            Some(dir) => dir.display().to_string(),
            None => config.id.clone(),
        };
        info!(
            model = %name,
            context_len,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Model loaded"
        );

        Self::from_parts(
            name,
            Box::new(model),
            tokenizer,
            ChatTemplate::ChatMl,
            config.system_prompt.clone(),
            generation,
            &defaults,
            context_len,
            device,
        )
    }

    /// Assemble a chat model from an already-built network and tokenizer.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::NoStopToken`](crate::error::ModelError::NoStopToken)
    /// if `defaults` declares no end-of-sequence id and the tokenizer lacks
    /// every stop token of `template`.
    #[allow(clippy::too_many_arguments)]
    pub fn from_parts(
        name: impl Into<String>,
        model: Box<dyn CausalLm + Send>,
        tokenizer: Tokenizer,
        template: ChatTemplate,
        system_prompt: impl Into<String>,
        generation: GenerationConfig,
        defaults: &GenerationDefaults,
        context_len: usize,
        device: Device,
    ) -> Result<Self> {
        let stop_tokens = tokenizer::stop_token_ids(
            &tokenizer,
            template.stop_tokens(),
            defaults.eos_token_ids(),
        )?;
        let generation = defaults.apply(generation);
        debug!(
            ?stop_tokens,
            repeat_penalty = generation.effective_repeat_penalty(),
            "Decoding settings resolved"
        );
        let generator = Generator::new(generation, stop_tokens, context_len, device);

        Ok(Self {
            inner: Arc::new(Inner {
                name: name.into(),
                model: Mutex::new(model),
                tokenizer,
                template,
                system_prompt: system_prompt.into(),
                generator,
            }),
        })
    }
}

impl Inner {
    fn complete(&self, messages: &[ChatMessage]) -> Result<Completion> {
        let prompt = self.template.render(messages, &self.system_prompt);
        let prompt_ids = tokenizer::encode(&self.tokenizer, &prompt)?;

        let generated = {
            let mut model = self.model.lock();
            self.generator.generate(model.as_mut(), &prompt_ids)?
        };

        let text = tokenizer::decode(&self.tokenizer, &generated.tokens)?;
        Ok(Completion {
            text,
            prompt_tokens: prompt_ids.len(),
            completion_tokens: generated.tokens.len(),
            finish: generated.finish,
        })
    }
}

#[async_trait]
impl ChatModel for CandleChatModel {
    fn name(&self) -> &str {
        &self.inner.name
    }

    async fn complete(&self, messages: &[ChatMessage]) -> Result<Completion> {
        let inner = Arc::clone(&self.inner);
        let messages = messages.to_vec();
        tokio::task::spawn_blocking(move || inner.complete(&messages)).await?
    }
}
