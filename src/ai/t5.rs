//! T5 summarization backed by candle
//!
//! Weights, tokenizer and model config are fetched from the Hugging Face Hub
//! (or read from disk) once, then every request reuses the same instance.

use std::path::Path;
use std::sync::Mutex;

use candle_core::{DType, Device, Tensor};
use candle_nn::VarBuilder;
use candle_transformers::models::t5;
use hf_hub::api::sync::Api;
use hf_hub::{Repo, RepoType};
use tokenizers::Tokenizer;
use tracing::{debug, info};

use super::decoding::{Step, next_step};
use super::{GenerationParams, Summarizer};
use crate::errors::SummarizerError;

const TASK_PREFIX: &str = "summarize: ";
const CONFIG_FILE: &str = "config.json";
const TOKENIZER_FILE: &str = "tokenizer.json";
const WEIGHTS_FILE: &str = "model.safetensors";

pub struct T5Summarizer {
    model: Mutex<t5::T5ForConditionalGeneration>,
    tokenizer: Tokenizer,
    config: t5::Config,
    device: Device,
}

impl T5Summarizer {
    /// Downloads (or reuses the local hub cache for) `model_id` at `revision`
    /// and loads it on the CPU.
    ///
    /// # Errors
    ///
    /// Returns [`SummarizerError::ModelLoad`] if any file cannot be fetched or
    /// the checkpoint is not a T5 model.
    pub fn from_hub(model_id: &str, revision: &str) -> Result<Self, SummarizerError> {
        info!(model_id = %model_id, revision = %revision, "Fetching model files");

        let api =
            Api::new().map_err(|e| SummarizerError::ModelLoad(format!("hub client: {}", e)))?;
        let repo = api.repo(Repo::with_revision(
            model_id.to_string(),
            RepoType::Model,
            revision.to_string(),
        ));

        let fetch = |name: &str| {
            repo.get(name)
                .map_err(|e| SummarizerError::ModelLoad(format!("{}: {}", name, e)))
        };

        let config_path = fetch(CONFIG_FILE)?;
        let tokenizer_path = fetch(TOKENIZER_FILE)?;
        let weights_path = fetch(WEIGHTS_FILE)?;

        Self::from_files(&config_path, &tokenizer_path, &weights_path)
    }

    /// # Errors
    ///
    /// Returns [`SummarizerError::ModelLoad`] if a file is unreadable or
    /// malformed.
    pub fn from_files(
        config_path: &Path,
        tokenizer_path: &Path,
        weights_path: &Path,
    ) -> Result<Self, SummarizerError> {
        let device = Device::Cpu;

        let load_err = |path: &Path, e: &dyn std::fmt::Display| {
            SummarizerError::ModelLoad(format!("{}: {}", path.display(), e))
        };

        let raw_config =
            std::fs::read_to_string(config_path).map_err(|e| load_err(config_path, &e))?;
        let config: t5::Config =
            serde_json::from_str(&raw_config).map_err(|e| load_err(config_path, &e))?;

        let tokenizer =
            Tokenizer::from_file(tokenizer_path).map_err(|e| load_err(tokenizer_path, &e))?;

        let weights = std::fs::read(weights_path).map_err(|e| load_err(weights_path, &e))?;
        let vb = VarBuilder::from_buffered_safetensors(weights, DType::F32, &device)
            .map_err(|e| SummarizerError::ModelLoad(e.to_string()))?;
        let model = t5::T5ForConditionalGeneration::load(vb, &config)
            .map_err(|e| SummarizerError::ModelLoad(e.to_string()))?;

        info!(
            vocab_size = config.vocab_size,
            layers = config.num_layers,
            "Summarization model loaded"
        );

        Ok(Self::from_parts(model, tokenizer, config, device))
    }

    fn from_parts(
        model: t5::T5ForConditionalGeneration,
        tokenizer: Tokenizer,
        config: t5::Config,
        device: Device,
    ) -> Self {
        Self {
            model: Mutex::new(model),
            tokenizer,
            config,
            device,
        }
    }

    /// Runs the full encode/decode cycle and returns the generated token ids,
    /// without the decoder start token.
    fn summary_ids(
        &self,
        text: &str,
        params: &GenerationParams,
    ) -> Result<Vec<u32>, SummarizerError> {
        if params.do_sample {
            return Err(SummarizerError::Inference(
                "sampling is not supported; decoding is greedy".to_string(),
            ));
        }

        let prompt = format!("{}{}", TASK_PREFIX, text);
        let encoding = self
            .tokenizer
            .encode(prompt, true)
            .map_err(|e| SummarizerError::Inference(e.to_string()))?;
        let input_ids = encoding.get_ids();
        debug!(input_tokens = input_ids.len(), "Encoded summarization input");

        // A poisoned lock is still usable: the cache is cleared before every run.
        let mut model = self
            .model
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);

        model.clear_kv_cache();
        let output = self.generate(&mut model, input_ids, params);
        model.clear_kv_cache();
        output
    }

    fn generate(
        &self,
        model: &mut t5::T5ForConditionalGeneration,
        input_ids: &[u32],
        params: &GenerationParams,
    ) -> Result<Vec<u32>, SummarizerError> {
        let eos_token_id = u32::try_from(self.config.eos_token_id)
            .map_err(|e| SummarizerError::Inference(e.to_string()))?;
        let start_token_id = self
            .config
            .decoder_start_token_id
            .unwrap_or(self.config.pad_token_id);
        let start_token_id = u32::try_from(start_token_id)
            .map_err(|e| SummarizerError::Inference(e.to_string()))?;

        let input = Tensor::new(input_ids, &self.device)?.unsqueeze(0)?;
        let encoder_output = model.encode(&input)?;

        let mut decoded = vec![start_token_id];
        loop {
            let decoder_input = if decoded.len() == 1 || !self.config.use_cache {
                Tensor::new(decoded.as_slice(), &self.device)?.unsqueeze(0)?
            } else {
                let last = decoded[decoded.len() - 1];
                Tensor::new(&[last], &self.device)?.unsqueeze(0)?
            };

            let logits = model
                .decode(&decoder_input, &encoder_output)?
                .squeeze(0)?
                .to_dtype(DType::F32)?
                .to_vec1::<f32>()?;

            match next_step(&logits, decoded.len() - 1, eos_token_id, params) {
                Step::Emit(token) => decoded.push(token),
                Step::Stop => break,
            }
        }

        Ok(decoded.split_off(1))
    }
}

impl Summarizer for T5Summarizer {
    fn summarize(&self, text: &str, params: &GenerationParams) -> Result<String, SummarizerError> {
        let output_ids = self.summary_ids(text, params)?;
        debug!(output_tokens = output_ids.len(), "Generated summary tokens");

        self.tokenizer
            .decode(&output_ids, true)
            .map(|s| s.trim().to_string())
            .map_err(|e| SummarizerError::Inference(e.to_string()))
    }
}
