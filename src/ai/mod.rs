//! Summarization model abstraction

pub mod decoding;
#[cfg(feature = "api")]
pub mod t5;

use crate::errors::SummarizerError;

pub const MAX_SUMMARY_TOKENS: usize = 60;
pub const MIN_SUMMARY_TOKENS: usize = 10;

/// Generation settings applied to every summarization call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationParams {
    /// Upper bound on generated tokens.
    pub max_length: usize,
    /// End-of-sequence is suppressed until this many tokens exist.
    pub min_length: usize,
    /// Always false: decoding is greedy.
    pub do_sample: bool,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            max_length: MAX_SUMMARY_TOKENS,
            min_length: MIN_SUMMARY_TOKENS,
            do_sample: false,
        }
    }
}

/// A loaded model that turns text into a shorter text.
///
/// Calls are blocking; the HTTP layer runs them on the blocking pool.
pub trait Summarizer: Send + Sync {
    /// # Errors
    ///
    /// Returns [`SummarizerError::Inference`] when the model fails to
    /// tokenize, run, or decode.
    fn summarize(&self, text: &str, params: &GenerationParams) -> Result<String, SummarizerError>;
}

#[cfg(feature = "api")]
pub use t5::T5Summarizer;
