use thiserror::Error;

#[derive(Debug, Error)]
pub enum SummarizerError {
    /// Raised while running the model. Displayed verbatim so callers see the
    /// underlying failure text.
    #[error("{0}")]
    Inference(String),

    #[error("Failed to load summarization model: {0}")]
    ModelLoad(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Failed to send HTTP request: {0}")]
    Http(String),

    #[error("Summarization backend error: {0}")]
    Backend(String),
}

#[cfg(feature = "api")]
impl From<candle_core::Error> for SummarizerError {
    fn from(error: candle_core::Error) -> Self {
        SummarizerError::Inference(error.to_string())
    }
}

impl From<reqwest::Error> for SummarizerError {
    fn from(error: reqwest::Error) -> Self {
        SummarizerError::Http(error.to_string())
    }
}

impl From<anyhow::Error> for SummarizerError {
    fn from(error: anyhow::Error) -> Self {
        SummarizerError::Inference(error.to_string())
    }
}

impl From<tokio::task::JoinError> for SummarizerError {
    fn from(error: tokio::task::JoinError) -> Self {
        SummarizerError::Inference(format!("inference task failed: {error}"))
    }
}
