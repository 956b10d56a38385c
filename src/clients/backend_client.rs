//! Summarization service client
//!
//! Used by the gateway to reach `POST /summarize` on the model service.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, info};

use crate::core::models::SummarizeRequest;
use crate::errors::SummarizerError;

/// Anything that can turn text into a summary on the gateway's behalf.
#[async_trait]
pub trait SummaryBackend: Send + Sync {
    /// Returns `Ok(None)` when the backend answered but produced no summary.
    ///
    /// # Errors
    ///
    /// Returns an error when the backend cannot be reached or its reply is
    /// not JSON.
    async fn summarize(&self, text: &str) -> Result<Option<String>, SummarizerError>;
}

/// [`SummaryBackend`] talking HTTP to the summarization service.
pub struct HttpSummaryBackend {
    client: Client,
    endpoint: String,
}

impl HttpSummaryBackend {
    /// `base_url` is the service root, e.g. `http://127.0.0.1:8000`.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    #[must_use]
    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            endpoint: format!("{}/summarize", base_url.trim_end_matches('/')),
        }
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SummaryBackend for HttpSummaryBackend {
    async fn summarize(&self, text: &str) -> Result<Option<String>, SummarizerError> {
        info!("Forwarding {} chars to {}", text.chars().count(), self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .json(&SummarizeRequest {
                text: text.to_string(),
            })
            .send()
            .await?;

        let status = response.status();
        let body: Value = response.json().await.map_err(|e| {
            SummarizerError::Backend(format!("Failed to parse backend response: {}", e))
        })?;
        debug!(status = %status, "Backend responded");

        Ok(body
            .get("summary")
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(ToString::to_string))
    }
}
