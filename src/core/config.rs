use std::env;
use std::net::SocketAddr;

use crate::errors::SummarizerError;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
pub const DEFAULT_GATEWAY_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_MODEL_ID: &str = "google-t5/t5-small";
pub const DEFAULT_MODEL_REVISION: &str = "main";
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8000";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub model_id: String,
    pub model_revision: String,
    pub gateway_bind_addr: SocketAddr,
    pub backend_url: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, SummarizerError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup; unset keys fall back
    /// to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SummarizerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        Ok(Self {
            bind_addr: parse_addr(
                "SUMMARIZER_BIND_ADDR",
                &var("SUMMARIZER_BIND_ADDR", DEFAULT_BIND_ADDR),
            )?,
            model_id: var("SUMMARIZER_MODEL_ID", DEFAULT_MODEL_ID),
            model_revision: var("SUMMARIZER_MODEL_REVISION", DEFAULT_MODEL_REVISION),
            gateway_bind_addr: parse_addr(
                "GATEWAY_BIND_ADDR",
                &var("GATEWAY_BIND_ADDR", DEFAULT_GATEWAY_BIND_ADDR),
            )?,
            backend_url: var("SUMMARIZER_BACKEND_URL", DEFAULT_BACKEND_URL)
                .trim_end_matches('/')
                .to_string(),
        })
    }
}

fn parse_addr(key: &str, value: &str) -> Result<SocketAddr, SummarizerError> {
    value
        .parse()
        .map_err(|e| SummarizerError::Config(format!("{}: {}", key, e)))
}
