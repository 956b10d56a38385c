use std::sync::Arc;

use anyhow::Context;
use summarizer::ai::T5Summarizer;
use summarizer::api::{self, AppState};
use summarizer::core::config::AppConfig;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    summarizer::setup_logging();

    let config = AppConfig::from_env()?;
    info!(model_id = %config.model_id, "Loading summarization model");

    let model_id = config.model_id.clone();
    let revision = config.model_revision.clone();
    let model = tokio::task::spawn_blocking(move || T5Summarizer::from_hub(&model_id, &revision))
        .await
        .context("model loading task panicked")??;

    let app = api::router(AppState::new(Arc::new(model)));
    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    info!("Summarizer ready: POST /summarize");
    api::serve(listener, app).await?;
    Ok(())
}
