use std::sync::Arc;

use anyhow::Context;
use summarizer::api::{self, GatewayState};
use summarizer::clients::HttpSummaryBackend;
use summarizer::core::config::AppConfig;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    summarizer::setup_logging();

    let config = AppConfig::from_env()?;
    let backend = HttpSummaryBackend::new(&config.backend_url);
    info!(backend = %backend.endpoint(), "Gateway forwarding to summarization service");

    let app = api::gateway_router(GatewayState {
        backend: Arc::new(backend),
    });
    let listener = TcpListener::bind(config.gateway_bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.gateway_bind_addr))?;

    info!("Gateway ready: POST /api/summarize");
    api::serve(listener, app).await?;
    Ok(())
}
