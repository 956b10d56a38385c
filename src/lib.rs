/// Summarizer - an HTTP service that condenses text with a pretrained
/// sequence-to-sequence model.
///
/// The crate ships two binaries:
/// 1. `summarizer-api` loads the model once at startup and serves
///    `POST /summarize`
/// 2. `summarizer-gateway` serves `POST /api/summarize`, validates the input
///    and forwards it to the model service
///
/// # Architecture
///
/// The system uses:
/// - candle for local T5 inference, with weights from the Hugging Face Hub
/// - axum for the HTTP surface
/// - reqwest for the gateway-to-service hop
/// - Tokio for the async runtime
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use summarizer::ai::T5Summarizer;
/// use summarizer::api::{self, AppState};
/// use summarizer::core::config::AppConfig;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     summarizer::setup_logging();
///
///     let config = AppConfig::from_env()?;
///     let model = T5Summarizer::from_hub(&config.model_id, &config.model_revision)?;
///     let app = api::router(AppState::new(Arc::new(model)));
///
///     let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
///     api::serve(listener, app).await?;
///     Ok(())
/// }
/// ```
pub mod ai;
pub mod api;
pub mod clients;
pub mod core;
pub mod errors;

pub use ai::{GenerationParams, Summarizer};
pub use errors::SummarizerError;

/// Configure structured logging with JSON output.
///
/// The level comes from `RUST_LOG` and defaults to `info`. Call it once at
/// the start of each binary.
///
/// # Example
///
/// ```
/// summarizer::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
