//! HTTP routers for the summarization service and its gateway

pub mod gateway;
pub mod handler;

use std::sync::Arc;

use axum::Router;
use axum::routing::post;
use tokio::net::TcpListener;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info, warn};

use crate::ai::{GenerationParams, Summarizer};
use crate::clients::SummaryBackend;

/// Shared state of the summarization service.
#[derive(Clone)]
pub struct AppState {
    pub summarizer: Arc<dyn Summarizer>,
    pub params: GenerationParams,
}

impl AppState {
    /// State with the fixed generation parameters.
    pub fn new(summarizer: Arc<dyn Summarizer>) -> Self {
        Self {
            summarizer,
            params: GenerationParams::default(),
        }
    }
}

/// Shared state of the gateway.
#[derive(Clone)]
pub struct GatewayState {
    pub backend: Arc<dyn SummaryBackend>,
}

/// `POST /summarize` backed by the loaded model.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/summarize", post(handler::summarize))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}

/// `POST /api/summarize` forwarding to the summarization service.
pub fn gateway_router(state: GatewayState) -> Router {
    Router::new()
        .route("/api/summarize", post(gateway::proxy_summarize))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}

/// Serves `app` until Ctrl-C or SIGTERM.
///
/// # Errors
///
/// Returns the underlying I/O error if the server stops abnormally.
pub async fn serve(listener: TcpListener, app: Router) -> std::io::Result<()> {
    if let Ok(addr) = listener.local_addr() {
        info!("Listening on {}", addr);
    }
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("Server stopped");
    Ok(())
}

/// Resolves when `signal` fires. A listener that failed to install never
/// resolves, so it cannot trigger a shutdown.
async fn wait_for<E: std::fmt::Display>(signal: impl Future<Output = Result<(), E>>) {
    if let Err(e) = signal.await {
        warn!("Failed to install signal handler: {}", e);
        std::future::pending::<()>().await;
    }
}

async fn shutdown_signal() {
    let ctrl_c = wait_for(tokio::signal::ctrl_c());

    #[cfg(unix)]
    let terminate = wait_for(async {
        let mut sig = tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())?;
        sig.recv().await;
        Ok::<(), std::io::Error>(())
    });

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received");
}
