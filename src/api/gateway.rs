//! `POST /api/summarize`: public entry point in front of the model service.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::Value;
use tracing::{error, info, warn};
use uuid::Uuid;

use super::GatewayState;
use crate::core::models::{GatewayError, SummarizeResponse};

pub const NO_TEXT: &str = "No text provided";
pub const SUMMARIZE_FAILED: &str = "Failed to summarize";
pub const BACKEND_UNREACHABLE: &str = "Backend connection failed";

fn err_response(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(GatewayError {
            error: message.to_string(),
        }),
    )
        .into_response()
}

/// Pulls a non-blank `text` string out of a raw JSON body.
#[must_use]
pub fn extract_text(body: &[u8]) -> Option<String> {
    let value: Value = serde_json::from_slice(body).ok()?;
    value
        .get("text")
        .and_then(Value::as_str)
        .filter(|t| !t.trim().is_empty())
        .map(ToString::to_string)
}

#[tracing::instrument(level = "info", skip(state, body), fields(request_id = %Uuid::new_v4()))]
pub async fn proxy_summarize(State(state): State<GatewayState>, body: Bytes) -> Response {
    let Some(text) = extract_text(&body) else {
        warn!("Gateway request without usable text");
        return err_response(StatusCode::BAD_REQUEST, NO_TEXT);
    };

    match state.backend.summarize(&text).await {
        Ok(Some(summary)) => {
            info!("Backend returned summary ({} chars)", summary.chars().count());
            Json(SummarizeResponse { summary }).into_response()
        }
        Ok(None) => {
            warn!("Backend reply carried no summary");
            err_response(StatusCode::INTERNAL_SERVER_ERROR, SUMMARIZE_FAILED)
        }
        Err(e) => {
            error!("Error calling summarization backend: {}", e);
            err_response(StatusCode::INTERNAL_SERVER_ERROR, BACKEND_UNREACHABLE)
        }
    }
}
