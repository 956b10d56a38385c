//! `POST /summarize` handler.
//!
//! Validates the JSON body, runs the shared model on the blocking pool and
//! maps every failure to a `{"detail": ...}` body.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::{error, info, warn};
use uuid::Uuid;

use super::AppState;
use crate::core::models::{ErrorDetail, SummarizeRequest, SummarizeResponse};
use crate::errors::SummarizerError;

/// Error half of the handler result.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub detail: String,
}

impl From<SummarizerError> for ApiError {
    fn from(error: SummarizerError) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            detail: error.to_string(),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self {
            status: rejection.status(),
            detail: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorDetail { detail: self.detail })).into_response()
    }
}

/// Summarizes `text` with the fixed generation parameters.
///
/// # Errors
///
/// 422 (or the framework's status) when the body does not match
/// [`SummarizeRequest`]; 500 with the original error text when inference
/// fails.
#[tracing::instrument(level = "info", skip(state, payload), fields(request_id = %Uuid::new_v4()))]
pub async fn summarize(
    State(state): State<AppState>,
    payload: Result<Json<SummarizeRequest>, JsonRejection>,
) -> Result<Json<SummarizeResponse>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!("Rejected summarize request: {}", rejection.body_text());
        ApiError::from(rejection)
    })?;

    #[cfg(feature = "debug-logs")]
    info!("Summarizing text:\n{}", request.text);

    #[cfg(not(feature = "debug-logs"))]
    info!("Summarizing text of {} chars", request.text.chars().count());

    let summarizer = state.summarizer.clone();
    let params = state.params;
    let outcome = tokio::task::spawn_blocking(move || summarizer.summarize(&request.text, &params))
        .await
        .map_err(SummarizerError::from)
        .and_then(|result| result);

    match outcome {
        Ok(summary) => {
            #[cfg(feature = "debug-logs")]
            info!("Generated summary:\n{}", summary);

            info!("Summary generated ({} chars)", summary.chars().count());
            Ok(Json(SummarizeResponse { summary }))
        }
        Err(e) => {
            error!("Summarization failed: {}", e);
            Err(ApiError::from(e))
        }
    }
}
