use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use super::error_response::error_response;
use crate::domain::{DEFAULT_LANGUAGE, TranscriptionRequest};
use crate::presentation::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ProcessRequest {
    pub url: String,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default)]
    pub translate: bool,
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

#[derive(Serialize)]
pub struct ProcessResponse {
    pub job_id: String,
    pub status: String,
}

/// Accepts a job without validating the URL; that happens inside the job run.
#[tracing::instrument(skip(state, payload))]
pub async fn process_handler(
    State(state): State<AppState>,
    payload: Result<Json<ProcessRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(request) = match payload {
        Ok(body) => body,
        Err(rejection) => {
            tracing::warn!(error = %rejection.body_text(), "Rejected malformed submission");
            return error_response(StatusCode::BAD_REQUEST, rejection.body_text());
        }
    };

    let request = TranscriptionRequest::new(request.url, request.language, request.translate);

    match state.dispatcher.submit(request).await {
        Ok(submitted) => (
            StatusCode::ACCEPTED,
            Json(ProcessResponse {
                job_id: submitted.job.id.to_string(),
                status: submitted.job.status.as_str().to_string(),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to create job record");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to create job: {}", e),
            )
        }
    }
}
