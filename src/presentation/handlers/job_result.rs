use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use super::error_response::error_response;
use super::job_response::JobResponse;
use crate::application::services::JobQueryError;
use crate::domain::JobId;
use crate::presentation::state::AppState;

const JOB_NOT_FOUND: &str = "job not found";

#[tracing::instrument(skip(state))]
pub async fn job_result_handler(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
) -> impl IntoResponse {
    // Ids that are not UUIDs cannot name a job.
    let Ok(id) = job_id.parse::<JobId>() else {
        return error_response(StatusCode::NOT_FOUND, JOB_NOT_FOUND);
    };

    match state.job_queries.get_by_id(id).await {
        Ok(job) => (StatusCode::OK, Json(JobResponse::from(job))).into_response(),
        Err(JobQueryError::NotFound(_)) => error_response(StatusCode::NOT_FOUND, JOB_NOT_FOUND),
        Err(e) => {
            tracing::error!(error = %e, "Failed to fetch job");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to fetch job: {}", e),
            )
        }
    }
}
