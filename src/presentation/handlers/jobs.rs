use std::collections::BTreeMap;

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Deserialize;

use super::error_response::error_response;
use super::job_response::JobResponse;
use crate::domain::JobStatus;
use crate::presentation::state::AppState;

#[derive(Debug, Deserialize)]
pub struct JobsFilter {
    pub status: Option<String>,
}

#[tracing::instrument(skip(state))]
pub async fn list_jobs_handler(
    State(state): State<AppState>,
    Query(filter): Query<JobsFilter>,
) -> impl IntoResponse {
    let jobs = match filter.status.as_deref() {
        None => state.job_queries.list_all().await,
        Some(raw) => match raw.parse::<JobStatus>() {
            Ok(status) => state.job_queries.list_by_status(status).await,
            Err(e) => return error_response(StatusCode::BAD_REQUEST, e),
        },
    };

    match jobs {
        Ok(jobs) => {
            let response: BTreeMap<String, JobResponse> = jobs
                .into_iter()
                .map(|job| (job.id.to_string(), JobResponse::from(job)))
                .collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to list jobs");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to list jobs: {}", e),
            )
        }
    }
}
