//! Operator view over submitted jobs.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use studio_core::job_status::{self, JobStatusView};
use studio_db::models::job::JobListQuery;

use crate::error::{AppError, AppResult};
use crate::handlers::reject_query;
use crate::response::DataResponse;
use crate::state::AppState;

/// Public message for unexpected listing failures.
pub const LIST_FAILED_MSG: &str = "Failed to list jobs";

/// Response payload for `GET /api/ai/jobs`.
#[derive(Debug, Serialize)]
pub struct JobListing {
    /// Number of jobs in the store, regardless of `limit`.
    pub total: usize,
    pub jobs: Vec<JobStatusView>,
}

/// GET /api/ai/jobs
///
/// Current status of the most recently submitted jobs, newest first.
/// Supports an optional `limit` query parameter (default 50, max 100).
pub async fn list_jobs(
    State(state): State<AppState>,
    query: Result<Query<JobListQuery>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let Query(params) = query.map_err(reject_query)?;
    let records = state
        .jobs
        .list(params.effective_limit())
        .await
        .map_err(AppError::in_context(LIST_FAILED_MSG))?;
    let total = state
        .jobs
        .count()
        .await
        .map_err(AppError::in_context(LIST_FAILED_MSG))?;

    let now = chrono::Utc::now();
    let jobs = records
        .iter()
        .map(|job| job_status::resolve_status(job, now))
        .collect();

    Ok(Json(DataResponse::ok(JobListing { total, jobs })))
}
