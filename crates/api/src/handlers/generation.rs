//! Handlers for `/ai/generate`: submit a generation job and poll its status.
//!
//! Submission validates, writes one job record and returns immediately.
//! Polling never mutates anything; status is derived from the clock.

use axum::body::Bytes;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use studio_core::error::CoreError;
use studio_core::generation::{self, GenerationRequest, SubmissionReceipt};
use studio_core::job_status;

use crate::error::{AppError, AppResult};
use crate::handlers::reject_query;
use crate::response::DataResponse;
use crate::state::AppState;

/// Public message for unexpected submission failures.
pub const SUBMIT_FAILED_MSG: &str = "Failed to generate AI asset";
/// Public message for unexpected polling failures.
pub const POLL_FAILED_MSG: &str = "Failed to check job status";
/// Returned when the poll request carries no `jobId`.
pub const JOB_ID_REQUIRED_MSG: &str = "Job ID is required";
/// Returned when the submission body is not valid JSON of the expected shape.
pub const INVALID_BODY_MSG: &str = "Invalid JSON body";

/// Query parameters for `GET /ai/generate`.
#[derive(Debug, Deserialize)]
pub struct PollQuery {
    #[serde(rename = "jobId")]
    pub job_id: Option<String>,
}

// ---------------------------------------------------------------------------
// Submit
// ---------------------------------------------------------------------------

/// POST /api/ai/generate
///
/// Validate the request, allocate a job and return its receipt with the
/// time/cost estimate. No generation backend is called.
///
/// The body is parsed as JSON whatever its `Content-Type` says.
pub async fn submit_generation(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<impl IntoResponse> {
    let request: GenerationRequest = serde_json::from_slice(&body).map_err(|e| {
        tracing::warn!(error = %e, "Rejected generation request body");
        AppError::BadRequest(INVALID_BODY_MSG.to_string())
    })?;

    let job = generation::prepare_job(&request, &state.tools, chrono::Utc::now())
        .map_err(AppError::in_context(SUBMIT_FAILED_MSG))?;

    let receipt = SubmissionReceipt::from(&job);

    state
        .jobs
        .insert(job)
        .await
        .map_err(AppError::in_context(SUBMIT_FAILED_MSG))?;

    tracing::info!(
        job_id = %receipt.job_id,
        tool = %receipt.tool,
        estimated_time = receipt.estimated_time,
        "Generation job submitted",
    );

    Ok(Json(DataResponse::ok(receipt)))
}

// ---------------------------------------------------------------------------
// Poll
// ---------------------------------------------------------------------------

/// GET /api/ai/generate?jobId=...
///
/// Resolve the job's phase, progress and result as of now. Unknown ids
/// are a 404; no status is fabricated for them.
pub async fn poll_generation(
    State(state): State<AppState>,
    query: Result<Query<PollQuery>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let Query(params) = query.map_err(reject_query)?;
    let job_id = params
        .job_id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| AppError::BadRequest(JOB_ID_REQUIRED_MSG.to_string()))?;

    let found = state
        .jobs
        .get(&job_id)
        .await
        .map_err(AppError::in_context(POLL_FAILED_MSG))?;

    let Some(job) = found else {
        tracing::debug!(%job_id, "Poll for unknown job");
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Job",
            id: job_id,
        }));
    };

    let view = job_status::resolve_status(&job, chrono::Utc::now());

    tracing::debug!(
        job_id = %view.job_id,
        progress = view.progress,
        "Generation job polled",
    );

    Ok(Json(DataResponse::ok(view)))
}
