//! Derive a job's status from elapsed wall-clock time.
//!
//! No worker advances jobs. Each poll computes phase, progress and result
//! from `now - submitted_at` alone:
//!
//! | elapsed (ms)    | phase      | progress |
//! |-----------------|------------|----------|
//! | < 15 000        | processing | 25       |
//! | 15 000..30 000  | processing | 50       |
//! | 30 000..60 000  | processing | 75       |
//! | >= 60 000       | completed  | 100      |
//!
//! Elapsed time only grows, so the phase never regresses. The completed
//! payload depends only on the record, so every terminal poll returns the
//! same result.

use serde::Serialize;

use crate::job::{JobPhase, JobRecord};
use crate::tools::Tool;
use crate::types::{JobId, Timestamp};

// ---------------------------------------------------------------------------
// Thresholds
// ---------------------------------------------------------------------------

/// Elapsed milliseconds at which progress reaches 50.
pub const HALF_PROGRESS_MS: i64 = 15_000;
/// Elapsed milliseconds at which progress reaches 75.
pub const LATE_PROGRESS_MS: i64 = 30_000;
/// Elapsed milliseconds at which a job completes.
pub const COMPLETION_MS: i64 = 60_000;

// ---------------------------------------------------------------------------
// Generated asset shape
// ---------------------------------------------------------------------------

/// Number of assets every completed job produces.
pub const ASSETS_PER_JOB: usize = 2;
/// Width and height of each generated image.
pub const ASSET_DIMENSION_PX: u32 = 1024;
pub const ASSET_FORMAT: &str = "PNG";
pub const ASSET_SIZE_BYTES: u64 = 2_048_000;
/// Path prefix the generated files are served from.
pub const GENERATED_ASSET_PATH: &str = "/api/generated";

// ---------------------------------------------------------------------------
// Views
// ---------------------------------------------------------------------------

/// One generated image.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedAsset {
    pub id: String,
    pub url: String,
    pub thumbnail: String,
    pub width: u32,
    pub height: u32,
    pub format: &'static str,
    pub size: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultMetadata {
    pub tool: Tool,
    pub prompt: String,
    pub style: Option<serde_json::Value>,
    pub quality: Option<serde_json::Value>,
    pub generated_at: Timestamp,
}

/// Payload of a completed job.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationResult {
    pub assets: Vec<GeneratedAsset>,
    pub metadata: ResultMetadata,
}

/// What a poll returns.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobStatusView {
    pub job_id: JobId,
    pub status: JobPhase,
    pub progress: u8,
    /// `null` until the job completes.
    pub result: Option<GenerationResult>,
    pub estimated_time_remaining: i64,
}

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

/// Phase and progress percentage for a given elapsed time.
pub fn phase_for_elapsed(elapsed_ms: i64) -> (JobPhase, u8) {
    if elapsed_ms >= COMPLETION_MS {
        (JobPhase::Completed, 100)
    } else if elapsed_ms >= LATE_PROGRESS_MS {
        (JobPhase::Processing, 75)
    } else if elapsed_ms >= HALF_PROGRESS_MS {
        (JobPhase::Processing, 50)
    } else {
        (JobPhase::Processing, 25)
    }
}

/// Whole seconds left until completion; 0 once completed.
pub fn estimated_time_remaining(elapsed_ms: i64) -> i64 {
    let elapsed_secs = elapsed_ms.max(0) / 1000;
    (COMPLETION_MS / 1000 - elapsed_secs).max(0)
}

/// Resolve the status of `job` as observed at `now`.
///
/// A `now` earlier than `submitted_at` is treated as zero elapsed time.
pub fn resolve_status(job: &JobRecord, now: Timestamp) -> JobStatusView {
    let elapsed_ms = (now - job.submitted_at).num_milliseconds().max(0);
    let (status, progress) = phase_for_elapsed(elapsed_ms);

    let result = status.is_terminal().then(|| completed_result(job));

    JobStatusView {
        job_id: job.id.clone(),
        status,
        progress,
        result,
        estimated_time_remaining: estimated_time_remaining(elapsed_ms),
    }
}

/// Build the fixed-shape result payload for a completed job.
///
/// `generated_at` is the completion instant (`submitted_at` + 60 s), not
/// the poll time, so repeated polls agree.
pub fn completed_result(job: &JobRecord) -> GenerationResult {
    let assets = (1..=ASSETS_PER_JOB)
        .map(|n| GeneratedAsset {
            id: format!("asset_{}_{n}", job.id),
            url: format!("{GENERATED_ASSET_PATH}/{}_{n}.png", job.id),
            thumbnail: format!("{GENERATED_ASSET_PATH}/{}_{n}_thumb.png", job.id),
            width: ASSET_DIMENSION_PX,
            height: ASSET_DIMENSION_PX,
            format: ASSET_FORMAT,
            size: ASSET_SIZE_BYTES,
        })
        .collect();

    GenerationResult {
        assets,
        metadata: ResultMetadata {
            tool: job.tool,
            prompt: job.prompt.clone(),
            style: job.style.clone(),
            quality: job.quality.clone(),
            generated_at: job.submitted_at + chrono::Duration::milliseconds(COMPLETION_MS),
        },
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
