//! The job record and its coarse lifecycle phase.

use serde::{Deserialize, Serialize};

use crate::tools::Tool;
use crate::types::{JobId, Timestamp};

/// Prefix of every issued job id.
pub const JOB_ID_PREFIX: &str = "job_";

/// Allocate a fresh, opaque job id.
///
/// The id carries no timestamp; `submitted_at` lives on the record.
pub fn new_job_id() -> JobId {
    format!("{JOB_ID_PREFIX}{}", uuid::Uuid::new_v4().simple())
}

/// Coarse lifecycle state of a job. Ordered: a job only moves forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobPhase {
    Processing,
    Completed,
}

impl JobPhase {
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Completed)
    }
}

/// One submitted generation job.
///
/// Written once at submission and never mutated; status is derived on read.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRecord {
    pub id: JobId,
    pub submitted_at: Timestamp,
    pub tool: Tool,
    pub prompt: String,
    /// Caller-supplied `style` and `quality`, kept exactly as sent.
    pub style: Option<serde_json::Value>,
    pub quality: Option<serde_json::Value>,
    /// Caller parameters merged with the derived `model`, `steps` and `guidance`.
    pub parameters: serde_json::Map<String, serde_json::Value>,
    pub cost: f64,
    pub estimated_time_secs: u32,
}
