//! Submission validation and estimate planning for generation jobs.
//!
//! [`prepare_job`] is the whole submission service minus the store write:
//! it validates the request against the [`ToolCatalog`], derives the time
//! estimate and generation parameters from the quality tier, and returns a
//! ready-to-insert [`JobRecord`].

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::CoreError;
use crate::job::{new_job_id, JobPhase, JobRecord};
use crate::tools::{Tool, ToolCatalog};
use crate::types::{JobId, Timestamp};

// ---------------------------------------------------------------------------
// Error messages
// ---------------------------------------------------------------------------

/// Returned when `prompt` or `tool` is absent or empty.
pub const MISSING_FIELDS_MSG: &str = "Missing required fields: prompt and tool";
/// Returned when `tool` is not a member of the supported set.
pub const INVALID_TOOL_MSG: &str = "Invalid AI tool specified";

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

/// Classifier-free guidance used when the caller supplies none.
pub const DEFAULT_GUIDANCE: f64 = 7.5;

// ---------------------------------------------------------------------------
// Quality tiers
// ---------------------------------------------------------------------------

/// Quality tier derived from the free-form `quality` label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum QualityTier {
    Standard,
    High,
    Ultra,
}

impl QualityTier {
    /// `"ultra"` and `"high"` select their tiers; anything else, including
    /// no label at all, is `Standard`.
    pub fn from_label(label: Option<&str>) -> Self {
        match label {
            Some("ultra") => Self::Ultra,
            Some("high") => Self::High,
            _ => Self::Standard,
        }
    }

    /// Estimated generation time in seconds.
    pub fn estimated_time_secs(self) -> u32 {
        match self {
            Self::Ultra => 120,
            Self::High => 60,
            Self::Standard => 30,
        }
    }

    /// Sampler step count.
    pub fn steps(self) -> u32 {
        match self {
            Self::Ultra => 50,
            Self::High => 30,
            Self::Standard => 20,
        }
    }
}

// ---------------------------------------------------------------------------
// Request / receipt
// ---------------------------------------------------------------------------

/// Body of a submission request. Every field is optional at the wire level
/// so missing fields surface as [`MISSING_FIELDS_MSG`] rather than a
/// deserialization error. `style` and `quality` are echoed untouched, so
/// they accept any JSON value; only a string `quality` selects a tier.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerationRequest {
    pub prompt: Option<String>,
    pub tool: Option<String>,
    pub style: Option<Value>,
    pub quality: Option<Value>,
    pub parameters: Option<Value>,
}

/// Response payload for an accepted submission.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionReceipt {
    pub job_id: JobId,
    pub status: JobPhase,
    pub estimated_time: u32,
    pub cost: f64,
    pub tool: Tool,
    pub prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<Value>,
    pub parameters: Map<String, Value>,
}

impl From<&JobRecord> for SubmissionReceipt {
    fn from(job: &JobRecord) -> Self {
        Self {
            job_id: job.id.clone(),
            status: JobPhase::Processing,
            estimated_time: job.estimated_time_secs,
            cost: job.cost,
            tool: job.tool,
            prompt: job.prompt.clone(),
            style: job.style.clone(),
            quality: job.quality.clone(),
            parameters: job.parameters.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// Validation and planning
// ---------------------------------------------------------------------------

/// Check required fields, tool membership and tool availability, in that
/// order. Returns the trimmed-down pieces the planner needs.
pub fn validate_request<'a>(
    request: &'a GenerationRequest,
    catalog: &ToolCatalog,
) -> Result<(&'a str, Tool), CoreError> {
    let prompt = request.prompt.as_deref().filter(|p| !p.is_empty());
    let tool_name = request.tool.as_deref().filter(|t| !t.is_empty());

    let (Some(prompt), Some(tool_name)) = (prompt, tool_name) else {
        return Err(CoreError::Validation(MISSING_FIELDS_MSG.to_string()));
    };

    let tool = Tool::from_name(tool_name)
        .ok_or_else(|| CoreError::Validation(INVALID_TOOL_MSG.to_string()))?;

    catalog.ensure_available(tool)?;

    Ok((prompt, tool))
}

/// Merge caller parameters with the derived `model`, `steps` and `guidance`.
///
/// Caller keys are kept, except that `model` and `steps` are always
/// overwritten. A caller `guidance` survives only when it is truthy
/// (not null, `false`, `0` or `""`); otherwise [`DEFAULT_GUIDANCE`] is used.
/// Non-object `parameters` contribute no keys.
pub fn resolve_parameters(
    supplied: Option<&Value>,
    tool: Tool,
    tier: QualityTier,
) -> Map<String, Value> {
    let mut params = match supplied {
        Some(Value::Object(map)) => map.clone(),
        _ => Map::new(),
    };

    let guidance = params
        .get("guidance")
        .filter(|v| is_truthy(v))
        .cloned()
        .unwrap_or_else(|| Value::from(DEFAULT_GUIDANCE));

    params.insert("model".into(), Value::from(tool.default_model()));
    params.insert("steps".into(), Value::from(tier.steps()));
    params.insert("guidance".into(), guidance);
    params
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Validate a request and build the record to store, submitted at `now`.
pub fn prepare_job(
    request: &GenerationRequest,
    catalog: &ToolCatalog,
    now: Timestamp,
) -> Result<JobRecord, CoreError> {
    let (prompt, tool) = validate_request(request, catalog)?;
    let tier = QualityTier::from_label(request.quality.as_ref().and_then(Value::as_str));

    Ok(JobRecord {
        id: new_job_id(),
        submitted_at: now,
        tool,
        prompt: prompt.to_string(),
        style: request.style.clone(),
        quality: request.quality.clone(),
        parameters: resolve_parameters(request.parameters.as_ref(), tool, tier),
        cost: tool.cost(),
        estimated_time_secs: tier.estimated_time_secs(),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
