//! Listing parameters for stored jobs.

use serde::Deserialize;

/// Maximum page size for job listing.
pub const MAX_LIMIT: usize = 100;

/// Default page size for job listing.
pub const DEFAULT_LIMIT: usize = 50;

/// Query parameters for `GET /api/ai/jobs`.
#[derive(Debug, Default, Deserialize)]
pub struct JobListQuery {
    /// Maximum number of results. Defaults to 50, capped at 100.
    pub limit: Option<usize>,
}

impl JobListQuery {
    /// The effective page size after defaulting and clamping.
    pub fn effective_limit(&self) -> usize {
        self.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT)
    }
}
