//! Repository for generation job records.
//!
//! Records are write-once: a job id is inserted exactly once at
//! submission and only read afterwards. A second insert under the same id
//! is rejected with [`CoreError::Conflict`].

use std::collections::HashMap;

use async_trait::async_trait;
use studio_core::error::CoreError;
use studio_core::job::JobRecord;
use studio_core::types::JobId;
use tokio::sync::RwLock;

/// Storage interface for job records.
#[async_trait]
pub trait JobStore: Send + Sync {
    /// Store a new record. Fails with `Conflict` if the id already exists.
    async fn insert(&self, job: JobRecord) -> Result<(), CoreError>;

    /// Fetch a record by id.
    async fn get(&self, id: &str) -> Result<Option<JobRecord>, CoreError>;

    /// Most recently submitted records first, at most `limit` of them.
    async fn list(&self, limit: usize) -> Result<Vec<JobRecord>, CoreError>;

    /// Total number of stored records.
    async fn count(&self) -> Result<usize, CoreError>;
}

/// Process-local job store.
///
/// Thread-safe via interior `RwLock`; designed to be wrapped in `Arc` and
/// shared across handlers.
#[derive(Default)]
pub struct InMemoryJobStore {
    jobs: RwLock<HashMap<JobId, JobRecord>>,
}

impl InMemoryJobStore {
    /// Create a new, empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl JobStore for InMemoryJobStore {
    async fn insert(&self, job: JobRecord) -> Result<(), CoreError> {
        let mut jobs = self.jobs.write().await;
        if jobs.contains_key(&job.id) {
            return Err(CoreError::Conflict(format!("Job {} already exists", job.id)));
        }
        tracing::debug!(job_id = %job.id, tool = %job.tool, "Job record stored");
        jobs.insert(job.id.clone(), job);
        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Option<JobRecord>, CoreError> {
        Ok(self.jobs.read().await.get(id).cloned())
    }

    async fn list(&self, limit: usize) -> Result<Vec<JobRecord>, CoreError> {
        let jobs = self.jobs.read().await;
        let mut records: Vec<JobRecord> = jobs.values().cloned().collect();
        records.sort_by(|a, b| {
            b.submitted_at
                .cmp(&a.submitted_at)
                .then_with(|| a.id.cmp(&b.id))
        });
        records.truncate(limit);
        Ok(records)
    }

    async fn count(&self) -> Result<usize, CoreError> {
        Ok(self.jobs.read().await.len())
    }
}
