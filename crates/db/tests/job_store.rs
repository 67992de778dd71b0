//! Integration tests for the in-memory job store.
//!
//! Exercises the write-once contract, lookups, listing order and
//! concurrent access through the `JobStore` trait object.

use std::sync::Arc;

use assert_matches::assert_matches;
use chrono::{Duration, Utc};
use studio_core::error::CoreError;
use studio_core::job::{new_job_id, JobRecord};
use studio_core::tools::Tool;
use studio_core::types::Timestamp;
use studio_db::repositories::{InMemoryJobStore, JobStore};
use studio_db::SharedJobStore;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_job(submitted_at: Timestamp) -> JobRecord {
    JobRecord {
        id: new_job_id(),
        submitted_at,
        tool: Tool::Runway,
        prompt: "city at dusk".to_string(),
        style: None,
        quality: None,
        parameters: serde_json::Map::new(),
        cost: Tool::Runway.cost(),
        estimated_time_secs: 30,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[tokio::test]
async fn insert_then_get_returns_same_record() {
    let store = InMemoryJobStore::new();
    let job = new_job(Utc::now());
    let id = job.id.clone();

    store.insert(job.clone()).await.unwrap();

    let found = store.get(&id).await.unwrap().expect("job should exist");
    assert_eq!(found.id, id);
    assert_eq!(found.submitted_at, job.submitted_at);
    assert_eq!(found.tool, Tool::Runway);
}

#[tokio::test]
async fn unknown_id_is_none() {
    let store = InMemoryJobStore::new();
    assert!(store.get("job_missing").await.unwrap().is_none());
    assert!(store.get("").await.unwrap().is_none());
}

#[tokio::test]
async fn second_insert_with_same_id_conflicts() {
    let store = InMemoryJobStore::new();
    let original = new_job(Utc::now());
    let mut duplicate = original.clone();
    duplicate.prompt = "overwritten".to_string();
    duplicate.submitted_at = original.submitted_at + Duration::seconds(30);

    store.insert(original.clone()).await.unwrap();
    let err = store.insert(duplicate).await.unwrap_err();
    assert_matches!(err, CoreError::Conflict(_));

    // The first write wins and is unchanged.
    let stored = store.get(&original.id).await.unwrap().unwrap();
    assert_eq!(stored.prompt, "city at dusk");
    assert_eq!(stored.submitted_at, original.submitted_at);
    assert_eq!(store.count().await.unwrap(), 1);
}

#[tokio::test]
async fn list_is_newest_first_and_limited() {
    let store = InMemoryJobStore::new();
    let base = Utc::now();
    let oldest = new_job(base - Duration::minutes(10));
    let middle = new_job(base - Duration::minutes(5));
    let newest = new_job(base);

    for job in [middle.clone(), oldest.clone(), newest.clone()] {
        store.insert(job).await.unwrap();
    }

    let all = store.list(10).await.unwrap();
    let ids: Vec<_> = all.iter().map(|j| j.id.as_str()).collect();
    assert_eq!(ids, [newest.id.as_str(), middle.id.as_str(), oldest.id.as_str()]);

    let page = store.list(2).await.unwrap();
    assert_eq!(page.len(), 2);
    assert_eq!(page[0].id, newest.id);
}

#[tokio::test]
async fn concurrent_inserts_through_shared_handle() {
    let store: SharedJobStore = Arc::new(InMemoryJobStore::new());

    let mut handles = Vec::new();
    for _ in 0..32 {
        let store = Arc::clone(&store);
        handles.push(tokio::spawn(async move {
            store.insert(new_job(Utc::now())).await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    assert_eq!(store.count().await.unwrap(), 32);
}
