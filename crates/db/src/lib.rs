//! Job record storage.
//!
//! Handlers depend on the [`repositories::JobStore`] trait, never on a
//! concrete backend. [`repositories::InMemoryJobStore`] is the only backend
//! today; records live for the lifetime of the process.

use std::sync::Arc;

pub mod models;
pub mod repositories;

/// Shared, type-erased job store handed to the HTTP layer.
pub type SharedJobStore = Arc<dyn repositories::JobStore>;

/// Build the default in-process store.
pub fn in_memory_store() -> SharedJobStore {
    Arc::new(repositories::InMemoryJobStore::new())
}
