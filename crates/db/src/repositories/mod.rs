//! Repository layer.
//!
//! Repositories are traits so backends can be swapped behind the HTTP
//! layer; each comes with an in-process implementation.

pub mod job_repo;

pub use job_repo::{InMemoryJobStore, JobStore};
