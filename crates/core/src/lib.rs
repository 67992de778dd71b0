//! Domain types and pure logic for the generation job service.
//!
//! Nothing in this crate performs I/O: submission planning and status
//! resolution are plain functions over [`job::JobRecord`] and a timestamp,
//! so the HTTP layer and the store can be swapped without touching them.

pub mod error;
pub mod generation;
pub mod job;
pub mod job_status;
pub mod tools;
pub mod types;
