//! Query and DTO types shared by the repository layer and its callers.

pub mod job;
