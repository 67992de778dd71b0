/// Opaque job identity issued at submission (`job_<uuid>`).
pub type JobId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
