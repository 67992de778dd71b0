pub mod generation;
pub mod jobs;
pub mod tools;

use axum::extract::rejection::QueryRejection;

use crate::error::AppError;

/// Returned when a query string cannot be decoded into the handler's
/// parameters (wrong type, repeated key).
pub const INVALID_QUERY_MSG: &str = "Invalid query string";

/// Map an axum query rejection into the JSON error envelope.
pub(crate) fn reject_query(rejection: QueryRejection) -> AppError {
    tracing::warn!(error = %rejection, "Rejected query string");
    AppError::BadRequest(INVALID_QUERY_MSG.to_string())
}
