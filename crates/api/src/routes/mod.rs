pub mod ai;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /ai/generate            submit (POST), poll (GET ?jobId=)
/// /ai/tools               tool catalog (GET)
/// /ai/jobs                recent jobs with status (GET ?limit=)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/ai", ai::router())
}
