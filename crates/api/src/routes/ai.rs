//! Route definitions for the `/ai` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::{generation, jobs, tools};
use crate::state::AppState;

/// Routes mounted at `/ai`.
///
/// ```text
/// POST   /generate        -> submit_generation
/// GET    /generate        -> poll_generation
/// GET    /tools           -> list_tools
/// GET    /jobs            -> list_jobs
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/generate",
            get(generation::poll_generation).post(generation::submit_generation),
        )
        .route("/tools", get(tools::list_tools))
        .route("/jobs", get(jobs::list_jobs))
}
