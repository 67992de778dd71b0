//! Handler for the tool catalog.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/ai/tools
///
/// List every supported tool with its endpoint, cost and current
/// availability, in catalog order.
pub async fn list_tools(State(state): State<AppState>) -> impl IntoResponse {
    Json(DataResponse::ok(state.tools.list()))
}
