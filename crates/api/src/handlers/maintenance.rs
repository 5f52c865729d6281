//! Maintenance handlers.

use axum::extract::State;
use axum::Json;

use crate::error::AppResult;
use crate::response::SuccessResponse;
use crate::state::AppState;

/// POST /clear-all -- delete every row from every table, children first.
pub async fn clear_all(State(state): State<AppState>) -> AppResult<Json<SuccessResponse>> {
    planner_db::clear_all(&state.pool).await?;
    Ok(Json(SuccessResponse::ok()))
}
