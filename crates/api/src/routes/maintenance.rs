//! Route definitions for maintenance endpoints.

use axum::routing::post;
use axum::Router;

use crate::handlers::maintenance;
use crate::state::AppState;

/// Routes mounted at the application root.
///
/// ```text
/// POST /clear-all    -> wipe all tables
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/clear-all", post(maintenance::clear_all))
}
