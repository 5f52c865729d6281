//! Route definitions for the `/assignments` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::assignment;
use crate::state::AppState;

/// Routes mounted at `/assignments`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create (normalizing legacy payload shapes)
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(assignment::list).post(assignment::create))
        .route("/{id}", put(assignment::update).delete(assignment::delete))
}
