//! Route definitions for the `/people` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::person;
use crate::state::AppState;

/// Routes mounted at `/people`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(person::list).post(person::create))
        .route("/{id}", put(person::update).delete(person::delete))
}
