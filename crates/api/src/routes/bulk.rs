//! Route definitions for the `/bulk-upload` endpoints.

use axum::routing::post;
use axum::Router;

use crate::handlers::bulk;
use crate::state::AppState;

/// Routes mounted at `/bulk-upload`.
///
/// ```text
/// POST /people          -> insert rows
/// POST /clients         -> insert rows
/// POST /projects        -> insert rows, resolving clientName
/// POST /assignments     -> upsert rows by natural key
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/people", post(bulk::people))
        .route("/clients", post(bulk::clients))
        .route("/projects", post(bulk::projects))
        .route("/assignments", post(bulk::assignments))
}
