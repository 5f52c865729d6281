//! Route definitions.
//!
//! Each submodule provides a `router()` for one resource; [`api_routes`]
//! assembles them. Routes are mounted at the application root; there is no
//! version prefix.

pub mod assignment;
pub mod bulk;
pub mod client;
pub mod health;
pub mod maintenance;
pub mod person;
pub mod project;

use axum::Router;

use crate::state::AppState;

/// Build the full route tree (health excluded; see [`health::router`]).
///
/// ```text
/// /people                      list, create (GET, POST)
/// /people/{id}                 update, delete (PUT, DELETE)
/// /clients                     list, create (GET, POST)
/// /clients/{id}                update, delete (PUT, DELETE)
/// /projects                    list, create (GET, POST)
/// /projects/{id}               update, delete (PUT, DELETE)
/// /assignments                 list, create (GET, POST)
/// /assignments/{id}            update, delete (PUT, DELETE)
/// /bulk-upload/people          bulk insert (POST)
/// /bulk-upload/clients         bulk insert (POST)
/// /bulk-upload/projects        bulk insert, client resolution (POST)
/// /bulk-upload/assignments     bulk upsert by natural key (POST)
/// /clear-all                   wipe all tables (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/people", person::router())
        .nest("/clients", client::router())
        .nest("/projects", project::router())
        .nest("/assignments", assignment::router())
        .nest("/bulk-upload", bulk::router())
        .merge(maintenance::router())
}
