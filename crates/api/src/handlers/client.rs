//! Handlers for the `/clients` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use planner_core::types::DbId;
use planner_db::models::client::{Client, ClientInput};
use planner_db::repositories::ClientRepo;

use crate::error::AppResult;
use crate::response::SuccessResponse;
use crate::state::AppState;

/// GET /clients
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Client>>> {
    let clients = ClientRepo::list(&state.pool).await?;
    Ok(Json(clients))
}

/// POST /clients
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<ClientInput>,
) -> AppResult<(StatusCode, Json<Client>)> {
    let client = ClientRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(client)))
}

/// PUT /clients/{id} -- full replacement; echoes the stored fields.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<ClientInput>,
) -> AppResult<Json<Client>> {
    ClientRepo::update(&state.pool, id, &input).await?;
    Ok(Json(Client {
        id,
        name: input.name,
    }))
}

/// DELETE /clients/{id} -- removes the client, its projects, and their
/// assignments, deepest first.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<SuccessResponse>> {
    ClientRepo::delete(&state.pool, id).await?;
    Ok(Json(SuccessResponse::ok()))
}
