//! Handlers for the `/people` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use planner_core::types::DbId;
use planner_db::models::person::{Person, PersonInput};
use planner_db::repositories::PersonRepo;

use crate::error::AppResult;
use crate::response::SuccessResponse;
use crate::state::AppState;

/// GET /people
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Person>>> {
    let people = PersonRepo::list(&state.pool).await?;
    Ok(Json(people))
}

/// POST /people
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<PersonInput>,
) -> AppResult<(StatusCode, Json<Person>)> {
    let person = PersonRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(person)))
}

/// PUT /people/{id} -- full replacement; echoes the stored fields.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<PersonInput>,
) -> AppResult<Json<Person>> {
    PersonRepo::update(&state.pool, id, &input).await?;
    Ok(Json(Person {
        id,
        name: input.name,
        role: input.role,
    }))
}

/// DELETE /people/{id} -- removes the person and their assignments.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<SuccessResponse>> {
    PersonRepo::delete(&state.pool, id).await?;
    Ok(Json(SuccessResponse::ok()))
}
