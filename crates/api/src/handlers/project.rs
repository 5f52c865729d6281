//! Handlers for the `/projects` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use planner_core::types::DbId;
use planner_db::models::project::{Project, ProjectInput, ProjectRecord};
use planner_db::repositories::ProjectRepo;

use crate::error::AppResult;
use crate::response::SuccessResponse;
use crate::state::AppState;

/// GET /projects
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Project>>> {
    let projects = ProjectRepo::list(&state.pool).await?;
    Ok(Json(projects))
}

/// POST /projects
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<ProjectInput>,
) -> AppResult<(StatusCode, Json<ProjectRecord>)> {
    let project = ProjectRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(project.into())))
}

/// PUT /projects/{id} -- full replacement; echoes the stored fields.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<ProjectInput>,
) -> AppResult<Json<ProjectRecord>> {
    ProjectRepo::update(&state.pool, id, &input).await?;
    Ok(Json(ProjectRecord {
        id,
        name: input.name,
        client_id: input.client_id,
    }))
}

/// DELETE /projects/{id} -- removes the project and its assignments.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<SuccessResponse>> {
    ProjectRepo::delete(&state.pool, id).await?;
    Ok(Json(SuccessResponse::ok()))
}
