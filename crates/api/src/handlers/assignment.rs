//! Handlers for the `/assignments` resource.
//!
//! Creation accepts every supported legacy payload shape and runs the full
//! normalizer. Updates require explicit ids (no name resolution) but still
//! accept the period index and coerce numeric strings.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use planner_core::error::CoreError;
use planner_core::payload;
use planner_core::types::DbId;
use planner_db::models::assignment::{Assignment, AssignmentRecord, CanonicalAssignment};
use planner_db::repositories::AssignmentRepo;
use serde_json::{Map, Value};

use crate::error::AppResult;
use crate::normalize::{normalize_assignment, resolve_dates};
use crate::response::SuccessResponse;
use crate::state::AppState;

/// GET /assignments
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Assignment>>> {
    let assignments = AssignmentRepo::list(&state.pool).await?;
    Ok(Json(assignments))
}

/// POST /assignments -- normalize, resolve, insert.
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<Map<String, Value>>,
) -> AppResult<(StatusCode, Json<AssignmentRecord>)> {
    let canonical = normalize_assignment(&state.pool, &body).await?;
    let created = AssignmentRepo::create(&state.pool, &canonical).await?;
    Ok((StatusCode::CREATED, Json(canonical.into_record(created.id))))
}

/// PUT /assignments/{id} -- full replacement with explicit ids.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(body): Json<Map<String, Value>>,
) -> AppResult<Json<AssignmentRecord>> {
    let person_id = payload::id_field(&body, "personId", "person_id")?;
    let project_id = payload::id_field(&body, "projectId", "project_id")?;
    let (Some(person_id), Some(project_id)) = (person_id, project_id) else {
        let mut missing = Vec::new();
        if person_id.is_none() {
            missing.push("personId");
        }
        if project_id.is_none() {
            missing.push("projectId");
        }
        return Err(CoreError::validation(format!(
            "Missing required fields: {}",
            missing.join(", ")
        ))
        .into());
    };

    let (start_date, end_date) = resolve_dates(&body)?;
    let percentage = payload::percentage_field(&body)?;

    let record = CanonicalAssignment {
        person_id,
        project_id,
        start_date,
        end_date,
        percentage,
    };
    AssignmentRepo::update(&state.pool, id, &record).await?;
    Ok(Json(record.into_record(id)))
}

/// DELETE /assignments/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<SuccessResponse>> {
    AssignmentRepo::delete(&state.pool, id).await?;
    Ok(Json(SuccessResponse::ok()))
}
