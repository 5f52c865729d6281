//! Assignment payload normalization.
//!
//! Takes an arbitrary JSON object in any supported legacy or current shape
//! (camelCase or snake_case keys, numeric ids or natural-key names, explicit
//! dates or a period index) and produces the canonical
//! [`CanonicalAssignment`] record, resolving names against the database.
//!
//! Every failure is a request-level validation error carrying the reason
//! string that names the offending field or lookup.

use planner_core::error::CoreError;
use planner_core::payload;
use planner_core::period::period_to_dates;
use planner_core::types::DbId;
use planner_db::models::assignment::CanonicalAssignment;
use planner_db::repositories::{ClientRepo, PersonRepo, ProjectRepo};
use planner_db::DbPool;
use serde_json::{Map, Value};

use crate::error::{AppError, AppResult};

/// Normalize a full assignment payload: resolve the person and project,
/// settle the date range, and default the percentage.
pub async fn normalize_assignment(
    pool: &DbPool,
    body: &Map<String, Value>,
) -> AppResult<CanonicalAssignment> {
    if body.is_empty() {
        return Err(AppError::BadRequest(
            "Assignment payload is required".to_string(),
        ));
    }

    let person_id = resolve_person(pool, body).await?;
    let project_id = resolve_project(pool, body).await?;
    let (start_date, end_date) = resolve_dates(body)?;
    let percentage = payload::percentage_field(body)?;

    Ok(CanonicalAssignment {
        person_id,
        project_id,
        start_date,
        end_date,
        percentage,
    })
}

/// Resolve the person: an explicit id wins; otherwise the name is looked up
/// case-insensitively.
async fn resolve_person(pool: &DbPool, body: &Map<String, Value>) -> AppResult<DbId> {
    if let Some(id) = payload::id_field(body, "personId", "person_id")? {
        return Ok(id);
    }

    let name = payload::name_field(body, "personName", "person_name").ok_or_else(|| {
        CoreError::validation("Assignment requires personId or personName".to_string())
    })?;

    let id = PersonRepo::find_id_by_name(pool, &name)
        .await?
        .ok_or_else(|| CoreError::validation(format!("Person not found: {name}")))?;
    Ok(id)
}

/// Resolve the project: an explicit id wins; otherwise both the project name
/// and the client name are required, since a project name is only unique
/// within its client. The client resolves first.
async fn resolve_project(pool: &DbPool, body: &Map<String, Value>) -> AppResult<DbId> {
    if let Some(id) = payload::id_field(body, "projectId", "project_id")? {
        return Ok(id);
    }

    let project_name = payload::name_field(body, "projectName", "project_name");
    let client_name = payload::name_field(body, "clientName", "client_name");
    let (Some(project_name), Some(client_name)) = (project_name, client_name) else {
        return Err(CoreError::validation(
            "Assignment requires projectId or projectName with clientName".to_string(),
        )
        .into());
    };

    let client_id = ClientRepo::find_id_by_name(pool, &client_name)
        .await?
        .ok_or_else(|| CoreError::validation(format!("Client not found: {client_name}")))?;

    let project_id = ProjectRepo::find_id_by_name_and_client(pool, &project_name, client_id)
        .await?
        .ok_or_else(|| {
            CoreError::validation(format!(
                "Project not found: {project_name} (client: {client_name})"
            ))
        })?;
    Ok(project_id)
}

/// Settle the date range: explicit dates pass through verbatim; otherwise a
/// legacy period index is converted; otherwise the payload is rejected.
pub fn resolve_dates(body: &Map<String, Value>) -> AppResult<(String, String)> {
    let start = payload::date_field(body, "startDate", "start_date");
    let end = payload::date_field(body, "endDate", "end_date");
    if let (Some(start), Some(end)) = (start, end) {
        return Ok((start, end));
    }

    if let Some(period) = payload::period_field(body)? {
        return Ok(period_to_dates(period)?);
    }

    Err(CoreError::validation("Either startDate/endDate or period is required".to_string()).into())
}
