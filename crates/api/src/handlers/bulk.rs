//! Handlers for the `/bulk-upload` endpoints.
//!
//! People, clients, and projects are inserted row by row, unconditionally;
//! repeating a batch duplicates its rows. Assignments are different: every
//! row is normalized up front (so a bad row rejects the call before anything
//! is written), then upserted by the natural `(person, project, start, end)`
//! key, which makes repeated submissions idempotent.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use planner_core::error::CoreError;
use planner_db::models::assignment::AssignmentRecord;
use planner_db::models::client::{Client, ClientInput};
use planner_db::models::person::{Person, PersonInput};
use planner_db::models::project::{BulkProjectRow, ProjectInput, ProjectRecord};
use planner_db::repositories::{AssignmentRepo, ClientRepo, PersonRepo, ProjectRepo};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::AppResult;
use crate::normalize::normalize_assignment;
use crate::response::AddedResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct BulkPeopleRequest {
    pub people: Vec<PersonInput>,
}

#[derive(Debug, Deserialize)]
pub struct BulkClientsRequest {
    pub clients: Vec<ClientInput>,
}

#[derive(Debug, Deserialize)]
pub struct BulkProjectsRequest {
    pub projects: Vec<BulkProjectRow>,
}

#[derive(Debug, Deserialize)]
pub struct BulkAssignmentsRequest {
    pub assignments: Vec<Map<String, Value>>,
}

/// POST /bulk-upload/people
pub async fn people(
    State(state): State<AppState>,
    Json(request): Json<BulkPeopleRequest>,
) -> AppResult<(StatusCode, Json<AddedResponse<Person>>)> {
    let mut added = Vec::with_capacity(request.people.len());
    for input in &request.people {
        added.push(PersonRepo::create(&state.pool, input).await?);
    }
    Ok((StatusCode::CREATED, Json(AddedResponse { added })))
}

/// POST /bulk-upload/clients
pub async fn clients(
    State(state): State<AppState>,
    Json(request): Json<BulkClientsRequest>,
) -> AppResult<(StatusCode, Json<AddedResponse<Client>>)> {
    let mut added = Vec::with_capacity(request.clients.len());
    for input in &request.clients {
        added.push(ClientRepo::create(&state.pool, input).await?);
    }
    Ok((StatusCode::CREATED, Json(AddedResponse { added })))
}

/// POST /bulk-upload/projects
///
/// Rows may reference their client by id or by name. Rows are inserted as
/// they are processed, so rows before a failing one remain.
pub async fn projects(
    State(state): State<AppState>,
    Json(request): Json<BulkProjectsRequest>,
) -> AppResult<(StatusCode, Json<AddedResponse<ProjectRecord>>)> {
    let mut added = Vec::with_capacity(request.projects.len());
    for row in &request.projects {
        let client_id = match row.client_id {
            Some(id) => id,
            None => {
                let name = row
                    .client_name
                    .as_deref()
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .ok_or_else(|| {
                        CoreError::validation("Project requires clientId or clientName".to_string())
                    })?;
                ClientRepo::find_id_by_name(&state.pool, name)
                    .await?
                    .ok_or_else(|| CoreError::validation(format!("Client not found: {name}")))?
            }
        };

        let project = ProjectRepo::create(
            &state.pool,
            &ProjectInput {
                name: row.name.clone(),
                client_id,
            },
        )
        .await?;
        added.push(project.into());
    }
    Ok((StatusCode::CREATED, Json(AddedResponse { added })))
}

/// POST /bulk-upload/assignments
///
/// Upsert-by-natural-key: an exact `(person, project, start, end)` match
/// gets its percentage updated; anything else is inserted.
pub async fn assignments(
    State(state): State<AppState>,
    Json(request): Json<BulkAssignmentsRequest>,
) -> AppResult<(StatusCode, Json<AddedResponse<AssignmentRecord>>)> {
    tracing::info!(rows = request.assignments.len(), "Bulk upload assignments request");

    // Normalize everything first: a validation failure in any row aborts
    // the call before a single row is written.
    let mut canonical = Vec::with_capacity(request.assignments.len());
    for row in &request.assignments {
        canonical.push(normalize_assignment(&state.pool, row).await?);
    }

    let mut added = Vec::with_capacity(canonical.len());
    for record in canonical {
        let id = match AssignmentRepo::find_existing(
            &state.pool,
            record.person_id,
            record.project_id,
            &record.start_date,
            &record.end_date,
        )
        .await?
        {
            Some(id) => {
                AssignmentRepo::update(&state.pool, id, &record).await?;
                id
            }
            None => AssignmentRepo::create(&state.pool, &record).await?.id,
        };
        added.push(record.into_record(id));
    }
    Ok((StatusCode::CREATED, Json(AddedResponse { added })))
}
