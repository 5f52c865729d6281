//! Project model and DTOs.
//!
//! A project always belongs to a client. List responses expose the raw row
//! (snake_case `client_id`); create/update responses echo the canonical
//! camelCase shape, matching the behavior clients already depend on.

use planner_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub name: String,
    pub client_id: DbId,
}

/// Input for creating or fully replacing a project. The snake_case alias is
/// accepted for older clients.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectInput {
    pub name: String,
    #[serde(rename = "clientId", alias = "client_id")]
    pub client_id: DbId,
}

/// Bulk-import row: the client may be referenced by id or by name.
#[derive(Debug, Clone, Deserialize)]
pub struct BulkProjectRow {
    pub name: String,
    #[serde(rename = "clientId", alias = "client_id")]
    pub client_id: Option<DbId>,
    #[serde(rename = "clientName", alias = "client_name")]
    pub client_name: Option<String>,
}

/// Response shape for created/updated projects (camelCase keys).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub id: DbId,
    pub name: String,
    pub client_id: DbId,
}

impl From<Project> for ProjectRecord {
    fn from(project: Project) -> Self {
        ProjectRecord {
            id: project.id,
            name: project.name,
            client_id: project.client_id,
        }
    }
}
