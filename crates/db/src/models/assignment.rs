//! Assignment model, canonical record, and response shapes.

use planner_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `assignments` table. List responses expose this raw shape
/// (snake_case column names).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Assignment {
    pub id: DbId,
    pub person_id: DbId,
    pub project_id: DbId,
    pub start_date: String,
    pub end_date: String,
    pub percentage: i64,
}

/// The canonical, fully-resolved form of an assignment payload: ids instead
/// of names, explicit dates instead of a period index, percentage defaulted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalAssignment {
    pub person_id: DbId,
    pub project_id: DbId,
    pub start_date: String,
    pub end_date: String,
    pub percentage: i64,
}

impl CanonicalAssignment {
    /// Attach a row id, producing the camelCase response record.
    pub fn into_record(self, id: DbId) -> AssignmentRecord {
        AssignmentRecord {
            id,
            person_id: self.person_id,
            project_id: self.project_id,
            start_date: self.start_date,
            end_date: self.end_date,
            percentage: self.percentage,
        }
    }
}

/// Response shape for created/updated assignments (camelCase keys).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentRecord {
    pub id: DbId,
    pub person_id: DbId,
    pub project_id: DbId,
    pub start_date: String,
    pub end_date: String,
    pub percentage: i64,
}
