//! Person model and DTOs.

use planner_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `people` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Person {
    pub id: DbId,
    pub name: String,
    pub role: String,
}

/// Input for creating or fully replacing a person. Updates carry every
/// field; there is no partial patch.
#[derive(Debug, Clone, Deserialize)]
pub struct PersonInput {
    pub name: String,
    pub role: String,
}
