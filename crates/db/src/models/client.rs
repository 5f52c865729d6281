//! Client model and DTOs.

use planner_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `clients` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Client {
    pub id: DbId,
    pub name: String,
}

/// Input for creating or fully replacing a client.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientInput {
    pub name: String,
}
