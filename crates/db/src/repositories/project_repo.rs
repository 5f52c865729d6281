//! Repository for the `projects` table.

use planner_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::project::{Project, ProjectInput};

/// Column list shared across queries.
const COLUMNS: &str = "id, name, client_id";

/// Provides CRUD operations and name resolution for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// List all projects.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects");
        sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
    }

    /// Insert a new project, returning the created row.
    pub async fn create(pool: &SqlitePool, input: &ProjectInput) -> Result<Project, sqlx::Error> {
        let query =
            format!("INSERT INTO projects (name, client_id) VALUES (?, ?) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.name)
            .bind(input.client_id)
            .fetch_one(pool)
            .await
    }

    /// Full-field update.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &ProjectInput,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE projects SET name = ?, client_id = ? WHERE id = ?")
            .bind(&input.name)
            .bind(input.client_id)
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Delete a project and, first, every assignment referencing it.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM assignments WHERE project_id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        sqlx::query("DELETE FROM projects WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Resolve a project name to an id, case-insensitively, scoped to one
    /// client. A project name is only unique within its client.
    pub async fn find_id_by_name_and_client(
        pool: &SqlitePool,
        name: &str,
        client_id: DbId,
    ) -> Result<Option<DbId>, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "SELECT id FROM projects WHERE LOWER(name) = LOWER(?) AND client_id = ?",
        )
        .bind(name)
        .bind(client_id)
        .fetch_optional(pool)
        .await
    }
}
