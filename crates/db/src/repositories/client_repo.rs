//! Repository for the `clients` table.

use planner_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::client::{Client, ClientInput};

/// Column list shared across queries.
const COLUMNS: &str = "id, name";

/// Provides CRUD operations and name resolution for clients.
pub struct ClientRepo;

impl ClientRepo {
    /// List all clients.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Client>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM clients");
        sqlx::query_as::<_, Client>(&query).fetch_all(pool).await
    }

    /// Insert a new client, returning the created row.
    pub async fn create(pool: &SqlitePool, input: &ClientInput) -> Result<Client, sqlx::Error> {
        let query = format!("INSERT INTO clients (name) VALUES (?) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Client>(&query)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// Full-field update.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &ClientInput,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE clients SET name = ? WHERE id = ?")
            .bind(&input.name)
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Delete a client and everything under it, deepest first: the
    /// assignments of each of the client's projects, then the projects,
    /// then the client itself.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<(), sqlx::Error> {
        let project_ids =
            sqlx::query_scalar::<_, DbId>("SELECT id FROM projects WHERE client_id = ?")
                .bind(id)
                .fetch_all(pool)
                .await?;

        for project_id in project_ids {
            sqlx::query("DELETE FROM assignments WHERE project_id = ?")
                .bind(project_id)
                .execute(pool)
                .await?;
        }

        sqlx::query("DELETE FROM projects WHERE client_id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        sqlx::query("DELETE FROM clients WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Resolve a client name to an id, case-insensitively.
    pub async fn find_id_by_name(
        pool: &SqlitePool,
        name: &str,
    ) -> Result<Option<DbId>, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>("SELECT id FROM clients WHERE LOWER(name) = LOWER(?)")
            .bind(name)
            .fetch_optional(pool)
            .await
    }
}
