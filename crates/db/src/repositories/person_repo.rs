//! Repository for the `people` table.

use planner_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::person::{Person, PersonInput};

/// Column list shared across queries.
const COLUMNS: &str = "id, name, role";

/// Provides CRUD operations and name resolution for people.
pub struct PersonRepo;

impl PersonRepo {
    /// List all people.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Person>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM people");
        sqlx::query_as::<_, Person>(&query).fetch_all(pool).await
    }

    /// Insert a new person, returning the created row.
    pub async fn create(pool: &SqlitePool, input: &PersonInput) -> Result<Person, sqlx::Error> {
        let query = format!("INSERT INTO people (name, role) VALUES (?, ?) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Person>(&query)
            .bind(&input.name)
            .bind(&input.role)
            .fetch_one(pool)
            .await
    }

    /// Full-field update. A missing row is not an error; the statement
    /// simply affects zero rows.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &PersonInput,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE people SET name = ?, role = ? WHERE id = ?")
            .bind(&input.name)
            .bind(&input.role)
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Delete a person and, first, every assignment referencing them.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM assignments WHERE person_id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        sqlx::query("DELETE FROM people WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Resolve a person name to an id, case-insensitively.
    ///
    /// When several rows match, the first in store order wins.
    pub async fn find_id_by_name(
        pool: &SqlitePool,
        name: &str,
    ) -> Result<Option<DbId>, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>("SELECT id FROM people WHERE LOWER(name) = LOWER(?)")
            .bind(name)
            .fetch_optional(pool)
            .await
    }
}
