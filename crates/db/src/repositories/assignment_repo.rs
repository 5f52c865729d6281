//! Repository for the `assignments` table.

use planner_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::assignment::{Assignment, CanonicalAssignment};

/// Column list shared across queries.
const COLUMNS: &str = "id, person_id, project_id, start_date, end_date, percentage";

/// Provides CRUD operations and natural-key lookup for assignments.
pub struct AssignmentRepo;

impl AssignmentRepo {
    /// List all assignments.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Assignment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM assignments");
        sqlx::query_as::<_, Assignment>(&query).fetch_all(pool).await
    }

    /// Insert a canonical record, returning the created row.
    pub async fn create(
        pool: &SqlitePool,
        record: &CanonicalAssignment,
    ) -> Result<Assignment, sqlx::Error> {
        let query = format!(
            "INSERT INTO assignments (person_id, project_id, start_date, end_date, percentage) \
             VALUES (?, ?, ?, ?, ?) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Assignment>(&query)
            .bind(record.person_id)
            .bind(record.project_id)
            .bind(&record.start_date)
            .bind(&record.end_date)
            .bind(record.percentage)
            .fetch_one(pool)
            .await
    }

    /// Full-field update with an already-canonical record.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        record: &CanonicalAssignment,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE assignments \
             SET person_id = ?, project_id = ?, start_date = ?, end_date = ?, percentage = ? \
             WHERE id = ?",
        )
        .bind(record.person_id)
        .bind(record.project_id)
        .bind(&record.start_date)
        .bind(&record.end_date)
        .bind(record.percentage)
        .bind(id)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Delete an assignment row.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM assignments WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Find an assignment by its natural key: the exact
    /// `(person, project, start, end)` tuple. Used by bulk import to make
    /// repeated submissions update percentage instead of duplicating rows.
    pub async fn find_existing(
        pool: &SqlitePool,
        person_id: DbId,
        project_id: DbId,
        start_date: &str,
        end_date: &str,
    ) -> Result<Option<DbId>, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "SELECT id FROM assignments \
             WHERE person_id = ? AND project_id = ? AND start_date = ? AND end_date = ?",
        )
        .bind(person_id)
        .bind(project_id)
        .bind(start_date)
        .bind(end_date)
        .fetch_optional(pool)
        .await
    }
}
