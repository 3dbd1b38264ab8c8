//! Repository for the `project_resources` table.
//!
//! Resources are addressed individually by `(project_ref, id)`, so concurrent
//! edits to different resources of one project never overwrite each other.

use sqlx::PgPool;
use taskboard_core::resource::{CreateResource, UpdateResource};
use taskboard_core::types::new_doc_id;

use crate::models::resource::ResourceRow;

const COLUMNS: &str = "id, name, value";

/// Provides keyed CRUD operations for project resources.
pub struct ResourceRepo;

impl ResourceRepo {
    /// Resources of one project in insertion order.
    pub async fn list(pool: &PgPool, project_ref: &str) -> Result<Vec<ResourceRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM project_resources WHERE project_ref = $1 ORDER BY position"
        );
        sqlx::query_as::<_, ResourceRow>(&query)
            .bind(project_ref)
            .fetch_all(pool)
            .await
    }

    /// Append a resource under a freshly generated id.
    pub async fn create(
        pool: &PgPool,
        project_ref: &str,
        input: &CreateResource,
    ) -> Result<ResourceRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO project_resources (project_ref, id, name, value)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ResourceRow>(&query)
            .bind(project_ref)
            .bind(new_doc_id())
            .bind(&input.name)
            .bind(&input.value)
            .fetch_one(pool)
            .await
    }

    /// Update one resource. Returns `true` only if a stored value changed.
    pub async fn update(
        pool: &PgPool,
        project_ref: &str,
        id: &str,
        input: &UpdateResource,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE project_resources SET
                name = COALESCE($3, name),
                value = COALESCE($4, value)
             WHERE project_ref = $1 AND id = $2
               AND (name, value) IS DISTINCT FROM (COALESCE($3, name), COALESCE($4, value))",
        )
        .bind(project_ref)
        .bind(id)
        .bind(&input.name)
        .bind(&input.value)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete one resource. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, project_ref: &str, id: &str) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("DELETE FROM project_resources WHERE project_ref = $1 AND id = $2")
                .bind(project_ref)
                .bind(id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }
}
