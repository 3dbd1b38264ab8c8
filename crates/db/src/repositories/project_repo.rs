//! Repository for the `projects` table.

use sqlx::PgPool;
use taskboard_core::project::{dedupe_users, ProjectCredentials, UpdateProject};
use taskboard_core::resource::{normalize_resources, Resource};
use taskboard_core::types::new_doc_id;

use crate::models::project::ProjectRow;
use crate::models::resource::ResourceRow;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, password, created_at";

/// Provides create/lookup/update operations for projects. Projects are never deleted.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    ///
    /// No uniqueness check is made on `project_id`.
    pub async fn create(pool: &PgPool, input: &ProjectCredentials) -> Result<ProjectRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (id, project_id, password)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProjectRow>(&query)
            .bind(new_doc_id())
            .bind(&input.project_id)
            .bind(&input.password)
            .fetch_one(pool)
            .await
    }

    /// Earliest created project with the given `project_id`.
    pub async fn find_by_project_id(
        pool: &PgPool,
        project_id: &str,
    ) -> Result<Option<ProjectRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects WHERE project_id = $1
             ORDER BY created_at, id LIMIT 1"
        );
        sqlx::query_as::<_, ProjectRow>(&query)
            .bind(project_id)
            .fetch_optional(pool)
            .await
    }

    /// Earliest created project matching both `project_id` and `password` exactly.
    pub async fn find_by_credentials(
        pool: &PgPool,
        input: &ProjectCredentials,
    ) -> Result<Option<ProjectRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects WHERE project_id = $1 AND password = $2
             ORDER BY created_at, id LIMIT 1"
        );
        sqlx::query_as::<_, ProjectRow>(&query)
            .bind(&input.project_id)
            .bind(&input.password)
            .fetch_optional(pool)
            .await
    }

    /// Apply a partial update inside one transaction.
    ///
    /// `users` and `resources` replace the stored sequences wholesale. Returns
    /// `true` if anything actually changed.
    pub async fn update(
        pool: &PgPool,
        project_ref: &str,
        input: &UpdateProject,
    ) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let mut changed = false;

        if let Some(password) = &input.password {
            let result = sqlx::query(
                "UPDATE projects SET password = $2
                 WHERE id = $1 AND password IS DISTINCT FROM $2",
            )
            .bind(project_ref)
            .bind(password)
            .execute(&mut *tx)
            .await?;
            changed |= result.rows_affected() > 0;
        }

        if let Some(users) = &input.users {
            let users = dedupe_users(users);
            let current = sqlx::query_scalar::<_, String>(
                "SELECT username FROM project_users WHERE project_ref = $1 ORDER BY position",
            )
            .bind(project_ref)
            .fetch_all(&mut *tx)
            .await?;

            if current != users {
                sqlx::query("DELETE FROM project_users WHERE project_ref = $1")
                    .bind(project_ref)
                    .execute(&mut *tx)
                    .await?;
                for username in &users {
                    sqlx::query("INSERT INTO project_users (project_ref, username) VALUES ($1, $2)")
                        .bind(project_ref)
                        .bind(username)
                        .execute(&mut *tx)
                        .await?;
                }
                changed = true;
            }
        }

        if let Some(resources) = &input.resources {
            let resources = normalize_resources(resources);
            let current: Vec<Resource> = sqlx::query_as::<_, ResourceRow>(
                "SELECT id, name, value FROM project_resources
                 WHERE project_ref = $1 ORDER BY position",
            )
            .bind(project_ref)
            .fetch_all(&mut *tx)
            .await?
            .into_iter()
            .map(Resource::from)
            .collect();

            if current != resources {
                sqlx::query("DELETE FROM project_resources WHERE project_ref = $1")
                    .bind(project_ref)
                    .execute(&mut *tx)
                    .await?;
                for resource in &resources {
                    sqlx::query(
                        "INSERT INTO project_resources (project_ref, id, name, value)
                         VALUES ($1, $2, $3, $4)",
                    )
                    .bind(project_ref)
                    .bind(&resource.id)
                    .bind(&resource.name)
                    .bind(&resource.value)
                    .execute(&mut *tx)
                    .await?;
                }
                changed = true;
            }
        }

        tx.commit().await?;
        Ok(changed)
    }
}
