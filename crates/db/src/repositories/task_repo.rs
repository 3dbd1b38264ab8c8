//! Repository for the `tasks` table.

use sqlx::PgPool;
use taskboard_core::task::{Task, UpdateTask};

use crate::models::task::TaskRow;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, project_id, title, description, deadline, assigned_user, status, color";

/// Provides CRUD operations for tasks.
pub struct TaskRepo;

impl TaskRepo {
    /// Insert a fully built task, returning the stored row.
    pub async fn insert(pool: &PgPool, task: &Task) -> Result<TaskRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO tasks (id, project_id, title, description, deadline, assigned_user, status, color)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TaskRow>(&query)
            .bind(&task.id)
            .bind(&task.project_id)
            .bind(&task.title)
            .bind(&task.description)
            .bind(&task.deadline)
            .bind(&task.assigned_user)
            .bind(task.status.as_str())
            .bind(&task.color)
            .fetch_one(pool)
            .await
    }

    /// Find a task by id.
    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<TaskRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks WHERE id = $1");
        sqlx::query_as::<_, TaskRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// All tasks of one project, oldest first.
    pub async fn list_by_project(pool: &PgPool, project_id: &str) -> Result<Vec<TaskRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM tasks WHERE project_id = $1 ORDER BY created_at, id"
        );
        sqlx::query_as::<_, TaskRow>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Update a task. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `true` only if the stored row actually changed; a missing id
    /// or an update that rewrites identical values both yield `false`.
    pub async fn update(pool: &PgPool, id: &str, input: &UpdateTask) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE tasks SET
                project_id = COALESCE($2, project_id),
                title = COALESCE($3, title),
                description = COALESCE($4, description),
                deadline = COALESCE($5, deadline),
                assigned_user = COALESCE($6, assigned_user),
                status = COALESCE($7, status),
                color = COALESCE($8, color)
             WHERE id = $1
               AND (project_id, title, description, deadline, assigned_user, status, color)
                   IS DISTINCT FROM
                   (COALESCE($2, project_id), COALESCE($3, title), COALESCE($4, description),
                    COALESCE($5, deadline), COALESCE($6, assigned_user), COALESCE($7, status),
                    COALESCE($8, color))",
        )
        .bind(id)
        .bind(&input.project_id)
        .bind(&input.title)
        .bind(&input.description)
        .bind(&input.deadline)
        .bind(&input.assigned_user)
        .bind(input.status.map(|s| s.as_str()))
        .bind(&input.color)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a task by id. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
