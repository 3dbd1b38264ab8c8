//! Repository for the `project_users` table.

use sqlx::PgPool;

/// Set-semantics membership of usernames in a project.
pub struct ProjectUserRepo;

impl ProjectUserRepo {
    /// Add a username. Returns `false` if it was already a member.
    pub async fn add(pool: &PgPool, project_ref: &str, username: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO project_users (project_ref, username) VALUES ($1, $2)
             ON CONFLICT (project_ref, username) DO NOTHING",
        )
        .bind(project_ref)
        .bind(username)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Usernames in the order they were added.
    pub async fn list(pool: &PgPool, project_ref: &str) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>(
            "SELECT username FROM project_users WHERE project_ref = $1 ORDER BY position",
        )
        .bind(project_ref)
        .fetch_all(pool)
        .await
    }
}
