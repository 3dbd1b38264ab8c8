//! Task row model.

use sqlx::FromRow;
use taskboard_core::status::TaskStatus;
use taskboard_core::task::Task;
use taskboard_core::types::DocId;

use crate::store::StoreError;

/// A row from the `tasks` table. `status` is stored as its wire name.
#[derive(Debug, Clone, FromRow)]
pub struct TaskRow {
    pub id: DocId,
    pub project_id: String,
    pub title: String,
    pub description: String,
    pub deadline: String,
    pub assigned_user: String,
    pub status: String,
    pub color: Option<String>,
}

impl TryFrom<TaskRow> for Task {
    type Error = StoreError;

    fn try_from(row: TaskRow) -> Result<Self, Self::Error> {
        let status: TaskStatus = row
            .status
            .parse()
            .map_err(|e| {
                tracing::error!(task_id = %row.id, status = %row.status, "Unreadable task status");
                StoreError::Corrupt(format!("task {}: {e}", row.id))
            })?;
        Ok(Task {
            id: row.id,
            project_id: row.project_id,
            title: row.title,
            description: row.description,
            deadline: row.deadline,
            assigned_user: row.assigned_user,
            status,
            color: row.color,
        })
    }
}
