//! Project row model.

use sqlx::FromRow;
use taskboard_core::project::Project;
use taskboard_core::resource::Resource;
use taskboard_core::types::{DocId, Timestamp};

/// A row from the `projects` table. Users and resources live in child tables.
#[derive(Debug, Clone, FromRow)]
pub struct ProjectRow {
    pub id: DocId,
    pub project_id: String,
    pub password: String,
    pub created_at: Timestamp,
}

impl ProjectRow {
    /// Assemble the full document from this row and its child rows.
    pub fn into_project(self, users: Vec<String>, resources: Vec<Resource>) -> Project {
        Project {
            id: self.id,
            project_id: self.project_id,
            password: self.password,
            users,
            resources,
            created_at: self.created_at,
        }
    }
}
