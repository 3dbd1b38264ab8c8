//! Project resource row model.

use sqlx::FromRow;
use taskboard_core::resource::Resource;
use taskboard_core::types::DocId;

/// A row from the `project_resources` table.
#[derive(Debug, Clone, FromRow)]
pub struct ResourceRow {
    pub id: DocId,
    pub name: String,
    pub value: String,
}

impl From<ResourceRow> for Resource {
    fn from(row: ResourceRow) -> Self {
        Resource {
            id: row.id,
            name: row.name,
            value: row.value,
        }
    }
}
