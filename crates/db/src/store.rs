//! The storage seam between HTTP handlers and a backend.
//!
//! Every method is a single independent operation. Nothing spans calls, so a
//! caller that reads and then writes can observe or cause lost updates.

use std::sync::Arc;

use async_trait::async_trait;
use taskboard_core::project::{Project, ProjectCredentials, UpdateProject};
use taskboard_core::resource::{CreateResource, Resource, UpdateResource};
use taskboard_core::task::{CreateTask, Task, UpdateTask};

/// Failure of a storage backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A query or connection error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A stored row could not be turned back into a document.
    #[error("Corrupt record: {0}")]
    Corrupt(String),

    /// The backend is not accepting requests.
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Shared handle to whichever backend the server was started with.
pub type SharedStore = Arc<dyn Store>;

/// Persistence operations for projects, their resources, and tasks.
///
/// Operations addressed by `project_id` act on the earliest created project
/// with that `projectId`. Boolean results are `true` only when stored data
/// actually changed.
#[async_trait]
pub trait Store: Send + Sync {
    /// Short backend name for logs and the health endpoint.
    fn backend(&self) -> &'static str;

    async fn health_check(&self) -> Result<(), StoreError>;

    // --- projects ---

    /// Insert a new project with no users and no resources.
    async fn create_project(&self, input: &ProjectCredentials) -> Result<Project, StoreError>;

    /// Exact (projectId, password) match.
    async fn join_project(
        &self,
        input: &ProjectCredentials,
    ) -> Result<Option<Project>, StoreError>;

    async fn find_project(&self, project_id: &str) -> Result<Option<Project>, StoreError>;

    /// Add `username` to the project's user set.
    async fn add_user(&self, project_id: &str, username: &str) -> Result<bool, StoreError>;

    async fn update_project(
        &self,
        project_id: &str,
        input: &UpdateProject,
    ) -> Result<bool, StoreError>;

    // --- resources ---

    /// `None` if the project does not exist.
    async fn list_resources(&self, project_id: &str)
        -> Result<Option<Vec<Resource>>, StoreError>;

    /// `None` if the project does not exist.
    async fn add_resource(
        &self,
        project_id: &str,
        input: &CreateResource,
    ) -> Result<Option<Resource>, StoreError>;

    async fn update_resource(
        &self,
        project_id: &str,
        resource_id: &str,
        input: &UpdateResource,
    ) -> Result<bool, StoreError>;

    async fn delete_resource(&self, project_id: &str, resource_id: &str)
        -> Result<bool, StoreError>;

    // --- tasks ---

    async fn create_task(&self, input: &CreateTask) -> Result<Task, StoreError>;

    /// Tasks whose `projectId` matches, in no particular order.
    async fn list_tasks(&self, project_id: &str) -> Result<Vec<Task>, StoreError>;

    async fn find_task(&self, task_id: &str) -> Result<Option<Task>, StoreError>;

    async fn update_task(&self, task_id: &str, input: &UpdateTask) -> Result<bool, StoreError>;

    async fn delete_task(&self, task_id: &str) -> Result<bool, StoreError>;
}
