//! Process-local [`Store`] used when no database is configured, and in tests.
//!
//! Each operation holds the lock for its whole duration, so single-document
//! writes are atomic just as they are in the Postgres backend.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use taskboard_core::project::{Project, ProjectCredentials, UpdateProject};
use taskboard_core::resource::{CreateResource, Resource, UpdateResource};
use taskboard_core::task::{CreateTask, Task, UpdateTask};
use taskboard_core::types::new_doc_id;

use crate::store::{Store, StoreError};

#[derive(Default)]
struct Collections {
    /// Creation order; the first match for a `project_id` is the earliest.
    projects: Vec<Project>,
    /// Insertion order, matching `created_at` ordering in Postgres.
    tasks: Vec<Task>,
}

impl Collections {
    fn project_mut(&mut self, project_id: &str) -> Option<&mut Project> {
        self.projects.iter_mut().find(|p| p.project_id == project_id)
    }
}

/// In-memory document store. Data is lost when the process exits.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Collections>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store for MemoryStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(())
    }

    async fn create_project(&self, input: &ProjectCredentials) -> Result<Project, StoreError> {
        let project = Project {
            id: new_doc_id(),
            project_id: input.project_id.clone(),
            password: input.password.clone(),
            users: Vec::new(),
            resources: Vec::new(),
            created_at: Utc::now(),
        };
        self.inner.write().await.projects.push(project.clone());
        Ok(project)
    }

    async fn join_project(
        &self,
        input: &ProjectCredentials,
    ) -> Result<Option<Project>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner
            .projects
            .iter()
            .find(|p| p.project_id == input.project_id && p.password == input.password)
            .cloned())
    }

    async fn find_project(&self, project_id: &str) -> Result<Option<Project>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner
            .projects
            .iter()
            .find(|p| p.project_id == project_id)
            .cloned())
    }

    async fn add_user(&self, project_id: &str, username: &str) -> Result<bool, StoreError> {
        let mut inner = self.inner.write().await;
        let Some(project) = inner.project_mut(project_id) else {
            return Ok(false);
        };
        if project.users.iter().any(|u| u == username) {
            return Ok(false);
        }
        project.users.push(username.to_string());
        Ok(true)
    }

    async fn update_project(
        &self,
        project_id: &str,
        input: &UpdateProject,
    ) -> Result<bool, StoreError> {
        let mut inner = self.inner.write().await;
        Ok(inner
            .project_mut(project_id)
            .is_some_and(|project| input.apply(project)))
    }

    async fn list_resources(
        &self,
        project_id: &str,
    ) -> Result<Option<Vec<Resource>>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner
            .projects
            .iter()
            .find(|p| p.project_id == project_id)
            .map(|p| p.resources.clone()))
    }

    async fn add_resource(
        &self,
        project_id: &str,
        input: &CreateResource,
    ) -> Result<Option<Resource>, StoreError> {
        let mut inner = self.inner.write().await;
        let Some(project) = inner.project_mut(project_id) else {
            return Ok(None);
        };
        let resource = input.clone().into_resource(new_doc_id());
        project.resources.push(resource.clone());
        Ok(Some(resource))
    }

    async fn update_resource(
        &self,
        project_id: &str,
        resource_id: &str,
        input: &UpdateResource,
    ) -> Result<bool, StoreError> {
        let mut inner = self.inner.write().await;
        Ok(inner
            .project_mut(project_id)
            .and_then(|p| p.resources.iter_mut().find(|r| r.id == resource_id))
            .is_some_and(|resource| input.apply(resource)))
    }

    async fn delete_resource(
        &self,
        project_id: &str,
        resource_id: &str,
    ) -> Result<bool, StoreError> {
        let mut inner = self.inner.write().await;
        let Some(project) = inner.project_mut(project_id) else {
            return Ok(false);
        };
        let before = project.resources.len();
        project.resources.retain(|r| r.id != resource_id);
        Ok(project.resources.len() != before)
    }

    async fn create_task(&self, input: &CreateTask) -> Result<Task, StoreError> {
        let task = input.clone().into_task(new_doc_id());
        self.inner.write().await.tasks.push(task.clone());
        Ok(task)
    }

    async fn list_tasks(&self, project_id: &str) -> Result<Vec<Task>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner
            .tasks
            .iter()
            .filter(|t| t.project_id == project_id)
            .cloned()
            .collect())
    }

    async fn find_task(&self, task_id: &str) -> Result<Option<Task>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.tasks.iter().find(|t| t.id == task_id).cloned())
    }

    async fn update_task(&self, task_id: &str, input: &UpdateTask) -> Result<bool, StoreError> {
        let mut inner = self.inner.write().await;
        Ok(inner
            .tasks
            .iter_mut()
            .find(|t| t.id == task_id)
            .is_some_and(|task| input.apply(task)))
    }

    async fn delete_task(&self, task_id: &str) -> Result<bool, StoreError> {
        let mut inner = self.inner.write().await;
        let before = inner.tasks.len();
        inner.tasks.retain(|t| t.id != task_id);
        Ok(inner.tasks.len() != before)
    }
}
