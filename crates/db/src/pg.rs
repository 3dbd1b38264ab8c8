//! PostgreSQL-backed [`Store`].

use async_trait::async_trait;
use taskboard_core::project::{Project, ProjectCredentials, UpdateProject};
use taskboard_core::resource::{CreateResource, Resource, UpdateResource};
use taskboard_core::task::{CreateTask, Task, UpdateTask};
use taskboard_core::types::new_doc_id;

use crate::models::project::ProjectRow;
use crate::repositories::{ProjectRepo, ProjectUserRepo, ResourceRepo, TaskRepo};
use crate::store::{Store, StoreError};
use crate::DbPool;

/// Store backed by a sqlx connection pool.
#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    /// Attach users and resources to a project row.
    async fn load(&self, row: ProjectRow) -> Result<Project, StoreError> {
        let users = ProjectUserRepo::list(&self.pool, &row.id).await?;
        let resources = ResourceRepo::list(&self.pool, &row.id)
            .await?
            .into_iter()
            .map(Resource::from)
            .collect();
        Ok(row.into_project(users, resources))
    }

    /// Internal key of the earliest project with this `project_id`.
    async fn project_ref(&self, project_id: &str) -> Result<Option<String>, StoreError> {
        Ok(ProjectRepo::find_by_project_id(&self.pool, project_id)
            .await?
            .map(|row| row.id))
    }
}

#[async_trait]
impl Store for PgStore {
    fn backend(&self) -> &'static str {
        "postgres"
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        crate::health_check(&self.pool).await?;
        Ok(())
    }

    async fn create_project(&self, input: &ProjectCredentials) -> Result<Project, StoreError> {
        let row = ProjectRepo::create(&self.pool, input).await?;
        tracing::debug!(id = %row.id, project_id = %row.project_id, "Inserted project");
        Ok(row.into_project(Vec::new(), Vec::new()))
    }

    async fn join_project(
        &self,
        input: &ProjectCredentials,
    ) -> Result<Option<Project>, StoreError> {
        match ProjectRepo::find_by_credentials(&self.pool, input).await? {
            Some(row) => Ok(Some(self.load(row).await?)),
            None => Ok(None),
        }
    }

    async fn find_project(&self, project_id: &str) -> Result<Option<Project>, StoreError> {
        match ProjectRepo::find_by_project_id(&self.pool, project_id).await? {
            Some(row) => Ok(Some(self.load(row).await?)),
            None => Ok(None),
        }
    }

    async fn add_user(&self, project_id: &str, username: &str) -> Result<bool, StoreError> {
        let Some(project_ref) = self.project_ref(project_id).await? else {
            return Ok(false);
        };
        Ok(ProjectUserRepo::add(&self.pool, &project_ref, username).await?)
    }

    async fn update_project(
        &self,
        project_id: &str,
        input: &UpdateProject,
    ) -> Result<bool, StoreError> {
        let Some(project_ref) = self.project_ref(project_id).await? else {
            tracing::debug!(project_id, "Update skipped, no such project");
            return Ok(false);
        };
        let changed = ProjectRepo::update(&self.pool, &project_ref, input).await?;
        tracing::debug!(project_id, project_ref = %project_ref, changed, "Updated project");
        Ok(changed)
    }

    async fn list_resources(
        &self,
        project_id: &str,
    ) -> Result<Option<Vec<Resource>>, StoreError> {
        let Some(project_ref) = self.project_ref(project_id).await? else {
            return Ok(None);
        };
        let rows = ResourceRepo::list(&self.pool, &project_ref).await?;
        Ok(Some(rows.into_iter().map(Resource::from).collect()))
    }

    async fn add_resource(
        &self,
        project_id: &str,
        input: &CreateResource,
    ) -> Result<Option<Resource>, StoreError> {
        let Some(project_ref) = self.project_ref(project_id).await? else {
            return Ok(None);
        };
        let row = ResourceRepo::create(&self.pool, &project_ref, input).await?;
        Ok(Some(row.into()))
    }

    async fn update_resource(
        &self,
        project_id: &str,
        resource_id: &str,
        input: &UpdateResource,
    ) -> Result<bool, StoreError> {
        let Some(project_ref) = self.project_ref(project_id).await? else {
            return Ok(false);
        };
        Ok(ResourceRepo::update(&self.pool, &project_ref, resource_id, input).await?)
    }

    async fn delete_resource(
        &self,
        project_id: &str,
        resource_id: &str,
    ) -> Result<bool, StoreError> {
        let Some(project_ref) = self.project_ref(project_id).await? else {
            return Ok(false);
        };
        Ok(ResourceRepo::delete(&self.pool, &project_ref, resource_id).await?)
    }

    async fn create_task(&self, input: &CreateTask) -> Result<Task, StoreError> {
        let task = input.clone().into_task(new_doc_id());
        TaskRepo::insert(&self.pool, &task).await?.try_into()
    }

    async fn list_tasks(&self, project_id: &str) -> Result<Vec<Task>, StoreError> {
        TaskRepo::list_by_project(&self.pool, project_id)
            .await?
            .into_iter()
            .map(Task::try_from)
            .collect()
    }

    async fn find_task(&self, task_id: &str) -> Result<Option<Task>, StoreError> {
        TaskRepo::find_by_id(&self.pool, task_id)
            .await?
            .map(Task::try_from)
            .transpose()
    }

    async fn update_task(&self, task_id: &str, input: &UpdateTask) -> Result<bool, StoreError> {
        Ok(TaskRepo::update(&self.pool, task_id, input).await?)
    }

    async fn delete_task(&self, task_id: &str) -> Result<bool, StoreError> {
        Ok(TaskRepo::delete(&self.pool, task_id).await?)
    }
}
