//! In-process [`BoardGateway`] for unit tests, backed by the server's
//! [`MemoryStore`] so store semantics live in one place.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use taskboard_core::project::{Project, ProjectCredentials};
use taskboard_core::resource::{CreateResource, Resource, UpdateResource};
use taskboard_core::task::{CreateTask, Task, UpdateTask};
use taskboard_db::{MemoryStore, Store, StoreError};

use crate::api::BoardGateway;
use crate::error::ClientError;

/// Shared handle; clones see the same store, counter and failure switch.
#[derive(Clone, Default)]
pub struct FakeGateway {
    store: Arc<MemoryStore>,
    calls: Arc<AtomicUsize>,
    offline: Arc<AtomicBool>,
}

impl FakeGateway {
    /// Number of gateway calls made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Make every later call fail with a 500.
    pub fn fail_everything(&self) {
        self.offline.store(true, Ordering::SeqCst);
    }

    /// Read a task straight from the store, bypassing the counter.
    pub async fn task(&self, task_id: &str) -> Option<Task> {
        self.store.find_task(task_id).await.unwrap()
    }

    pub async fn seed_project(&self, project_id: &str) {
        let credentials = ProjectCredentials {
            project_id: project_id.into(),
            password: "pw".into(),
        };
        self.store.create_project(&credentials).await.unwrap();
    }

    fn call(&self) -> Result<&MemoryStore, ClientError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.offline.load(Ordering::SeqCst) {
            return Err(ClientError::Api {
                status: 500,
                message: "offline".into(),
            });
        }
        Ok(&self.store)
    }
}

fn server_error(err: StoreError) -> ClientError {
    ClientError::Api {
        status: 500,
        message: err.to_string(),
    }
}

fn no_project(project_id: &str) -> ClientError {
    ClientError::Api {
        status: 404,
        message: format!("Project with id {project_id} not found"),
    }
}

#[async_trait]
impl BoardGateway for FakeGateway {
    async fn create_project(
        &self,
        credentials: &ProjectCredentials,
    ) -> Result<Project, ClientError> {
        self.call()?
            .create_project(credentials)
            .await
            .map_err(server_error)
    }

    async fn join_project(
        &self,
        credentials: &ProjectCredentials,
    ) -> Result<Option<Project>, ClientError> {
        self.call()?
            .join_project(credentials)
            .await
            .map_err(server_error)
    }

    async fn add_user(&self, project_id: &str, username: &str) -> Result<bool, ClientError> {
        self.call()?
            .add_user(project_id, username)
            .await
            .map_err(server_error)
    }

    async fn list_resources(&self, project_id: &str) -> Result<Vec<Resource>, ClientError> {
        self.call()?
            .list_resources(project_id)
            .await
            .map_err(server_error)?
            .ok_or_else(|| no_project(project_id))
    }

    async fn add_resource(
        &self,
        project_id: &str,
        input: &CreateResource,
    ) -> Result<Resource, ClientError> {
        self.call()?
            .add_resource(project_id, input)
            .await
            .map_err(server_error)?
            .ok_or_else(|| no_project(project_id))
    }

    async fn update_resource(
        &self,
        project_id: &str,
        resource_id: &str,
        input: &UpdateResource,
    ) -> Result<bool, ClientError> {
        self.call()?
            .update_resource(project_id, resource_id, input)
            .await
            .map_err(server_error)
    }

    async fn delete_resource(
        &self,
        project_id: &str,
        resource_id: &str,
    ) -> Result<bool, ClientError> {
        self.call()?
            .delete_resource(project_id, resource_id)
            .await
            .map_err(server_error)
    }

    async fn list_tasks(&self, project_id: &str) -> Result<Vec<Task>, ClientError> {
        self.call()?
            .list_tasks(project_id)
            .await
            .map_err(server_error)
    }

    async fn create_task(&self, input: &CreateTask) -> Result<Task, ClientError> {
        self.call()?.create_task(input).await.map_err(server_error)
    }

    async fn update_task(&self, task_id: &str, update: &UpdateTask) -> Result<bool, ClientError> {
        self.call()?
            .update_task(task_id, update)
            .await
            .map_err(server_error)
    }

    async fn delete_task(&self, task_id: &str) -> Result<bool, ClientError> {
        self.call()?.delete_task(task_id).await.map_err(server_error)
    }
}
