//! REST client for the task board HTTP API.
//!
//! One method per endpoint, no caching, retry or batching. "Not found"
//! outcomes the server reports as 404 come back as `None`; everything else
//! non-2xx is a [`ClientError::Api`].

use async_trait::async_trait;
use reqwest::Url;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::json;

use taskboard_core::project::{Project, ProjectCredentials, UpdateProject};
use taskboard_core::resource::{CreateResource, Resource, UpdateResource};
use taskboard_core::task::{CreateTask, Task, UpdateTask};

use crate::error::ClientError;

/// Body of every `{ "success": bool }` response.
#[derive(Debug, Deserialize)]
struct SuccessBody {
    success: bool,
}

/// Body of every error response.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// HTTP client for one task board server.
#[derive(Clone)]
pub struct BoardApi {
    client: reqwest::Client,
    base_url: String,
}

impl BoardApi {
    /// Create a client for `base_url`, e.g. `http://localhost:3000` or
    /// `https://host/api`. A trailing slash is ignored.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join `segments` onto the base URL, percent-encoding each one so ids
    /// containing `/`, `?` or `#` stay a single path segment.
    fn url(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| ClientError::InvalidUrl(format!("{}: {e}", self.base_url)))?;
        url.path_segments_mut()
            .map_err(|()| ClientError::InvalidUrl(self.base_url.clone()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    // ---- projects ----

    /// `POST /project`
    pub async fn create_project(
        &self,
        credentials: &ProjectCredentials,
    ) -> Result<Project, ClientError> {
        let response = self
            .client
            .post(self.url(&["project"])?)
            .json(credentials)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// `POST /project/join`. `None` when no project matches.
    pub async fn join_project(
        &self,
        credentials: &ProjectCredentials,
    ) -> Result<Option<Project>, ClientError> {
        let response = self
            .client
            .post(self.url(&["project", "join"])?)
            .json(credentials)
            .send()
            .await?;
        Self::parse_optional(response).await
    }

    /// `GET /project/{project_id}`
    pub async fn get_project(&self, project_id: &str) -> Result<Option<Project>, ClientError> {
        let response = self
            .client
            .get(self.url(&["project", project_id])?)
            .send()
            .await?;
        Self::parse_optional(response).await
    }

    /// `POST /project/user`. `false` if the user was already a member.
    pub async fn add_user(&self, project_id: &str, username: &str) -> Result<bool, ClientError> {
        let response = self
            .client
            .post(self.url(&["project", "user"])?)
            .json(&json!({ "projectId": project_id, "username": username }))
            .send()
            .await?;
        Self::parse_success(response).await
    }

    /// `PATCH /project/{project_id}`
    pub async fn update_project(
        &self,
        project_id: &str,
        update: &UpdateProject,
    ) -> Result<bool, ClientError> {
        let response = self
            .client
            .patch(self.url(&["project", project_id])?)
            .json(update)
            .send()
            .await?;
        Self::parse_success(response).await
    }

    // ---- resources ----

    /// `GET /project/{project_id}/resources`
    pub async fn list_resources(&self, project_id: &str) -> Result<Vec<Resource>, ClientError> {
        let response = self
            .client
            .get(self.url(&["project", project_id, "resources"])?)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// `POST /project/{project_id}/resources`
    pub async fn add_resource(
        &self,
        project_id: &str,
        input: &CreateResource,
    ) -> Result<Resource, ClientError> {
        let response = self
            .client
            .post(self.url(&["project", project_id, "resources"])?)
            .json(input)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// `PATCH /project/{project_id}/resources/{resource_id}`
    pub async fn update_resource(
        &self,
        project_id: &str,
        resource_id: &str,
        input: &UpdateResource,
    ) -> Result<bool, ClientError> {
        let response = self
            .client
            .patch(self.url(&["project", project_id, "resources", resource_id])?)
            .json(input)
            .send()
            .await?;
        Self::parse_success(response).await
    }

    /// `DELETE /project/{project_id}/resources/{resource_id}`
    pub async fn delete_resource(
        &self,
        project_id: &str,
        resource_id: &str,
    ) -> Result<bool, ClientError> {
        let response = self
            .client
            .delete(self.url(&["project", project_id, "resources", resource_id])?)
            .send()
            .await?;
        Self::parse_success(response).await
    }

    // ---- tasks ----

    /// `GET /tasks/{project_id}`
    pub async fn list_tasks(&self, project_id: &str) -> Result<Vec<Task>, ClientError> {
        let response = self
            .client
            .get(self.url(&["tasks", project_id])?)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// `POST /task`
    pub async fn create_task(&self, input: &CreateTask) -> Result<Task, ClientError> {
        let response = self
            .client
            .post(self.url(&["task"])?)
            .json(input)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// `PATCH /task/{task_id}`
    pub async fn update_task(&self, task_id: &str, update: &UpdateTask) -> Result<bool, ClientError> {
        let response = self
            .client
            .patch(self.url(&["task", task_id])?)
            .json(update)
            .send()
            .await?;
        Self::parse_success(response).await
    }

    /// `DELETE /task/{task_id}`
    pub async fn delete_task(&self, task_id: &str) -> Result<bool, ClientError> {
        let response = self
            .client
            .delete(self.url(&["task", task_id])?)
            .send()
            .await?;
        Self::parse_success(response).await
    }

    // ---- private helpers ----

    /// Pass 2xx responses through; turn anything else into
    /// [`ClientError::Api`] carrying the server's `message`.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            let message = serde_json::from_str::<ErrorBody>(&body)
                .map(|b| b.message)
                .unwrap_or(body);
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response)
    }

    async fn parse_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }

    async fn parse_optional<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<Option<T>, ClientError> {
        match Self::parse_response(response).await {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.is_not_found() => Ok(None),
            Err(err) => Err(err),
        }
    }

    async fn parse_success(response: reqwest::Response) -> Result<bool, ClientError> {
        let body: SuccessBody = Self::parse_response(response).await?;
        Ok(body.success)
    }
}

/// The operations client state needs from the server.
///
/// [`BoardApi`] is the production implementation; the board, session and
/// resource manager are generic over this so they can run against any
/// backend.
#[async_trait]
pub trait BoardGateway: Send + Sync {
    async fn create_project(&self, credentials: &ProjectCredentials)
        -> Result<Project, ClientError>;
    async fn join_project(
        &self,
        credentials: &ProjectCredentials,
    ) -> Result<Option<Project>, ClientError>;
    async fn add_user(&self, project_id: &str, username: &str) -> Result<bool, ClientError>;

    async fn list_resources(&self, project_id: &str) -> Result<Vec<Resource>, ClientError>;
    async fn add_resource(
        &self,
        project_id: &str,
        input: &CreateResource,
    ) -> Result<Resource, ClientError>;
    async fn update_resource(
        &self,
        project_id: &str,
        resource_id: &str,
        input: &UpdateResource,
    ) -> Result<bool, ClientError>;
    async fn delete_resource(&self, project_id: &str, resource_id: &str)
        -> Result<bool, ClientError>;

    async fn list_tasks(&self, project_id: &str) -> Result<Vec<Task>, ClientError>;
    async fn create_task(&self, input: &CreateTask) -> Result<Task, ClientError>;
    async fn update_task(&self, task_id: &str, update: &UpdateTask) -> Result<bool, ClientError>;
    async fn delete_task(&self, task_id: &str) -> Result<bool, ClientError>;
}

#[async_trait]
impl BoardGateway for BoardApi {
    async fn create_project(
        &self,
        credentials: &ProjectCredentials,
    ) -> Result<Project, ClientError> {
        BoardApi::create_project(self, credentials).await
    }

    async fn join_project(
        &self,
        credentials: &ProjectCredentials,
    ) -> Result<Option<Project>, ClientError> {
        BoardApi::join_project(self, credentials).await
    }

    async fn add_user(&self, project_id: &str, username: &str) -> Result<bool, ClientError> {
        BoardApi::add_user(self, project_id, username).await
    }

    async fn list_resources(&self, project_id: &str) -> Result<Vec<Resource>, ClientError> {
        BoardApi::list_resources(self, project_id).await
    }

    async fn add_resource(
        &self,
        project_id: &str,
        input: &CreateResource,
    ) -> Result<Resource, ClientError> {
        BoardApi::add_resource(self, project_id, input).await
    }

    async fn update_resource(
        &self,
        project_id: &str,
        resource_id: &str,
        input: &UpdateResource,
    ) -> Result<bool, ClientError> {
        BoardApi::update_resource(self, project_id, resource_id, input).await
    }

    async fn delete_resource(
        &self,
        project_id: &str,
        resource_id: &str,
    ) -> Result<bool, ClientError> {
        BoardApi::delete_resource(self, project_id, resource_id).await
    }

    async fn list_tasks(&self, project_id: &str) -> Result<Vec<Task>, ClientError> {
        BoardApi::list_tasks(self, project_id).await
    }

    async fn create_task(&self, input: &CreateTask) -> Result<Task, ClientError> {
        BoardApi::create_task(self, input).await
    }

    async fn update_task(&self, task_id: &str, update: &UpdateTask) -> Result<bool, ClientError> {
        BoardApi::update_task(self, task_id, update).await
    }

    async fn delete_task(&self, task_id: &str) -> Result<bool, ClientError> {
        BoardApi::delete_task(self, task_id).await
    }
}
