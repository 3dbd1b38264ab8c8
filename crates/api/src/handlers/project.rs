//! Handlers for the `/project` resource.
//!
//! Join is a capability check: an exact plaintext (projectId, password)
//! match against the stored project. No session or token is issued.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use taskboard_core::error::CoreError;
use taskboard_core::project::{AddUser, Project, ProjectCredentials, UpdateProject};

use crate::error::{AppError, AppResult, StoreResultExt};
use crate::extract::AppJson;
use crate::response::SuccessResponse;
use crate::state::AppState;

/// POST /project
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<ProjectCredentials>,
) -> AppResult<(StatusCode, Json<Project>)> {
    let project = state
        .store
        .create_project(&input)
        .await
        .or_fail("Failed to create project")?;
    tracing::info!(project_id = %project.project_id, id = %project.id, "Project created");
    Ok((StatusCode::CREATED, Json(project)))
}

/// POST /project/join
pub async fn join(
    State(state): State<AppState>,
    AppJson(input): AppJson<ProjectCredentials>,
) -> AppResult<Json<Project>> {
    let project = state
        .store
        .join_project(&input)
        .await
        .or_fail("Failed to join project")?
        .ok_or(AppError::Core(CoreError::InvalidCredentials))?;
    tracing::debug!(project_id = %project.project_id, "Project joined");
    Ok(Json(project))
}

/// GET /project/{project_id}
pub async fn get_by_project_id(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
) -> AppResult<Json<Project>> {
    let project = state
        .store
        .find_project(&project_id)
        .await
        .or_fail("Failed to load project")?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id: project_id,
        }))?;
    Ok(Json(project))
}

/// POST /project/user
///
/// Adding a user who is already a member reports `success: false`.
pub async fn add_user(
    State(state): State<AppState>,
    AppJson(input): AppJson<AddUser>,
) -> AppResult<Json<SuccessResponse>> {
    let added = state
        .store
        .add_user(&input.project_id, &input.username)
        .await
        .or_fail("Failed to add user")?;
    Ok(Json(SuccessResponse::new(added)))
}

/// PATCH /project/{project_id}
///
/// `users` and `resources`, when present, replace the stored sequences.
pub async fn update(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
    AppJson(input): AppJson<UpdateProject>,
) -> AppResult<Json<SuccessResponse>> {
    let changed = state
        .store
        .update_project(&project_id, &input)
        .await
        .or_fail("Failed to update project")?;
    Ok(Json(SuccessResponse::new(changed)))
}
