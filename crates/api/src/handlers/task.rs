//! Handlers for the `/task` and `/tasks` resources.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use taskboard_core::task::{CreateTask, Task, UpdateTask};

use crate::error::{AppResult, StoreResultExt};
use crate::extract::AppJson;
use crate::response::SuccessResponse;
use crate::state::AppState;

/// POST /task
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateTask>,
) -> AppResult<(StatusCode, Json<Task>)> {
    let task = state
        .store
        .create_task(&input)
        .await
        .or_fail("Failed to create task")?;
    tracing::debug!(task_id = %task.id, project_id = %task.project_id, "Task created");
    Ok((StatusCode::CREATED, Json(task)))
}

/// GET /tasks/{project_id}
pub async fn list_by_project(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
) -> AppResult<Json<Vec<Task>>> {
    let tasks = state
        .store
        .list_tasks(&project_id)
        .await
        .or_fail("Failed to fetch tasks")?;
    Ok(Json(tasks))
}

/// PATCH /task/{task_id}
///
/// Last write wins; there is no version check.
pub async fn update(
    State(state): State<AppState>,
    Path(task_id): Path<String>,
    AppJson(input): AppJson<UpdateTask>,
) -> AppResult<Json<SuccessResponse>> {
    let changed = state
        .store
        .update_task(&task_id, &input)
        .await
        .or_fail("Failed to update task")?;
    Ok(Json(SuccessResponse::new(changed)))
}

/// DELETE /task/{task_id}
pub async fn delete(
    State(state): State<AppState>,
    Path(task_id): Path<String>,
) -> AppResult<Json<SuccessResponse>> {
    let deleted = state
        .store
        .delete_task(&task_id)
        .await
        .or_fail("Failed to delete task")?;
    Ok(Json(SuccessResponse::new(deleted)))
}
