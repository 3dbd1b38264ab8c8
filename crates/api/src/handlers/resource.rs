//! Handlers for `/project/{project_id}/resources`.
//!
//! Each call touches exactly one resource, so two clients editing different
//! resources of the same project never overwrite each other.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use taskboard_core::error::CoreError;
use taskboard_core::resource::{CreateResource, Resource, UpdateResource};

use crate::error::{AppError, AppResult, StoreResultExt};
use crate::extract::AppJson;
use crate::response::SuccessResponse;
use crate::state::AppState;

fn project_not_found(project_id: String) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Project",
        id: project_id,
    })
}

/// GET /project/{project_id}/resources
pub async fn list(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
) -> AppResult<Json<Vec<Resource>>> {
    let resources = state
        .store
        .list_resources(&project_id)
        .await
        .or_fail("Failed to load resources")?
        .ok_or_else(|| project_not_found(project_id))?;
    Ok(Json(resources))
}

/// POST /project/{project_id}/resources
pub async fn create(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
    AppJson(input): AppJson<CreateResource>,
) -> AppResult<(StatusCode, Json<Resource>)> {
    let resource = state
        .store
        .add_resource(&project_id, &input)
        .await
        .or_fail("Failed to add resource")?
        .ok_or_else(|| project_not_found(project_id))?;
    Ok((StatusCode::CREATED, Json(resource)))
}

/// PATCH /project/{project_id}/resources/{resource_id}
pub async fn update(
    State(state): State<AppState>,
    Path((project_id, resource_id)): Path<(String, String)>,
    AppJson(input): AppJson<UpdateResource>,
) -> AppResult<Json<SuccessResponse>> {
    let changed = state
        .store
        .update_resource(&project_id, &resource_id, &input)
        .await
        .or_fail("Failed to update resource")?;
    Ok(Json(SuccessResponse::new(changed)))
}

/// DELETE /project/{project_id}/resources/{resource_id}
pub async fn delete(
    State(state): State<AppState>,
    Path((project_id, resource_id)): Path<(String, String)>,
) -> AppResult<Json<SuccessResponse>> {
    let deleted = state
        .store
        .delete_resource(&project_id, &resource_id)
        .await
        .or_fail("Failed to delete resource")?;
    Ok(Json(SuccessResponse::new(deleted)))
}
