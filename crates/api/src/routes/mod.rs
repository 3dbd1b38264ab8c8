pub mod health;

use axum::extract::{Path, State};
use axum::routing::{get, patch, post, MethodRouter};
use axum::Router;
use taskboard_core::project::UpdateProject;

use crate::extract::AppJson;
use crate::handlers::{project, resource, task};
use crate::state::AppState;

/// Build the board API route tree.
///
/// Mounted both at the root and under `/api`.
///
/// ```text
/// POST   /project                                      create project
/// POST   /project/join                                 join with credentials
/// POST   /project/user                                 add a member
/// GET    /project/{project_id}                         get project
/// PATCH  /project/{project_id}                         update password/users/resources
///
/// GET and PATCH on `/project/join` and `/project/user` address the
/// projects literally named `join` and `user`.
///
/// GET    /project/{project_id}/resources               list resources
/// POST   /project/{project_id}/resources               add resource
/// PATCH  /project/{project_id}/resources/{resource_id} edit resource
/// DELETE /project/{project_id}/resources/{resource_id} remove resource
///
/// POST   /task                                         create task
/// PATCH  /task/{task_id}                               update task
/// DELETE /task/{task_id}                               delete task
/// GET    /tasks/{project_id}                           list tasks of a project
/// ```
pub fn api_routes() -> Router<AppState> {
    let project_routes = Router::new()
        .route("/", post(project::create))
        .route("/join", named_project("join", post(project::join)))
        .route("/user", named_project("user", post(project::add_user)))
        .route(
            "/{project_id}",
            get(project::get_by_project_id).patch(project::update),
        )
        .route(
            "/{project_id}/resources",
            get(resource::list).post(resource::create),
        )
        .route(
            "/{project_id}/resources/{resource_id}",
            patch(resource::update).delete(resource::delete),
        );

    Router::new()
        .nest("/project", project_routes)
        .route("/task", post(task::create))
        .route("/task/{task_id}", patch(task::update).delete(task::delete))
        .route("/tasks/{project_id}", get(task::list_by_project))
}

/// Add the `/{project_id}` GET and PATCH handlers to a static project path,
/// with `name` as the project id.
fn named_project(
    name: &'static str,
    methods: MethodRouter<AppState>,
) -> MethodRouter<AppState> {
    methods
        .get(move |state: State<AppState>| {
            project::get_by_project_id(state, Path(name.to_owned()))
        })
        .patch(
            move |state: State<AppState>, input: AppJson<UpdateProject>| {
                project::update(state, Path(name.to_owned()), input)
            },
        )
}
