//! Board state: the current project's tasks split into status columns.
//!
//! Status changes from drag-and-drop are applied locally before the server
//! confirms them. If the update call fails the whole task list is restored
//! from a snapshot taken just before the move.

use taskboard_core::status::TaskStatus;
use taskboard_core::task::{Task, UpdateTask};

use crate::api::BoardGateway;
use crate::forms::{EditTaskForm, NewTaskForm, NewUserForm};
use crate::notify::Notice;
use crate::session::Session;

/// A finished drag gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragDrop {
    pub task_id: String,
    pub source: TaskStatus,
    /// `None` when the card was released outside every column.
    pub destination: Option<TaskStatus>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// Dropped nowhere, or back onto its own column.
    Ignored,
    /// The move was applied and the server accepted it.
    Moved,
}

pub struct Board<G> {
    gateway: G,
    project_id: String,
    tasks: Vec<Task>,
}

impl<G: BoardGateway> Board<G> {
    pub fn new(gateway: G, project_id: impl Into<String>) -> Self {
        Self {
            gateway,
            project_id: project_id.into(),
            tasks: Vec::new(),
        }
    }

    /// Board for the session's project; `None` when logged out.
    pub fn for_session(gateway: G, session: &Session) -> Option<Self> {
        session
            .current_project()
            .map(|project_id| Self::new(gateway, project_id))
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn task(&self, task_id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == task_id)
    }

    pub fn column(&self, status: TaskStatus) -> Vec<&Task> {
        self.tasks.iter().filter(|t| t.status == status).collect()
    }

    /// All three columns in display order.
    pub fn columns(&self) -> Vec<(TaskStatus, Vec<&Task>)> {
        TaskStatus::ALL
            .iter()
            .map(|&status| (status, self.column(status)))
            .collect()
    }

    /// Replace the local list with the server's.
    pub async fn load(&mut self) -> Result<(), Notice> {
        match self.gateway.list_tasks(&self.project_id).await {
            Ok(tasks) => {
                self.tasks = tasks;
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, project_id = %self.project_id, "Loading tasks failed");
                Err(Notice::error("Failed to load tasks"))
            }
        }
    }

    /// Move a card between columns, optimistically.
    ///
    /// On failure the board is back to its state before the drop and the
    /// error notice is returned.
    pub async fn drop_task(&mut self, drop: &DragDrop) -> Result<DropOutcome, Notice> {
        let Some(destination) = drop.destination else {
            return Ok(DropOutcome::Ignored);
        };
        if destination == drop.source {
            return Ok(DropOutcome::Ignored);
        }

        let snapshot = self.tasks.clone();
        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == drop.task_id) {
            task.status = destination;
        }

        match self
            .gateway
            .update_task(&drop.task_id, &UpdateTask::status(destination))
            .await
        {
            Ok(_) => Ok(DropOutcome::Moved),
            Err(err) => {
                tracing::warn!(error = %err, task_id = %drop.task_id, "Status update failed, reverting");
                self.tasks = snapshot;
                Err(Notice::error("Failed to update task status"))
            }
        }
    }

    /// Validate and create a task, then append it.
    pub async fn create_task(&mut self, form: &NewTaskForm) -> Notice {
        let input = match form.validate(&self.project_id) {
            Ok(input) => input,
            Err(err) => return Notice::from_form(&err),
        };
        match self.gateway.create_task(&input).await {
            Ok(task) => {
                self.append_task(task);
                Notice::success("Task created successfully")
            }
            Err(err) => {
                tracing::warn!(error = %err, "Create task failed");
                Notice::error("Failed to create task")
            }
        }
    }

    /// Submit an edit form and swap the card for the edited task.
    pub async fn save_edit(&mut self, form: &EditTaskForm) -> Notice {
        match self.gateway.update_task(form.task_id(), &form.to_update()).await {
            Ok(_) => {
                self.replace_task(form.edited().clone());
                Notice::success("Task updated successfully")
            }
            Err(err) => {
                tracing::warn!(error = %err, task_id = %form.task_id(), "Update task failed");
                Notice::error("Failed to update task")
            }
        }
    }

    pub async fn delete_task(&mut self, task_id: &str) -> Notice {
        match self.gateway.delete_task(task_id).await {
            Ok(_) => {
                self.remove_task(task_id);
                Notice::success("Task deleted successfully")
            }
            Err(err) => {
                tracing::warn!(error = %err, task_id, "Delete task failed");
                Notice::error("Failed to delete task")
            }
        }
    }

    /// Add a member to the board's project.
    pub async fn add_user(&self, form: &NewUserForm) -> Notice {
        let input = match form.validate(&self.project_id) {
            Ok(input) => input,
            Err(err) => return Notice::from_form(&err),
        };
        match self.gateway.add_user(&input.project_id, &input.username).await {
            Ok(_) => Notice::success("User added successfully"),
            Err(err) => {
                tracing::warn!(error = %err, username = %input.username, "Add user failed");
                Notice::error("Failed to add user")
            }
        }
    }

    pub fn append_task(&mut self, task: Task) {
        self.tasks.push(task);
    }

    pub fn remove_task(&mut self, task_id: &str) {
        self.tasks.retain(|t| t.id != task_id);
    }

    pub fn replace_task(&mut self, task: Task) {
        if let Some(slot) = self.tasks.iter_mut().find(|t| t.id == task.id) {
            *slot = task;
        }
    }
}
