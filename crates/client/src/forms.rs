//! Form state and the client-side checks that gate every write.
//!
//! A form that fails validation yields [`CoreError::Validation`] and no
//! request is made.

use taskboard_core::error::CoreError;
use taskboard_core::project::{AddUser, ProjectCredentials};
use taskboard_core::status::TaskStatus;
use taskboard_core::task::{CreateTask, Task, UpdateTask};
use taskboard_core::validation::{require_all, MSG_ENTER_USERNAME, MSG_FILL_ALL_FIELDS};

/// One entry of the edit form's color picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorOption {
    pub label: &'static str,
    /// Display tag stored in `Task::color`.
    pub value: &'static str,
}

/// Colors offered by the task edit form.
pub const COLOR_OPTIONS: [ColorOption; 5] = [
    ColorOption { label: "Red", value: "bg-red-100" },
    ColorOption { label: "Blue", value: "bg-blue-100" },
    ColorOption { label: "Green", value: "bg-green-100" },
    ColorOption { label: "Yellow", value: "bg-yellow-100" },
    ColorOption { label: "Purple", value: "bg-purple-100" },
];

/// Create-or-join form on the landing screen.
#[derive(Debug, Clone, Default)]
pub struct ProjectForm {
    pub project_id: String,
    pub password: String,
}

impl ProjectForm {
    pub fn new(project_id: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            password: password.into(),
        }
    }

    pub fn validate(&self) -> Result<ProjectCredentials, CoreError> {
        require_all(
            &[self.project_id.as_str(), self.password.as_str()],
            MSG_FILL_ALL_FIELDS,
        )?;
        Ok(ProjectCredentials {
            project_id: self.project_id.clone(),
            password: self.password.clone(),
        })
    }
}

/// Create-task dialog.
#[derive(Debug, Clone, Default)]
pub struct NewTaskForm {
    pub title: String,
    pub description: String,
    pub deadline: String,
    pub assigned_user: String,
}

impl NewTaskForm {
    /// Build the create request. New tasks always start in `pending`.
    pub fn validate(&self, project_id: &str) -> Result<CreateTask, CoreError> {
        require_all(
            &[
                self.title.as_str(),
                self.description.as_str(),
                self.deadline.as_str(),
                self.assigned_user.as_str(),
            ],
            MSG_FILL_ALL_FIELDS,
        )?;
        Ok(CreateTask {
            project_id: project_id.to_string(),
            title: self.title.clone(),
            description: self.description.clone(),
            deadline: self.deadline.clone(),
            assigned_user: self.assigned_user.clone(),
            status: TaskStatus::Pending,
            color: None,
        })
    }
}

/// Add-user dialog.
#[derive(Debug, Clone, Default)]
pub struct NewUserForm {
    pub username: String,
}

impl NewUserForm {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }

    pub fn validate(&self, project_id: &str) -> Result<AddUser, CoreError> {
        require_all(&[self.username.as_str()], MSG_ENTER_USERNAME)?;
        Ok(AddUser {
            project_id: project_id.to_string(),
            username: self.username.clone(),
        })
    }
}

/// In-place edit of one task card. Starts as a copy of the task.
#[derive(Debug, Clone)]
pub struct EditTaskForm {
    task: Task,
}

impl EditTaskForm {
    pub fn new(task: &Task) -> Self {
        Self { task: task.clone() }
    }

    pub fn task_id(&self) -> &str {
        &self.task.id
    }

    pub fn edited(&self) -> &Task {
        &self.task
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.task.title = title.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.task.description = description.into();
    }

    pub fn set_deadline(&mut self, deadline: impl Into<String>) {
        self.task.deadline = deadline.into();
    }

    pub fn set_assigned_user(&mut self, assigned_user: impl Into<String>) {
        self.task.assigned_user = assigned_user.into();
    }

    pub fn set_status(&mut self, status: TaskStatus) {
        self.task.status = status;
    }

    pub fn set_color(&mut self, color: impl Into<String>) {
        self.task.color = Some(color.into());
    }

    /// The whole edited task, sent as a partial update.
    pub fn to_update(&self) -> UpdateTask {
        UpdateTask::from(&self.task)
    }
}
