//! Task documents and their create/update payloads.

use serde::{Deserialize, Serialize};

use crate::status::TaskStatus;
use crate::types::DocId;

/// Display tag given to tasks created without one.
pub const DEFAULT_TASK_COLOR: &str = "#ffffff";

/// A task on a project board.
///
/// `id` is the single canonical identifier for a task, both on the wire and
/// in every store backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: DocId,
    pub project_id: String,
    pub title: String,
    pub description: String,
    /// Calendar date as entered (`YYYY-MM-DD`); never parsed.
    pub deadline: String,
    pub assigned_user: String,
    pub status: TaskStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Payload for `POST /task`: every task field except `id`.
///
/// Text fields default to empty when missing; required-field checks happen
/// in the client before the request is sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTask {
    #[serde(default)]
    pub project_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub deadline: String,
    #[serde(default)]
    pub assigned_user: String,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl CreateTask {
    /// Build the stored task under the given id, filling in the default color.
    pub fn into_task(self, id: DocId) -> Task {
        Task {
            id,
            project_id: self.project_id,
            title: self.title,
            description: self.description,
            deadline: self.deadline,
            assigned_user: self.assigned_user,
            status: self.status,
            color: Some(
                self.color
                    .unwrap_or_else(|| DEFAULT_TASK_COLOR.to_string()),
            ),
        }
    }
}

/// Partial update for `PATCH /task/{taskId}`. Only present fields are set.
///
/// An `id` in the body is ignored; the path decides which task is changed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTask {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_user: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl UpdateTask {
    /// An update that only moves the task to another column.
    pub fn status(status: TaskStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    /// True when the update carries no fields at all.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Apply the present fields to `task`. Returns `true` if anything changed.
    pub fn apply(&self, task: &mut Task) -> bool {
        let before = task.clone();

        if let Some(project_id) = &self.project_id {
            task.project_id.clone_from(project_id);
        }
        if let Some(title) = &self.title {
            task.title.clone_from(title);
        }
        if let Some(description) = &self.description {
            task.description.clone_from(description);
        }
        if let Some(deadline) = &self.deadline {
            task.deadline.clone_from(deadline);
        }
        if let Some(assigned_user) = &self.assigned_user {
            task.assigned_user.clone_from(assigned_user);
        }
        if let Some(status) = self.status {
            task.status = status;
        }
        if let Some(color) = &self.color {
            task.color = Some(color.clone());
        }

        *task != before
    }
}

impl From<&Task> for UpdateTask {
    /// The edit form submits every field of the edited task.
    fn from(task: &Task) -> Self {
        Self {
            project_id: Some(task.project_id.clone()),
            title: Some(task.title.clone()),
            description: Some(task.description.clone()),
            deadline: Some(task.deadline.clone()),
            assigned_user: Some(task.assigned_user.clone()),
            status: Some(task.status),
            color: task.color.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_task() -> Task {
        CreateTask {
            project_id: "alpha".into(),
            title: "Write docs".into(),
            description: "README".into(),
            deadline: "2026-11-01".into(),
            assigned_user: "sam".into(),
            status: TaskStatus::Pending,
            color: None,
        }
        .into_task("t-1".into())
    }

    #[test]
    fn create_fills_default_color() {
        let task = sample_task();
        assert_eq!(task.color.as_deref(), Some(DEFAULT_TASK_COLOR));
        assert_eq!(task.id, "t-1");
    }

    #[test]
    fn create_keeps_explicit_color() {
        let input = CreateTask {
            color: Some("bg-red-100".into()),
            ..CreateTask::default()
        };
        assert_eq!(input.into_task("x".into()).color.as_deref(), Some("bg-red-100"));
    }

    #[test]
    fn status_update_reports_change() {
        let mut task = sample_task();
        assert!(UpdateTask::status(TaskStatus::Completed).apply(&mut task));
        assert_eq!(task.status, TaskStatus::Completed);
    }

    #[test]
    fn identical_update_is_not_a_change() {
        let mut task = sample_task();
        let update = UpdateTask::from(&task);
        assert!(!update.apply(&mut task));
        assert!(!UpdateTask::default().apply(&mut task));
    }

    #[test]
    fn deserializes_camel_case_partial_body() {
        let update: UpdateTask =
            serde_json::from_str(r#"{"assignedUser":"kim","id":"ignored"}"#).unwrap();
        assert_eq!(update.assigned_user.as_deref(), Some("kim"));
        assert!(update.title.is_none());
        assert!(!update.is_empty());
    }

    #[test]
    fn unknown_status_is_rejected() {
        let parsed = serde_json::from_str::<UpdateTask>(r#"{"status":"blocked"}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn missing_create_fields_default_to_empty_pending() {
        let input: CreateTask = serde_json::from_str(r#"{"projectId":"alpha"}"#).unwrap();
        assert_eq!(input.project_id, "alpha");
        assert_eq!(input.title, "");
        assert_eq!(input.status, TaskStatus::Pending);
    }

    #[test]
    fn serialized_task_uses_camel_case() {
        let json = serde_json::to_value(sample_task()).unwrap();
        assert_eq!(json["projectId"], "alpha");
        assert_eq!(json["assignedUser"], "sam");
        assert_eq!(json["status"], "pending");
    }
}
