//! Task status: the closed set of board columns.
//!
//! Any status may move to any other; the board imposes no ordering.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

pub const STATUS_PENDING: &str = "pending";
pub const STATUS_ONGOING: &str = "ongoing";
pub const STATUS_COMPLETED: &str = "completed";

/// Lifecycle status of a task. Serialized as its lowercase name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    #[default]
    Pending,
    Ongoing,
    Completed,
}

impl TaskStatus {
    /// All statuses in board column order.
    pub const ALL: [TaskStatus; 3] = [
        TaskStatus::Pending,
        TaskStatus::Ongoing,
        TaskStatus::Completed,
    ];

    /// Wire and storage representation.
    pub fn as_str(self) -> &'static str {
        match self {
            TaskStatus::Pending => STATUS_PENDING,
            TaskStatus::Ongoing => STATUS_ONGOING,
            TaskStatus::Completed => STATUS_COMPLETED,
        }
    }

    /// Column heading shown on the board.
    pub fn title(self) -> &'static str {
        match self {
            TaskStatus::Pending => "Pending",
            TaskStatus::Ongoing => "Ongoing",
            TaskStatus::Completed => "Completed",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            STATUS_PENDING => Ok(TaskStatus::Pending),
            STATUS_ONGOING => Ok(TaskStatus::Ongoing),
            STATUS_COMPLETED => Ok(TaskStatus::Completed),
            other => Err(CoreError::Validation(format!(
                "Unknown task status '{other}'"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_wire_name() {
        for status in TaskStatus::ALL {
            assert_eq!(status.as_str().parse::<TaskStatus>().unwrap(), status);
        }
    }

    #[test]
    fn rejects_unknown_status() {
        assert!("done".parse::<TaskStatus>().is_err());
        assert!("Pending".parse::<TaskStatus>().is_err());
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_string(&TaskStatus::Ongoing).unwrap();
        assert_eq!(json, "\"ongoing\"");
        let parsed: TaskStatus = serde_json::from_str("\"completed\"").unwrap();
        assert_eq!(parsed, TaskStatus::Completed);
    }

    #[test]
    fn defaults_to_pending() {
        assert_eq!(TaskStatus::default(), TaskStatus::Pending);
    }
}
