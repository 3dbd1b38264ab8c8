//! Project documents and their request payloads.
//!
//! A project is identified on the wire by its client-chosen `projectId`,
//! which is also its display name. The internal `id` is server generated.
//! Nothing enforces `projectId` uniqueness; lookups by `projectId` resolve
//! to the earliest created project.

use serde::{Deserialize, Serialize};

use crate::resource::{normalize_resources, Resource};
use crate::types::{DocId, Timestamp};

/// A project workspace gated by a shared plaintext password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: DocId,
    pub project_id: String,
    /// Never echoed back in responses.
    #[serde(default, skip_serializing)]
    pub password: String,
    /// Usernames in insertion order, without repeats.
    #[serde(default)]
    pub users: Vec<String>,
    #[serde(default)]
    pub resources: Vec<Resource>,
    pub created_at: Timestamp,
}

/// Body of `POST /project` and `POST /project/join`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectCredentials {
    pub project_id: String,
    pub password: String,
}

/// Body of `POST /project/user`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddUser {
    pub project_id: String,
    pub username: String,
}

/// Partial update for `PATCH /project/{projectId}`.
///
/// `users` and `resources` replace the whole stored sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProject {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub users: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resources: Option<Vec<Resource>>,
}

impl UpdateProject {
    /// Apply the present fields to `project`. Returns `true` if anything changed.
    pub fn apply(&self, project: &mut Project) -> bool {
        let mut changed = false;

        if let Some(password) = &self.password {
            changed |= project.password != *password;
            project.password.clone_from(password);
        }
        if let Some(users) = &self.users {
            let users = dedupe_users(users);
            changed |= project.users != users;
            project.users = users;
        }
        if let Some(resources) = &self.resources {
            let resources = normalize_resources(resources);
            changed |= project.resources != resources;
            project.resources = resources;
        }

        changed
    }
}

/// Drop repeated usernames, keeping first-seen order.
pub fn dedupe_users(users: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(users.len());
    for user in users {
        if !out.contains(user) {
            out.push(user.clone());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project() -> Project {
        Project {
            id: "p-1".into(),
            project_id: "alpha".into(),
            password: "hunter2".into(),
            users: vec!["ann".into()],
            resources: Vec::new(),
            created_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn password_is_not_serialized() {
        let json = serde_json::to_value(project()).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["projectId"], "alpha");
        assert_eq!(json["users"][0], "ann");
    }

    #[test]
    fn dedupe_keeps_first_occurrence_order() {
        let users = vec!["b".to_string(), "a".into(), "b".into(), "c".into()];
        assert_eq!(dedupe_users(&users), vec!["b", "a", "c"]);
    }

    #[test]
    fn apply_replaces_users_as_a_set() {
        let mut p = project();
        let update = UpdateProject {
            users: Some(vec!["ann".into(), "bob".into(), "bob".into()]),
            ..UpdateProject::default()
        };
        assert!(update.apply(&mut p));
        assert_eq!(p.users, vec!["ann", "bob"]);
        assert!(!update.apply(&mut p));
    }

    #[test]
    fn apply_same_password_is_not_a_change() {
        let mut p = project();
        let update = UpdateProject {
            password: Some("hunter2".into()),
            ..UpdateProject::default()
        };
        assert!(!update.apply(&mut p));
    }

    #[test]
    fn apply_replaces_resources_wholesale() {
        let mut p = project();
        let update = UpdateProject {
            resources: Some(vec![Resource {
                id: "r1".into(),
                name: "KEY".into(),
                value: "secret".into(),
            }]),
            ..UpdateProject::default()
        };
        assert!(update.apply(&mut p));
        assert_eq!(p.resources.len(), 1);
        assert_eq!(p.resources[0].name, "KEY");
    }
}
