//! Store-level behaviour exercised against the in-memory backend.
//!
//! Covers the document semantics every backend must share: set-semantics
//! users, projectId filtering, "modified" booleans, and keyed resources.

use taskboard_core::project::{ProjectCredentials, UpdateProject};
use taskboard_core::resource::{CreateResource, Resource, UpdateResource};
use taskboard_core::status::TaskStatus;
use taskboard_core::task::{CreateTask, UpdateTask};
use taskboard_db::{MemoryStore, Store};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn creds(project_id: &str, password: &str) -> ProjectCredentials {
    ProjectCredentials {
        project_id: project_id.to_string(),
        password: password.to_string(),
    }
}

fn new_task(project_id: &str, title: &str) -> CreateTask {
    CreateTask {
        project_id: project_id.to_string(),
        title: title.to_string(),
        description: "desc".to_string(),
        deadline: "2026-12-01".to_string(),
        assigned_user: "ann".to_string(),
        status: TaskStatus::Pending,
        color: None,
    }
}

fn new_resource(name: &str, value: &str) -> CreateResource {
    CreateResource {
        name: name.to_string(),
        value: value.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

#[tokio::test]
async fn join_requires_exact_password() {
    let store = MemoryStore::new();
    let created = store.create_project(&creds("alpha", "pw")).await.unwrap();
    assert!(created.users.is_empty());
    assert!(created.resources.is_empty());

    let joined = store.join_project(&creds("alpha", "pw")).await.unwrap().unwrap();
    assert_eq!(joined.project_id, "alpha");
    assert_eq!(joined.id, created.id);

    assert!(store.join_project(&creds("alpha", "nope")).await.unwrap().is_none());
    assert!(store.join_project(&creds("beta", "pw")).await.unwrap().is_none());
}

#[tokio::test]
async fn duplicate_project_ids_resolve_to_earliest() {
    let store = MemoryStore::new();
    let first = store.create_project(&creds("dup", "one")).await.unwrap();
    let second = store.create_project(&creds("dup", "two")).await.unwrap();
    assert_ne!(first.id, second.id);

    let found = store.find_project("dup").await.unwrap().unwrap();
    assert_eq!(found.id, first.id);

    // Join still matches on the exact pair.
    let joined = store.join_project(&creds("dup", "two")).await.unwrap().unwrap();
    assert_eq!(joined.id, second.id);
}

#[tokio::test]
async fn add_user_has_set_semantics() {
    let store = MemoryStore::new();
    store.create_project(&creds("alpha", "pw")).await.unwrap();

    assert!(store.add_user("alpha", "bob").await.unwrap());
    assert!(!store.add_user("alpha", "bob").await.unwrap());
    assert!(store.add_user("alpha", "cat").await.unwrap());

    let project = store.find_project("alpha").await.unwrap().unwrap();
    assert_eq!(project.users, vec!["bob", "cat"]);
}

#[tokio::test]
async fn add_user_to_unknown_project_is_a_no_op() {
    let store = MemoryStore::new();
    assert!(!store.add_user("ghost", "bob").await.unwrap());
}

#[tokio::test]
async fn update_project_reports_modification() {
    let store = MemoryStore::new();
    store.create_project(&creds("alpha", "pw")).await.unwrap();

    let rotate = UpdateProject {
        password: Some("new".into()),
        ..UpdateProject::default()
    };
    assert!(store.update_project("alpha", &rotate).await.unwrap());
    assert!(!store.update_project("alpha", &rotate).await.unwrap());
    assert!(store.join_project(&creds("alpha", "new")).await.unwrap().is_some());

    assert!(!store.update_project("ghost", &rotate).await.unwrap());
}

#[tokio::test]
async fn update_project_replaces_resource_array() {
    let store = MemoryStore::new();
    store.create_project(&creds("alpha", "pw")).await.unwrap();
    store.add_resource("alpha", &new_resource("OLD", "1")).await.unwrap();

    let replace = UpdateProject {
        resources: Some(vec![Resource {
            id: String::new(),
            name: "KEY".into(),
            value: "secret".into(),
        }]),
        ..UpdateProject::default()
    };
    assert!(store.update_project("alpha", &replace).await.unwrap());

    let resources = store.list_resources("alpha").await.unwrap().unwrap();
    assert_eq!(resources.len(), 1);
    assert_eq!(resources[0].name, "KEY");
    assert!(!resources[0].id.is_empty());
}

// ---------------------------------------------------------------------------
// Resources
// ---------------------------------------------------------------------------

#[tokio::test]
async fn resources_are_keyed_by_id() {
    let store = MemoryStore::new();
    store.create_project(&creds("alpha", "pw")).await.unwrap();

    let key = store
        .add_resource("alpha", &new_resource("KEY", "secret"))
        .await
        .unwrap()
        .unwrap();
    let other = store
        .add_resource("alpha", &new_resource("URL", "https://example.test"))
        .await
        .unwrap()
        .unwrap();

    let rename = UpdateResource {
        name: Some("API_KEY".into()),
        value: None,
    };
    assert!(store.update_resource("alpha", &key.id, &rename).await.unwrap());
    assert!(!store.update_resource("alpha", &key.id, &rename).await.unwrap());

    assert!(store.delete_resource("alpha", &key.id).await.unwrap());
    assert!(!store.delete_resource("alpha", &key.id).await.unwrap());

    let remaining = store.list_resources("alpha").await.unwrap().unwrap();
    assert_eq!(remaining, vec![other]);
}

#[tokio::test]
async fn resources_of_unknown_project_are_absent() {
    let store = MemoryStore::new();
    assert!(store.list_resources("ghost").await.unwrap().is_none());
    assert!(store
        .add_resource("ghost", &new_resource("K", "V"))
        .await
        .unwrap()
        .is_none());
}

// ---------------------------------------------------------------------------
// Tasks
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_tasks_filters_by_project() {
    let store = MemoryStore::new();
    let task = store.create_task(&new_task("alpha", "one")).await.unwrap();
    store.create_task(&new_task("beta", "two")).await.unwrap();

    let alpha = store.list_tasks("alpha").await.unwrap();
    assert_eq!(alpha.len(), 1);
    assert_eq!(alpha[0].id, task.id);
    assert_eq!(alpha[0].color.as_deref(), Some("#ffffff"));

    assert!(store.list_tasks("gamma").await.unwrap().is_empty());
}

#[tokio::test]
async fn update_task_status_and_missing_id() {
    let store = MemoryStore::new();
    let task = store.create_task(&new_task("alpha", "one")).await.unwrap();

    let complete = UpdateTask::status(TaskStatus::Completed);
    assert!(store.update_task(&task.id, &complete).await.unwrap());
    let fetched = store.find_task(&task.id).await.unwrap().unwrap();
    assert_eq!(fetched.status, TaskStatus::Completed);

    assert!(!store.update_task(&task.id, &complete).await.unwrap());
    assert!(!store.update_task("missing", &complete).await.unwrap());
}

#[tokio::test]
async fn delete_task_twice() {
    let store = MemoryStore::new();
    let task = store.create_task(&new_task("alpha", "one")).await.unwrap();

    assert!(store.delete_task(&task.id).await.unwrap());
    assert!(!store.delete_task(&task.id).await.unwrap());
    assert!(store.list_tasks("alpha").await.unwrap().is_empty());
}
