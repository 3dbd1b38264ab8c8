//! The "current project" marker.
//!
//! A [`Session`] is either logged out or holds one `projectId`. It can be
//! persisted to a file so a restarted client reopens the same board.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use taskboard_core::project::Project;

use crate::api::BoardGateway;
use crate::error::ClientError;
use crate::forms::ProjectForm;
use crate::notify::Notice;

#[derive(Debug, Default)]
pub struct Session {
    project_id: Option<String>,
    path: Option<PathBuf>,
}

impl Session {
    /// A session that lives only in memory.
    pub fn new() -> Self {
        Self::default()
    }

    /// A session backed by `path`, restored from it if the file exists.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, ClientError> {
        let path = path.into();
        let project_id = match fs::read_to_string(&path) {
            Ok(contents) => Some(contents.trim().to_string()).filter(|id| !id.is_empty()),
            Err(err) if err.kind() == ErrorKind::NotFound => None,
            Err(err) => return Err(err.into()),
        };
        Ok(Self {
            project_id,
            path: Some(path),
        })
    }

    pub fn current_project(&self) -> Option<&str> {
        self.project_id.as_deref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.project_id.is_some()
    }

    pub fn login(&mut self, project_id: &str) -> Result<(), ClientError> {
        if let Some(path) = &self.path {
            fs::write(path, project_id)?;
        }
        self.project_id = Some(project_id.to_string());
        Ok(())
    }

    pub fn logout(&mut self) -> Result<(), ClientError> {
        self.project_id = None;
        if let Some(path) = &self.path {
            match fs::remove_file(path) {
                Ok(()) => {}
                Err(err) if err.kind() == ErrorKind::NotFound => {}
                Err(err) => return Err(err.into()),
            }
        }
        Ok(())
    }

    /// Create a project and enter it.
    pub async fn create_project<G: BoardGateway + ?Sized>(
        &mut self,
        gateway: &G,
        form: &ProjectForm,
    ) -> Result<Project, Notice> {
        let credentials = form.validate().map_err(|err| Notice::from_form(&err))?;
        let project = gateway
            .create_project(&credentials)
            .await
            .map_err(|err| {
                tracing::warn!(error = %err, project_id = %credentials.project_id, "Create project failed");
                Notice::error("Failed to create project")
            })?;
        self.enter(&project);
        Ok(project)
    }

    /// Join an existing project by exact credentials and enter it.
    pub async fn join_project<G: BoardGateway + ?Sized>(
        &mut self,
        gateway: &G,
        form: &ProjectForm,
    ) -> Result<Project, Notice> {
        let credentials = form.validate().map_err(|err| Notice::from_form(&err))?;
        let joined = gateway.join_project(&credentials).await.map_err(|err| {
            tracing::warn!(error = %err, project_id = %credentials.project_id, "Join project failed");
            Notice::error("Failed to join project")
        })?;
        let project = joined.ok_or_else(|| Notice::error("Invalid project ID or password"))?;
        self.enter(&project);
        Ok(project)
    }

    fn enter(&mut self, project: &Project) {
        // The in-memory marker is set even if the file write fails.
        if let Err(err) = self.login(&project.project_id) {
            tracing::warn!(error = %err, "Could not persist session");
            self.project_id = Some(project.project_id.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::testing::FakeGateway;

    #[test]
    fn login_and_logout_round_trip_through_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session");

        let mut session = Session::open(&path).unwrap();
        assert!(!session.is_logged_in());

        session.login("apollo").unwrap();
        let reopened = Session::open(&path).unwrap();
        assert_eq!(reopened.current_project(), Some("apollo"));

        session.logout().unwrap();
        assert!(!path.exists());
        assert_eq!(Session::open(&path).unwrap().current_project(), None);
    }

    #[test]
    fn logout_without_file_is_fine() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = Session::open(dir.path().join("missing")).unwrap();
        assert!(session.logout().is_ok());
    }

    #[tokio::test]
    async fn blank_form_never_reaches_the_server() {
        let gateway = FakeGateway::default();
        let mut session = Session::new();

        let notice = session
            .create_project(&gateway, &ProjectForm::new("", "pw"))
            .await
            .unwrap_err();

        assert_eq!(notice.title, "Please fill all fields");
        assert_eq!(gateway.calls(), 0);
        assert!(!session.is_logged_in());
    }

    #[tokio::test]
    async fn create_then_join_logs_in() {
        let gateway = FakeGateway::default();
        let mut session = Session::new();

        session
            .create_project(&gateway, &ProjectForm::new("apollo", "pw"))
            .await
            .unwrap();
        assert_eq!(session.current_project(), Some("apollo"));

        session.logout().unwrap();
        let project = session
            .join_project(&gateway, &ProjectForm::new("apollo", "pw"))
            .await
            .unwrap();
        assert_eq!(project.project_id, "apollo");
        assert!(session.is_logged_in());
    }

    #[tokio::test]
    async fn wrong_password_reports_invalid_credentials() {
        let gateway = FakeGateway::default();
        let mut session = Session::new();
        session
            .create_project(&gateway, &ProjectForm::new("apollo", "pw"))
            .await
            .unwrap();
        session.logout().unwrap();

        let result = session
            .join_project(&gateway, &ProjectForm::new("apollo", "nope"))
            .await;

        assert_matches!(result, Err(notice) if notice.title == "Invalid project ID or password");
        assert!(!session.is_logged_in());
    }

    #[tokio::test]
    async fn transport_failure_reports_join_failure() {
        let gateway = FakeGateway::default();
        gateway.fail_everything();
        let mut session = Session::new();

        let notice = session
            .join_project(&gateway, &ProjectForm::new("apollo", "pw"))
            .await
            .unwrap_err();

        assert_eq!(notice.title, "Failed to join project");
        assert!(notice.is_error());
    }
}
