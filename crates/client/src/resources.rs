//! Name/value resources of the current project.
//!
//! Each mutation addresses a single resource by id, then the list is
//! reloaded once so the view reflects what the server stored.

use taskboard_core::resource::{CreateResource, Resource, UpdateResource};

use crate::api::BoardGateway;
use crate::notify::Notice;

pub struct ResourceManager<G> {
    gateway: G,
    project_id: String,
    resources: Vec<Resource>,
}

impl<G: BoardGateway> ResourceManager<G> {
    pub fn new(gateway: G, project_id: impl Into<String>) -> Self {
        Self {
            gateway,
            project_id: project_id.into(),
            resources: Vec::new(),
        }
    }

    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    pub async fn load(&mut self) -> Result<(), Notice> {
        match self.gateway.list_resources(&self.project_id).await {
            Ok(resources) => {
                self.resources = resources;
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, project_id = %self.project_id, "Loading resources failed");
                Err(Notice::error("Failed to load resources"))
            }
        }
    }

    pub async fn add(&mut self, name: impl Into<String>, value: impl Into<String>) -> Notice {
        let input = CreateResource {
            name: name.into(),
            value: value.into(),
        };
        match self.gateway.add_resource(&self.project_id, &input).await {
            Ok(_) => {
                self.reload().await;
                Notice::success("Resource added successfully")
            }
            Err(err) => {
                tracing::warn!(error = %err, "Add resource failed");
                Notice::error("Failed to add resource")
            }
        }
    }

    pub async fn update(&mut self, resource_id: &str, update: &UpdateResource) -> Notice {
        match self
            .gateway
            .update_resource(&self.project_id, resource_id, update)
            .await
        {
            Ok(_) => {
                self.reload().await;
                Notice::success("Resource updated successfully")
            }
            Err(err) => {
                tracing::warn!(error = %err, resource_id, "Update resource failed");
                Notice::error("Failed to update resource")
            }
        }
    }

    pub async fn delete(&mut self, resource_id: &str) -> Notice {
        match self
            .gateway
            .delete_resource(&self.project_id, resource_id)
            .await
        {
            Ok(_) => {
                self.reload().await;
                Notice::success("Resource deleted successfully")
            }
            Err(err) => {
                tracing::warn!(error = %err, resource_id, "Delete resource failed");
                Notice::error("Failed to delete resource")
            }
        }
    }

    /// Confirming reload after a write. A failure keeps the stale list.
    async fn reload(&mut self) {
        if let Err(notice) = self.load().await {
            tracing::debug!(notice = %notice.title, "Reload after write failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeGateway;

    async fn manager(gateway: &FakeGateway) -> ResourceManager<FakeGateway> {
        gateway.seed_project("apollo").await;
        let mut manager = ResourceManager::new(gateway.clone(), "apollo");
        manager.load().await.unwrap();
        manager
    }

    #[tokio::test]
    async fn add_update_delete_round_trip() {
        let gateway = FakeGateway::default();
        let mut manager = manager(&gateway).await;

        assert_eq!(manager.add("Docs", "v1").await.title, "Resource added successfully");
        assert_eq!(manager.add("Repo", "git").await.title, "Resource added successfully");
        let docs_id = manager.resources()[0].id.clone();

        let update = UpdateResource {
            name: None,
            value: Some("v2".into()),
        };
        assert_eq!(manager.update(&docs_id, &update).await.title, "Resource updated successfully");
        assert_eq!(manager.resources()[0].value, "v2");

        assert_eq!(manager.delete(&docs_id).await.title, "Resource deleted successfully");
        assert_eq!(manager.resources().len(), 1);
        assert_eq!(manager.resources()[0].name, "Repo");
    }

    #[tokio::test]
    async fn failures_keep_the_list_and_report() {
        let gateway = FakeGateway::default();
        let mut manager = manager(&gateway).await;
        manager.add("Docs", "v1").await;
        gateway.fail_everything();

        assert_eq!(manager.add("X", "y").await.title, "Failed to add resource");
        assert_eq!(manager.delete("anything").await.title, "Failed to delete resource");
        let update = UpdateResource::default();
        assert_eq!(manager.update("anything", &update).await.title, "Failed to update resource");
        assert_eq!(manager.resources().len(), 1);
    }
}
