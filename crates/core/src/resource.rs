//! Project resources: ordered name/value pairs scoped to one project.

use serde::{Deserialize, Serialize};

use crate::types::{new_doc_id, DocId};

/// A single name/value pair.
///
/// `_id` is accepted as an input alias so whole-array payloads written by
/// older clients still deserialize. An empty id is replaced on write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    #[serde(default, alias = "_id")]
    pub id: DocId,
    pub name: String,
    pub value: String,
}

/// Payload for adding one resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateResource {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub value: String,
}

impl CreateResource {
    pub fn into_resource(self, id: DocId) -> Resource {
        Resource {
            id,
            name: self.name,
            value: self.value,
        }
    }
}

/// Partial update for one resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateResource {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl UpdateResource {
    /// Apply the present fields. Returns `true` if anything changed.
    pub fn apply(&self, resource: &mut Resource) -> bool {
        let mut changed = false;
        if let Some(name) = &self.name {
            changed |= resource.name != *name;
            resource.name.clone_from(name);
        }
        if let Some(value) = &self.value {
            changed |= resource.value != *value;
            resource.value.clone_from(value);
        }
        changed
    }
}

/// Prepare a whole-array replacement for storage.
///
/// Missing ids are generated; a repeated id keeps only its first occurrence.
pub fn normalize_resources(resources: &[Resource]) -> Vec<Resource> {
    let mut out: Vec<Resource> = Vec::with_capacity(resources.len());
    for resource in resources {
        let mut resource = resource.clone();
        if resource.id.is_empty() {
            resource.id = new_doc_id();
        }
        if out.iter().all(|r| r.id != resource.id) {
            out.push(resource);
        }
    }
    out
}
