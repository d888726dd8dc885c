//! # Path Builder
//!
//! In-progress custom path assembled from the resource pool before it is
//! handed to [`CatalogManager::add_custom_path`](super::CatalogManager::add_custom_path).

use super::filter::SearchFilter;
use super::types::Resource;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rejections raised before a draft may be saved
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("a learning path needs a title")]
    MissingTitle,
    #[error("a learning path needs at least one resource")]
    NoResources,
}

/// User input for a new custom path
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PathDraft {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub resources: Vec<Resource>,
}

impl PathDraft {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            resources: Vec::new(),
        }
    }

    pub fn contains(&self, resource_id: &str) -> bool {
        self.resources.iter().any(|r| r.id == resource_id)
    }

    /// Append a resource unless one with the same id is already selected.
    ///
    /// Returns whether it was added.
    pub fn add_resource(&mut self, resource: Resource) -> bool {
        if self.contains(&resource.id) {
            return false;
        }
        self.resources.push(resource);
        true
    }

    /// Drop the selected resource with `resource_id`; returns whether one was removed
    pub fn remove_resource(&mut self, resource_id: &str) -> bool {
        let before = self.resources.len();
        self.resources.retain(|r| r.id != resource_id);
        self.resources.len() != before
    }

    /// Check the invariants a saved path must satisfy
    pub fn validate(&self) -> Result<(), DraftError> {
        if self.title.trim().is_empty() {
            return Err(DraftError::MissingTitle);
        }
        if self.resources.is_empty() {
            return Err(DraftError::NoResources);
        }
        Ok(())
    }

    /// Pool resources that match `filter` and are not already selected
    pub fn available<'a>(
        &self,
        pool: impl IntoIterator<Item = &'a Resource>,
        filter: &SearchFilter,
    ) -> Vec<&'a Resource> {
        pool.into_iter()
            .filter(|r| filter.matches(*r) && !self.contains(&r.id))
            .collect()
    }
}
