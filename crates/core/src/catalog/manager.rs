//! # Catalog Manager
//!
//! Owns the predefined curricula and the user's custom paths. Predefined
//! paths are rebuilt from the seed on every open; custom paths are read once
//! from storage and re-serialized in full after every change to them.

use super::draft::PathDraft;
use super::seed::predefined_paths;
use super::types::{LearningPath, Resource, CUSTOM_PATH_PREFIX};
use crate::state::storage::{
    KeyValueStore, StorageError, CUSTOM_PATHS_KEY, PREDEFINED_PROGRESS_KEY,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

/// Version written into the stored custom-path envelope
pub const CUSTOM_PATHS_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("failed to serialize catalog state: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Which collection a path lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    Predefined,
    Custom,
}

impl PathKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Predefined => "predefined",
            Self::Custom => "custom",
        }
    }
}

impl fmt::Display for PathKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Result of [`CatalogManager::update_progress`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressOutcome {
    /// A resource flag was set and progress recomputed
    Updated {
        kind: PathKind,
        progress: Option<u8>,
    },
    /// The path exists but has no resource with that id
    UnknownResource {
        kind: PathKind,
        progress: Option<u8>,
    },
    /// No path with that id; nothing changed
    UnknownPath,
}

/// Result of [`CatalogManager::delete_path`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    /// Predefined paths cannot be removed
    Protected,
    NotFound,
}

/// Behaviour switches read from configuration
#[derive(Debug, Clone, Copy, Default)]
pub struct CatalogOptions {
    /// Keep predefined-path completion across restarts
    pub persist_predefined_progress: bool,
}

#[derive(Serialize)]
struct CustomPathsEnvelope<'a> {
    version: u32,
    paths: &'a [LearningPath],
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StoredCustomPaths {
    Versioned {
        version: u32,
        paths: Vec<LearningPath>,
    },
    /// Bare array written before the envelope existed
    Legacy(Vec<LearningPath>),
}

/// Completed resource ids keyed by predefined path id
type PredefinedProgress = BTreeMap<String, Vec<String>>;

/// Single source of truth for path data
pub struct CatalogManager {
    predefined: Vec<LearningPath>,
    custom: Vec<LearningPath>,
    store: Arc<dyn KeyValueStore>,
    options: CatalogOptions,
}

impl CatalogManager {
    /// Seed the predefined paths and load custom paths from `store`
    pub fn open(store: Arc<dyn KeyValueStore>, options: CatalogOptions) -> Self {
        let custom = load_custom_paths(store.as_ref());
        let mut manager = Self {
            predefined: predefined_paths(),
            custom,
            store,
            options,
        };

        if options.persist_predefined_progress {
            manager.restore_predefined_progress();
        }

        tracing::info!(
            "Catalog opened with {} predefined and {} custom paths",
            manager.predefined.len(),
            manager.custom.len()
        );
        manager
    }

    pub fn list_predefined_paths(&self) -> &[LearningPath] {
        &self.predefined
    }

    pub fn list_custom_paths(&self) -> &[LearningPath] {
        &self.custom
    }

    /// Custom paths created by `user_id`
    pub fn custom_paths_for<'a>(
        &'a self,
        user_id: &'a str,
    ) -> impl Iterator<Item = &'a LearningPath> + 'a {
        self.custom
            .iter()
            .filter(move |p| p.user_id.as_deref() == Some(user_id))
    }

    /// Resources available to the path builder, in catalog order
    pub fn resource_pool(&self) -> impl Iterator<Item = &Resource> {
        self.predefined.iter().flat_map(|p| p.resources.iter())
    }

    pub fn kind_of(&self, path_id: &str) -> Option<PathKind> {
        if self.custom.iter().any(|p| p.id == path_id) {
            Some(PathKind::Custom)
        } else if self.predefined.iter().any(|p| p.id == path_id) {
            Some(PathKind::Predefined)
        } else {
            None
        }
    }

    pub fn get_path(&self, path_id: &str) -> Option<(PathKind, &LearningPath)> {
        let kind = self.kind_of(path_id)?;
        self.collection(kind)
            .iter()
            .find(|p| p.id == path_id)
            .map(|p| (kind, p))
    }

    fn collection(&self, kind: PathKind) -> &Vec<LearningPath> {
        match kind {
            PathKind::Predefined => &self.predefined,
            PathKind::Custom => &self.custom,
        }
    }

    fn collection_mut(&mut self, kind: PathKind) -> &mut Vec<LearningPath> {
        match kind {
            PathKind::Predefined => &mut self.predefined,
            PathKind::Custom => &mut self.custom,
        }
    }

    /// Append a new custom path built from `draft`.
    ///
    /// The draft is not validated here; callers run [`PathDraft::validate`]
    /// first. Every resource starts uncompleted and progress starts at 0.
    pub fn add_custom_path(
        &mut self,
        draft: PathDraft,
        owner: Option<&str>,
    ) -> Result<LearningPath, CatalogError> {
        let path = LearningPath {
            id: generate_custom_path_id(),
            title: draft.title,
            description: draft.description,
            resources: draft
                .resources
                .into_iter()
                .map(|r| Resource {
                    completed: false,
                    ..r
                })
                .collect(),
            progress: Some(0),
            is_custom: Some(true),
            user_id: owner.map(str::to_string),
        };

        tracing::debug!("Adding custom path {} ({})", path.id, path.title);
        let mut candidate = self.custom.clone();
        candidate.push(path.clone());
        self.commit_custom(candidate)?;
        Ok(path)
    }

    /// Set the completion flag of one resource and recompute the path's progress
    pub fn update_progress(
        &mut self,
        path_id: &str,
        resource_id: &str,
        completed: bool,
    ) -> Result<ProgressOutcome, CatalogError> {
        let Some(kind) = self.kind_of(path_id) else {
            tracing::debug!("Progress update for unknown path {}", path_id);
            return Ok(ProgressOutcome::UnknownPath);
        };

        // Mutate a copy so a failed write leaves the collection untouched
        let mut candidate = self.collection(kind).clone();
        let Some(path) = candidate.iter_mut().find(|p| p.id == path_id) else {
            return Ok(ProgressOutcome::UnknownPath);
        };

        let matched = path.set_completed(resource_id, completed);
        let progress = path.progress;

        tracing::debug!(
            "Path {} resource {} completed={} -> progress {:?}",
            path_id,
            resource_id,
            completed,
            progress
        );

        match kind {
            PathKind::Custom => self.write_custom(&candidate)?,
            PathKind::Predefined if self.options.persist_predefined_progress => {
                self.write_predefined_progress(&candidate)?
            }
            PathKind::Predefined => {}
        }
        *self.collection_mut(kind) = candidate;

        Ok(if matched {
            ProgressOutcome::Updated { kind, progress }
        } else {
            ProgressOutcome::UnknownResource { kind, progress }
        })
    }

    /// Remove a custom path; predefined and unknown ids change nothing
    pub fn delete_path(&mut self, path_id: &str) -> Result<DeleteOutcome, CatalogError> {
        match self.kind_of(path_id) {
            Some(PathKind::Custom) => {
                let candidate = self
                    .custom
                    .iter()
                    .filter(|p| p.id != path_id)
                    .cloned()
                    .collect();
                self.commit_custom(candidate)?;
                tracing::debug!("Deleted custom path {}", path_id);
                Ok(DeleteOutcome::Deleted)
            }
            Some(PathKind::Predefined) => Ok(DeleteOutcome::Protected),
            None => Ok(DeleteOutcome::NotFound),
        }
    }

    /// Store `candidate`, then make it the live custom collection
    fn commit_custom(&mut self, candidate: Vec<LearningPath>) -> Result<(), CatalogError> {
        self.write_custom(&candidate)?;
        self.custom = candidate;
        Ok(())
    }

    fn write_custom(&self, paths: &[LearningPath]) -> Result<(), CatalogError> {
        let envelope = CustomPathsEnvelope {
            version: CUSTOM_PATHS_SCHEMA_VERSION,
            paths,
        };
        let data = serde_json::to_string(&envelope)?;
        self.store.set_item(CUSTOM_PATHS_KEY, &data)?;
        Ok(())
    }

    fn write_predefined_progress(&self, paths: &[LearningPath]) -> Result<(), CatalogError> {
        let progress: PredefinedProgress = paths
            .iter()
            .map(|p| {
                let done = p
                    .resources
                    .iter()
                    .filter(|r| r.completed)
                    .map(|r| r.id.clone())
                    .collect::<Vec<_>>();
                (p.id.clone(), done)
            })
            .filter(|(_, done)| !done.is_empty())
            .collect();

        let data = serde_json::to_string(&progress)?;
        self.store.set_item(PREDEFINED_PROGRESS_KEY, &data)?;
        Ok(())
    }

    fn restore_predefined_progress(&mut self) {
        let raw = match self.store.get_item(PREDEFINED_PROGRESS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return,
            Err(e) => {
                tracing::warn!("Failed to read {}: {}", PREDEFINED_PROGRESS_KEY, e);
                return;
            }
        };

        let progress: PredefinedProgress = match serde_json::from_str(&raw) {
            Ok(progress) => progress,
            Err(e) => {
                tracing::warn!("Ignoring corrupt {}: {}", PREDEFINED_PROGRESS_KEY, e);
                return;
            }
        };

        for path in &mut self.predefined {
            if let Some(done) = progress.get(&path.id) {
                for resource_id in done {
                    path.set_completed(resource_id, true);
                }
            }
        }
    }
}

/// `custom-` followed by a random UUID
fn generate_custom_path_id() -> String {
    format!("{}{}", CUSTOM_PATH_PREFIX, Uuid::new_v4())
}

/// Read the stored custom paths; anything missing or unreadable yields an empty list
fn load_custom_paths(store: &dyn KeyValueStore) -> Vec<LearningPath> {
    let raw = match store.get_item(CUSTOM_PATHS_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            tracing::warn!("Failed to read {}: {}", CUSTOM_PATHS_KEY, e);
            return Vec::new();
        }
    };

    let paths = match serde_json::from_str::<StoredCustomPaths>(&raw) {
        Ok(StoredCustomPaths::Versioned { version, paths }) => {
            if version != CUSTOM_PATHS_SCHEMA_VERSION {
                tracing::warn!(
                    "{} has schema version {}, expected {}; reading as version {}",
                    CUSTOM_PATHS_KEY,
                    version,
                    CUSTOM_PATHS_SCHEMA_VERSION,
                    CUSTOM_PATHS_SCHEMA_VERSION
                );
            }
            paths
        }
        Ok(StoredCustomPaths::Legacy(paths)) => paths,
        Err(e) => {
            tracing::warn!("Ignoring corrupt {}: {}", CUSTOM_PATHS_KEY, e);
            return Vec::new();
        }
    };

    paths
        .into_iter()
        .filter(|p| {
            let valid = p.id.starts_with(CUSTOM_PATH_PREFIX);
            if !valid {
                tracing::warn!("Dropping stored custom path without prefix: {}", p.id);
            }
            valid
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::types::{Difficulty, ResourceType};
    use crate::state::storage::MemoryStore;

    fn store() -> Arc<dyn KeyValueStore> {
        Arc::new(MemoryStore::new())
    }

    fn manager(store: &Arc<dyn KeyValueStore>) -> CatalogManager {
        CatalogManager::open(Arc::clone(store), CatalogOptions::default())
    }

    fn sample_resource(id: &str, completed: bool) -> Resource {
        Resource {
            id: id.to_string(),
            title: format!("Resource {}", id),
            description: String::new(),
            url: format!("https://example.com/{}", id),
            kind: ResourceType::Video,
            difficulty: Difficulty::Beginner,
            topics: vec!["Testing".to_string()],
            completed,
        }
    }

    fn draft(resources: Vec<Resource>) -> PathDraft {
        PathDraft {
            title: "My Path".to_string(),
            description: String::new(),
            resources,
        }
    }

    fn ids(paths: &[LearningPath]) -> Vec<String> {
        paths.iter().map(|p| p.id.clone()).collect()
    }

    #[test]
    fn test_fullstack_progress_scenario() {
        let store = store();
        let mut catalog = manager(&store);

        let (kind, fullstack) = catalog.get_path("fullstack").unwrap();
        assert_eq!(kind, PathKind::Predefined);
        assert_eq!(fullstack.resources.len(), 5);
        assert_eq!(fullstack.progress, None);

        let outcome = catalog.update_progress("fullstack", "html-css", true).unwrap();
        assert_eq!(
            outcome,
            ProgressOutcome::Updated {
                kind: PathKind::Predefined,
                progress: Some(20)
            }
        );

        catalog.update_progress("fullstack", "javascript", true).unwrap();
        assert_eq!(catalog.get_path("fullstack").unwrap().1.progress, Some(40));

        catalog.update_progress("fullstack", "html-css", false).unwrap();
        assert_eq!(catalog.get_path("fullstack").unwrap().1.progress, Some(20));
    }

    #[test]
    fn test_add_custom_path_scenario() {
        let store = store();
        let mut catalog = manager(&store);

        let path = catalog
            .add_custom_path(
                draft(vec![sample_resource("r1", true), sample_resource("r2", false)]),
                Some("u1"),
            )
            .unwrap();

        assert!(path.id.starts_with(CUSTOM_PATH_PREFIX));
        assert_eq!(path.is_custom, Some(true));
        assert_eq!(path.user_id.as_deref(), Some("u1"));
        assert_eq!(path.progress, Some(0));
        assert_eq!(path.resources.len(), 2);
        assert!(path.resources.iter().all(|r| !r.completed));
        assert_eq!(catalog.list_custom_paths(), &[path]);
    }

    #[test]
    fn test_rapid_creation_yields_distinct_ids() {
        let store = store();
        let mut catalog = manager(&store);
        for _ in 0..50 {
            catalog
                .add_custom_path(draft(vec![sample_resource("r", false)]), None)
                .unwrap();
        }
        let mut ids = ids(catalog.list_custom_paths());
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 50);
    }

    #[test]
    fn test_progress_tracks_completed_ratio() {
        let store = store();
        let mut catalog = manager(&store);
        let resources = (0..3).map(|i| sample_resource(&format!("r{}", i), false));
        let path = catalog
            .add_custom_path(draft(resources.collect()), None)
            .unwrap();

        let toggles = [("r0", true), ("r2", true), ("r0", false), ("r1", true)];
        for (resource_id, completed) in toggles {
            catalog.update_progress(&path.id, resource_id, completed).unwrap();
            let current = catalog.get_path(&path.id).unwrap().1;
            let expected = crate::catalog::types::progress_percent(
                current.completed_count(),
                current.resources.len(),
            );
            assert_eq!(current.progress, expected);
        }
        assert_eq!(catalog.get_path(&path.id).unwrap().1.progress, Some(67));
    }

    #[test]
    fn test_unknown_path_changes_nothing() {
        let store = store();
        let mut catalog = manager(&store);
        catalog
            .add_custom_path(draft(vec![sample_resource("r1", false)]), None)
            .unwrap();

        let predefined_before = catalog.list_predefined_paths().to_vec();
        let custom_before = catalog.list_custom_paths().to_vec();

        let outcome = catalog.update_progress("custom-missing", "r1", true).unwrap();
        assert_eq!(outcome, ProgressOutcome::UnknownPath);
        assert_eq!(catalog.list_predefined_paths(), predefined_before.as_slice());
        assert_eq!(catalog.list_custom_paths(), custom_before.as_slice());
    }

    #[test]
    fn test_unknown_resource_reports_unchanged_progress() {
        let store = store();
        let mut catalog = manager(&store);
        catalog.update_progress("datascience", "python", true).unwrap();

        let outcome = catalog.update_progress("datascience", "nope", true).unwrap();
        assert_eq!(
            outcome,
            ProgressOutcome::UnknownResource {
                kind: PathKind::Predefined,
                progress: Some(20)
            }
        );
    }

    #[test]
    fn test_delete_predefined_is_protected() {
        let store = store();
        let mut catalog = manager(&store);
        catalog
            .add_custom_path(draft(vec![sample_resource("r1", false)]), None)
            .unwrap();
        let before = ids(catalog.list_custom_paths());

        assert_eq!(catalog.delete_path("fullstack").unwrap(), DeleteOutcome::Protected);
        assert_eq!(catalog.delete_path("custom-nope").unwrap(), DeleteOutcome::NotFound);
        assert_eq!(ids(catalog.list_custom_paths()), before);
        assert_eq!(catalog.list_predefined_paths().len(), 3);
    }

    #[test]
    fn test_delete_custom_persists() {
        let store = store();
        let mut catalog = manager(&store);
        let path = catalog
            .add_custom_path(draft(vec![sample_resource("r1", false)]), None)
            .unwrap();

        assert_eq!(catalog.delete_path(&path.id).unwrap(), DeleteOutcome::Deleted);
        assert!(catalog.list_custom_paths().is_empty());
        assert!(manager(&store).list_custom_paths().is_empty());
    }

    #[test]
    fn test_custom_paths_round_trip_through_storage() {
        let store = store();
        let mut catalog = manager(&store);
        let first = catalog
            .add_custom_path(draft(vec![sample_resource("a", false), sample_resource("b", false)]), Some("u1"))
            .unwrap();
        catalog
            .add_custom_path(draft(vec![sample_resource("c", false)]), None)
            .unwrap();
        catalog.update_progress(&first.id, "b", true).unwrap();

        let reloaded = manager(&store);
        assert_eq!(reloaded.list_custom_paths(), catalog.list_custom_paths());
        assert_eq!(reloaded.get_path(&first.id).unwrap().1.progress, Some(50));
    }

    #[test]
    fn test_stored_blob_is_versioned() {
        let store = store();
        let mut catalog = manager(&store);
        catalog
            .add_custom_path(draft(vec![sample_resource("a", false)]), None)
            .unwrap();

        let raw = store.get_item(CUSTOM_PATHS_KEY).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["version"], CUSTOM_PATHS_SCHEMA_VERSION);
        assert_eq!(value["paths"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_legacy_array_is_accepted() {
        let store = store();
        store
            .set_item(
                CUSTOM_PATHS_KEY,
                r#"[{"id":"custom-1700000000000","title":"Old","description":"",
                    "resources":[{"id":"x","title":"X","description":"","url":"https://x.dev",
                    "type":"book","difficulty":"advanced","topics":[],"completed":true}],
                    "progress":100,"isCustom":true}]"#,
            )
            .unwrap();

        let catalog = manager(&store);
        let (kind, path) = catalog.get_path("custom-1700000000000").unwrap();
        assert_eq!(kind, PathKind::Custom);
        assert_eq!(path.progress, Some(100));
        assert_eq!(path.resources[0].kind, ResourceType::Book);
    }

    #[test]
    fn test_corrupt_storage_fails_soft() {
        let store = store();
        store.set_item(CUSTOM_PATHS_KEY, "{not json").unwrap();
        assert!(manager(&store).list_custom_paths().is_empty());
    }

    #[test]
    fn test_stored_paths_without_prefix_are_dropped() {
        let store = store();
        store
            .set_item(
                CUSTOM_PATHS_KEY,
                r#"{"version":1,"paths":[{"id":"fullstack","title":"Spoof","description":"","resources":[]}]}"#,
            )
            .unwrap();

        let catalog = manager(&store);
        assert!(catalog.list_custom_paths().is_empty());
        assert_eq!(catalog.kind_of("fullstack"), Some(PathKind::Predefined));
    }

    #[test]
    fn test_predefined_progress_resets_by_default() {
        let store = store();
        let mut catalog = manager(&store);
        catalog.update_progress("fullstack", "html-css", true).unwrap();

        assert!(store.get_item(PREDEFINED_PROGRESS_KEY).unwrap().is_none());
        assert_eq!(manager(&store).get_path("fullstack").unwrap().1.progress, None);
    }

    #[test]
    fn test_predefined_progress_persists_when_enabled() {
        let store = store();
        let options = CatalogOptions {
            persist_predefined_progress: true,
        };
        let mut catalog = CatalogManager::open(Arc::clone(&store), options);
        catalog.update_progress("machine-learning", "nlp", true).unwrap();

        let reopened = CatalogManager::open(Arc::clone(&store), options);
        let (_, path) = reopened.get_path("machine-learning").unwrap();
        assert_eq!(path.progress, Some(20));
        assert!(path.resources.iter().any(|r| r.id == "nlp" && r.completed));
    }

    #[test]
    fn test_resource_pool_flattens_predefined() {
        let store = store();
        let catalog = manager(&store);
        let pool: Vec<_> = catalog.resource_pool().map(|r| r.id.as_str()).collect();
        assert_eq!(pool.len(), 15);
        assert_eq!(pool[0], "html-css");
        assert_eq!(pool[14], "llm-intro");
    }

    #[test]
    fn test_custom_paths_for_owner() {
        let store = store();
        let mut catalog = manager(&store);
        catalog
            .add_custom_path(draft(vec![sample_resource("a", false)]), Some("u1"))
            .unwrap();
        catalog
            .add_custom_path(draft(vec![sample_resource("b", false)]), Some("u2"))
            .unwrap();

        assert_eq!(catalog.custom_paths_for("u1").count(), 1);
    }

    /// Holds a fixed blob and rejects every write
    struct ReadOnlyStore {
        custom_paths: Option<String>,
    }

    impl KeyValueStore for ReadOnlyStore {
        fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
            Ok(match key {
                CUSTOM_PATHS_KEY => self.custom_paths.clone(),
                _ => None,
            })
        }

        fn set_item(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Lock("read-only".to_string()))
        }

        fn remove_item(&self, _key: &str) -> Result<(), StorageError> {
            Err(StorageError::Lock("read-only".to_string()))
        }
    }

    fn stored_path_blob() -> String {
        let path = LearningPath {
            id: "custom-stored".to_string(),
            title: "Stored".to_string(),
            description: String::new(),
            resources: vec![sample_resource("a", false), sample_resource("b", false)],
            progress: Some(0),
            is_custom: Some(true),
            user_id: None,
        };
        serde_json::json!({ "version": CUSTOM_PATHS_SCHEMA_VERSION, "paths": [path] }).to_string()
    }

    #[test]
    fn test_failed_write_leaves_custom_paths_unchanged() {
        let store: Arc<dyn KeyValueStore> = Arc::new(ReadOnlyStore {
            custom_paths: Some(stored_path_blob()),
        });
        let mut catalog = manager(&store);
        let before = catalog.list_custom_paths().to_vec();
        assert_eq!(before.len(), 1);

        for _ in 0..2 {
            assert!(catalog
                .add_custom_path(draft(vec![sample_resource("r1", false)]), Some("u1"))
                .is_err());
        }
        assert!(catalog.update_progress("custom-stored", "a", true).is_err());
        assert!(catalog.delete_path("custom-stored").is_err());

        assert_eq!(catalog.list_custom_paths(), before.as_slice());
        assert_eq!(catalog.get_path("custom-stored").unwrap().1.progress, Some(0));
    }

    #[test]
    fn test_failed_predefined_write_keeps_progress() {
        let store: Arc<dyn KeyValueStore> = Arc::new(ReadOnlyStore { custom_paths: None });
        let mut catalog = CatalogManager::open(
            store,
            CatalogOptions {
                persist_predefined_progress: true,
            },
        );

        assert!(catalog.update_progress("fullstack", "html-css", true).is_err());
        let (_, fullstack) = catalog.get_path("fullstack").unwrap();
        assert_eq!(fullstack.completed_count(), 0);
        assert_eq!(fullstack.progress, None);
    }

    #[test]
    fn test_unexpected_schema_version_still_loads() {
        let store = store();
        let blob = stored_path_blob().replace(
            &format!("\"version\":{}", CUSTOM_PATHS_SCHEMA_VERSION),
            "\"version\":2",
        );
        assert!(blob.contains("\"version\":2"));
        store.set_item(CUSTOM_PATHS_KEY, &blob).unwrap();

        let catalog = manager(&store);
        assert_eq!(ids(catalog.list_custom_paths()), vec!["custom-stored".to_string()]);
    }

    #[test]
    fn test_path_kind_labels() {
        assert_eq!(PathKind::Predefined.to_string(), "predefined");
        assert_eq!(PathKind::Custom.as_str(), "custom");
    }
}
