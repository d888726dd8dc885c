//! # Durable Storage
//!
//! The `localStorage`-shaped interface the catalog and preferences persist
//! through, plus an in-process implementation for tests and ephemeral runs.

use std::collections::HashMap;
use std::sync::Mutex;
use thiserror::Error;

/// Key holding the serialized custom-path collection
pub const CUSTOM_PATHS_KEY: &str = "customPaths";

/// Key holding the dark-mode preference
pub const DARK_MODE_KEY: &str = "darkMode";

/// Key holding completed resource ids of predefined paths (opt-in)
pub const PREDEFINED_PROGRESS_KEY: &str = "predefinedProgress";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage backend error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("lock error: {0}")]
    Lock(String),
}

/// String-keyed blob storage with `localStorage` semantics
pub trait KeyValueStore: Send + Sync {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

/// Non-durable store backed by a `HashMap`
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn items(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, StorageError> {
        self.items
            .lock()
            .map_err(|e| StorageError::Lock(e.to_string()))
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items()?.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.items()?.remove(key);
        Ok(())
    }
}
