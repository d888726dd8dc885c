//! # Theme Preference
//!
//! Persisted dark-mode flag. An absent or unreadable value falls back to the
//! caller-supplied default (the host's colour-scheme preference).

use super::storage::{KeyValueStore, StorageError, DARK_MODE_KEY};
use std::sync::Arc;

pub struct ThemePreference {
    store: Arc<dyn KeyValueStore>,
    dark_mode: bool,
}

impl ThemePreference {
    /// Read the stored flag, falling back to `prefer_dark`
    pub fn load(store: Arc<dyn KeyValueStore>, prefer_dark: bool) -> Self {
        let dark_mode = match store.get_item(DARK_MODE_KEY) {
            Ok(Some(raw)) => serde_json::from_str::<bool>(&raw).unwrap_or_else(|e| {
                tracing::warn!("Ignoring unreadable {} value {:?}: {}", DARK_MODE_KEY, raw, e);
                prefer_dark
            }),
            Ok(None) => prefer_dark,
            Err(e) => {
                tracing::warn!("Failed to read {}: {}", DARK_MODE_KEY, e);
                prefer_dark
            }
        };

        Self { store, dark_mode }
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn set_dark_mode(&mut self, dark_mode: bool) -> Result<(), StorageError> {
        self.dark_mode = dark_mode;
        self.store
            .set_item(DARK_MODE_KEY, if dark_mode { "true" } else { "false" })
    }

    /// Flip the flag and persist it; returns the new value
    pub fn toggle(&mut self) -> Result<bool, StorageError> {
        self.set_dark_mode(!self.dark_mode)?;
        Ok(self.dark_mode)
    }
}
