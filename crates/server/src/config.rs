//! Persisted server configuration (`<runtime>/config.json`).

use pathfinder_core::catalog::CatalogOptions;
use pathfinder_core::state::io;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use utoipa::ToSchema;

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Every field is optional; unset fields fall back to [`ConfigDefaults`]
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq, ToSchema)]
pub struct PersistedConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    /// Theme used while no dark-mode preference has been stored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefer_dark: Option<bool>,
    /// Keep predefined-path completion across restarts (read at startup)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub persist_predefined_progress: Option<bool>,
}

impl PersistedConfig {
    pub fn path() -> PathBuf {
        io::get_runtime_path().join(CONFIG_FILE_NAME)
    }

    /// Load from the runtime directory; missing or unreadable files give defaults
    pub async fn load() -> Self {
        Self::load_from(&Self::path()).await
    }

    pub async fn load_from(path: &std::path::Path) -> Self {
        match io::read_optional(path).await {
            Ok(Some(content)) => serde_json::from_str(&content).unwrap_or_else(|e| {
                tracing::warn!("Ignoring unreadable config {}: {}", path.display(), e);
                Self::default()
            }),
            Ok(None) => Self::default(),
            Err(e) => {
                tracing::warn!("{:#}", e);
                Self::default()
            }
        }
    }

    pub async fn save(&self) -> anyhow::Result<()> {
        self.save_to(&Self::path()).await
    }

    pub async fn save_to(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        io::write_file(path, &content).await
    }

    /// Overwrite fields that are set in `other`
    pub fn merge(&mut self, other: PersistedConfig) {
        if other.port.is_some() {
            self.port = other.port;
        }
        if other.prefer_dark.is_some() {
            self.prefer_dark = other.prefer_dark;
        }
        if other.persist_predefined_progress.is_some() {
            self.persist_predefined_progress = other.persist_predefined_progress;
        }
    }

    pub fn port(&self) -> u16 {
        self.port.unwrap_or(ConfigDefaults::default().port)
    }

    pub fn prefer_dark(&self) -> bool {
        self.prefer_dark
            .unwrap_or(ConfigDefaults::default().prefer_dark)
    }

    pub fn catalog_options(&self) -> CatalogOptions {
        CatalogOptions {
            persist_predefined_progress: self
                .persist_predefined_progress
                .unwrap_or(ConfigDefaults::default().persist_predefined_progress),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ConfigDefaults {
    pub port: u16,
    pub prefer_dark: bool,
    pub persist_predefined_progress: bool,
}

impl Default for ConfigDefaults {
    fn default() -> Self {
        Self {
            port: 8080,
            prefer_dark: false,
            persist_predefined_progress: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_only_overwrites_set_fields() {
        let mut config = PersistedConfig {
            port: Some(9000),
            prefer_dark: Some(true),
            persist_predefined_progress: None,
        };
        config.merge(PersistedConfig {
            persist_predefined_progress: Some(true),
            ..Default::default()
        });

        assert_eq!(config.port(), 9000);
        assert!(config.prefer_dark());
        assert!(config.catalog_options().persist_predefined_progress);
    }

    #[test]
    fn test_defaults_apply_when_unset() {
        let config = PersistedConfig::default();
        assert_eq!(config.port(), 8080);
        assert!(!config.prefer_dark());
        assert!(!config.catalog_options().persist_predefined_progress);
    }

    #[tokio::test]
    async fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);

        assert_eq!(PersistedConfig::load_from(&path).await, PersistedConfig::default());

        let config = PersistedConfig {
            port: Some(3000),
            ..Default::default()
        };
        config.save_to(&path).await.unwrap();
        assert_eq!(PersistedConfig::load_from(&path).await, config);
    }

    #[tokio::test]
    async fn test_corrupt_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        tokio::fs::write(&path, "not json").await.unwrap();
        assert_eq!(PersistedConfig::load_from(&path).await, PersistedConfig::default());
    }
}
