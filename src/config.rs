//! Configuration management for `todos`.
//!
//! This module handles the optional `~/.todos/config.yaml` file. Unlike the
//! store blob (which fails soft on corruption), a config file that exists
//! but does not parse is reported as an error so the user can fix it.

use crate::error::Result;
use crate::paths;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// User configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct TodoConfig {
    /// Override for the store file location.
    /// None means the default `~/.todos/todos-v1.json`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_path: Option<PathBuf>,
}

impl TodoConfig {
    /// Load config from the default location, returning None if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load() -> Result<Option<Self>> {
        match paths::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(None),
        }
    }

    /// Load config from a specific file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load_from(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        Ok(Some(config))
    }

    /// Save config to a specific file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_from_missing_file_returns_none() {
        let dir = TempDir::new().unwrap();
        let config = TodoConfig::load_from(&dir.path().join("config.yaml")).unwrap();
        assert!(config.is_none());
    }

    #[test]
    fn test_load_from_parses_store_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "store_path: /tmp/my-todos.json\n").unwrap();

        let config = TodoConfig::load_from(&path).unwrap().unwrap();
        assert_eq!(config.store_path, Some(PathBuf::from("/tmp/my-todos.json")));
    }

    #[test]
    fn test_load_from_empty_mapping_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "{}\n").unwrap();

        let config = TodoConfig::load_from(&path).unwrap().unwrap();
        assert_eq!(config, TodoConfig::default());
    }

    #[test]
    fn test_load_from_malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "store_path: [not, a, path\n").unwrap();

        assert!(TodoConfig::load_from(&path).is_err());
    }

    #[test]
    fn test_save_to_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.yaml");

        let config = TodoConfig { store_path: Some(PathBuf::from("/data/todos.json")) };
        config.save_to(&path).unwrap();

        let loaded = TodoConfig::load_from(&path).unwrap().unwrap();
        assert_eq!(loaded, config);
    }
}
