//! Path utilities for determining data storage locations.
//!
//! All data lives under `~/.todos/`: the persisted collection in a single
//! JSON file and an optional config file next to it.

use std::path::PathBuf;

/// The base directory name for todos data.
const DATA_DIR_NAME: &str = ".todos";

/// The store filename (the single persisted slot).
pub const STORE_FILENAME: &str = "todos-v1.json";

/// The config filename.
pub const CONFIG_FILENAME: &str = "config.yaml";

/// Get the base data directory for todos.
///
/// Returns `~/.todos/` or `None` if the home directory cannot be determined.
#[must_use]
pub fn data_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(DATA_DIR_NAME))
}

/// Get the default store path.
///
/// Returns `~/.todos/todos-v1.json` or `None` if the home directory cannot
/// be determined.
#[must_use]
pub fn default_store_path() -> Option<PathBuf> {
    data_dir().map(|dir| dir.join(STORE_FILENAME))
}

/// Get the config file path.
///
/// Returns `~/.todos/config.yaml` or `None` if the home directory cannot
/// be determined.
#[must_use]
pub fn config_path() -> Option<PathBuf> {
    data_dir().map(|dir| dir.join(CONFIG_FILENAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_dir_returns_home_based_path() {
        if let Some(home) = dirs::home_dir() {
            let data = data_dir().unwrap();
            assert_eq!(data, home.join(".todos"));
        }
    }

    #[test]
    fn test_default_store_path_ends_with_filename() {
        if let Some(path) = default_store_path() {
            assert!(path.to_string_lossy().ends_with(STORE_FILENAME));
        }
    }

    #[test]
    fn test_config_path_ends_with_filename() {
        if let Some(path) = config_path() {
            assert!(path.to_string_lossy().ends_with(CONFIG_FILENAME));
        }
    }
}
