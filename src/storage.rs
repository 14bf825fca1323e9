//! Persistence adapter for the todo collection.
//!
//! The collection is persisted as a single JSON blob in a fixed file,
//! overwritten whole on every save. Loading fails soft: a missing or
//! corrupt blob yields an empty collection, never an error.

use crate::error::Result;
use crate::todos::models::Todo;
use std::path::{Path, PathBuf};

/// Trait for persisting the todo collection.
///
/// The store owns the authoritative in-memory collection; an adapter only
/// ever receives a full snapshot and never retains its own copy. The trait
/// exists so unit tests can substitute an in-memory implementation.
pub trait TodoStorage {
    /// Load the persisted collection.
    ///
    /// Total over its input: missing or unparseable data yields an empty
    /// collection. Parse errors are swallowed, never propagated.
    fn load(&self) -> Vec<Todo>;

    /// Serialize the full collection and overwrite the slot unconditionally.
    ///
    /// # Errors
    ///
    /// Returns an error if the blob cannot be serialized or written.
    fn save(&self, todos: &[Todo]) -> Result<()>;
}

/// File-backed storage holding the collection as a JSON array.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    /// Create storage backed by the given file path.
    ///
    /// The file is not touched until the first save; a nonexistent file
    /// simply loads as an empty collection.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self { path: path.as_ref().to_path_buf() }
    }

    /// Get the backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TodoStorage for JsonFileStorage {
    fn load(&self) -> Vec<Todo> {
        let Ok(raw) = std::fs::read_to_string(&self.path) else {
            return Vec::new();
        };
        serde_json::from_str(&raw).unwrap_or_default()
    }

    fn save(&self, todos: &[Todo]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let blob = serde_json::to_string(todos)?;
        std::fs::write(&self.path, blob)?;
        Ok(())
    }
}
