//! Persistent storage provider trait abstraction.

use std::path::{Path, PathBuf};

use crate::error::SessionResult;

/// Handle to the application's persistent store.
///
/// The connection client keeps its local cache under `root`. The handle is
/// cheap to clone and compares equal when it points at the same directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StorageHandle {
    root: PathBuf,
}

impl StorageHandle {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory backing the store.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of a file inside the store.
    pub fn file(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}

/// Supplies the storage handle used to build the connection client.
///
/// The provider is expected to be initialized before the first call.
pub trait StorageProvider: Send + Sync {
    /// Get the handle to the persistent store.
    fn storage(&self) -> SessionResult<StorageHandle>;
}
