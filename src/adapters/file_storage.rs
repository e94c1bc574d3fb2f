//! File-system storage provider adapter.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{SessionError, SessionResult};
use crate::traits::{StorageHandle, StorageProvider};

/// Directory name under the platform data directory.
const APP_DIR: &str = "parley";

/// Storage provider backed by a directory on disk.
///
/// The directory is created on first use.
///
/// # Example
///
/// ```ignore
/// use parley::adapters::FileStorage;
/// use parley::traits::StorageProvider;
///
/// let storage = FileStorage::default_location()?;
/// let handle = storage.storage()?;
/// println!("Storing data in {}", handle.root().display());
/// ```
#[derive(Debug, Clone)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Storage in the platform data directory, e.g. `~/.local/share/parley`.
    pub fn default_location() -> SessionResult<Self> {
        dirs::data_dir()
            .map(|dir| Self::new(dir.join(APP_DIR)))
            .ok_or_else(|| {
                SessionError::Storage("Failed to determine data directory".to_string())
            })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl StorageProvider for FileStorage {
    fn storage(&self) -> SessionResult<StorageHandle> {
        fs::create_dir_all(&self.root).map_err(|e| {
            SessionError::Storage(format!(
                "Failed to create storage directory {}: {}",
                self.root.display(),
                e
            ))
        })?;
        Ok(StorageHandle::new(self.root.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creates_directory() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("nested").join("parley");
        let storage = FileStorage::new(&root);

        let handle = storage.storage().unwrap();
        assert!(root.is_dir());
        assert_eq!(handle.root(), root.as_path());
    }

    #[test]
    fn test_storage_fails_when_root_is_a_file() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("occupied");
        fs::write(&file, "x").unwrap();

        let err = FileStorage::new(&file).storage().unwrap_err();
        assert!(matches!(err, SessionError::Storage(_)));
    }
}
