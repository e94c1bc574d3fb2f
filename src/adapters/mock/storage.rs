//! Mock storage provider for testing.

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::error::{SessionError, SessionResult};
use crate::traits::{StorageHandle, StorageProvider};

/// Storage provider that hands out a fixed root without touching disk.
#[derive(Debug, Clone)]
pub struct MockStorage {
    root: PathBuf,
    should_fail: Arc<AtomicBool>,
}

impl MockStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            should_fail: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Configure whether `storage()` should fail.
    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail.store(should_fail, Ordering::SeqCst);
    }
}

impl StorageProvider for MockStorage {
    fn storage(&self) -> SessionResult<StorageHandle> {
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(SessionError::Storage("Mock storage failure".to_string()));
        }
        Ok(StorageHandle::new(self.root.clone()))
    }
}
