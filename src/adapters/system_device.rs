//! Host device identity adapter.
//!
//! The device id is a random UUID generated on first use and persisted in
//! the storage directory, so it stays stable across restarts.

use std::fs;
use std::sync::Arc;

use crate::traits::{DeviceInfoProvider, StorageProvider};

/// File holding the persisted device id.
pub const DEVICE_ID_FILE: &str = "device_id";

pub struct SystemDevice {
    storage: Arc<dyn StorageProvider>,
}

impl SystemDevice {
    pub fn new(storage: Arc<dyn StorageProvider>) -> Self {
        Self { storage }
    }

    fn load_or_create_id(&self) -> Result<String, String> {
        let handle = self.storage.storage().map_err(|e| e.to_string())?;
        let path = handle.file(DEVICE_ID_FILE);

        if let Ok(existing) = fs::read_to_string(&path) {
            let existing = existing.trim();
            if !existing.is_empty() {
                return Ok(existing.to_string());
            }
        }

        let id = uuid::Uuid::new_v4().to_string();
        fs::write(&path, &id).map_err(|e| format!("{}: {}", path.display(), e))?;
        tracing::info!("Generated new device id {}", id);
        Ok(id)
    }
}

impl DeviceInfoProvider for SystemDevice {
    fn device_id(&self) -> Option<String> {
        match self.load_or_create_id() {
            Ok(id) => Some(id),
            Err(e) => {
                tracing::error!("Failed to load device id: {}", e);
                None
            }
        }
    }

    fn os_version(&self) -> String {
        match kernel_release() {
            Some(release) => format!(
                "{} {} ({})",
                std::env::consts::OS,
                release,
                std::env::consts::ARCH
            ),
            None => format!("{} ({})", std::env::consts::OS, std::env::consts::ARCH),
        }
    }
}

impl std::fmt::Debug for SystemDevice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SystemDevice").finish_non_exhaustive()
    }
}

#[cfg(target_os = "linux")]
fn kernel_release() -> Option<String> {
    fs::read_to_string("/proc/sys/kernel/osrelease")
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

#[cfg(not(target_os = "linux"))]
fn kernel_release() -> Option<String> {
    None
}
