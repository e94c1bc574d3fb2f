//! Mock device identity for testing.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::traits::DeviceInfoProvider;

/// Device-info provider with a settable device id.
///
/// Every call to [`DeviceInfoProvider::device_id`] is counted, which lets
/// tests assert how often the session cache consulted the platform.
#[derive(Debug, Clone)]
pub struct MockDevice {
    device_id: Arc<Mutex<Option<String>>>,
    os_version: String,
    reads: Arc<AtomicUsize>,
}

impl MockDevice {
    pub fn new(device_id: impl Into<String>, os_version: impl Into<String>) -> Self {
        Self {
            device_id: Arc::new(Mutex::new(Some(device_id.into()))),
            os_version: os_version.into(),
            reads: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// A device that has not been assigned an id yet.
    pub fn without_device_id(os_version: impl Into<String>) -> Self {
        Self {
            device_id: Arc::new(Mutex::new(None)),
            os_version: os_version.into(),
            reads: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn set_device_id(&self, device_id: Option<String>) {
        *self.device_id.lock().unwrap() = device_id;
    }

    /// Number of times the device id has been read.
    pub fn device_id_reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

impl DeviceInfoProvider for MockDevice {
    fn device_id(&self) -> Option<String> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.device_id.lock().unwrap().clone()
    }

    fn os_version(&self) -> String {
        self.os_version.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_are_counted() {
        let device = MockDevice::new("abc", "linux");
        assert_eq!(device.device_id_reads(), 0);
        assert_eq!(device.device_id().as_deref(), Some("abc"));
        assert_eq!(device.device_id().as_deref(), Some("abc"));
        assert_eq!(device.device_id_reads(), 2);
    }

    #[test]
    fn test_set_device_id() {
        let device = MockDevice::without_device_id("linux");
        assert!(device.device_id().is_none());

        device.set_device_id(Some("late".to_string()));
        assert_eq!(device.device_id().as_deref(), Some("late"));
        assert_eq!(device.os_version(), "linux");
    }
}
