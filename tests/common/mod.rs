//! Common test utilities for integration tests.
//!
//! Fixtures for building a session cache over mock collaborators.
//!
//! # Example
//!
//! ```ignore
//! let fixture = SessionFixture::new();
//! let client = fixture.cache.client()?;
//! ```

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use parley::adapters::mock::{CountingSyncJob, MockDevice, MockStorage, StaticBuildInfo};
use parley::config::SessionConfig;
use parley::session::{Collaborators, SessionCache};

pub const TEST_DEVICE_ID: &str = "test-device-0001";
pub const TEST_OS: &str = "linux 6.8 (x86_64)";
pub const TEST_STORAGE: &str = "/tmp/parley-integration";

/// Short interval so paused-clock tests stay readable.
pub const TEST_SYNC_INTERVAL: Duration = Duration::from_secs(60);

pub fn test_config() -> SessionConfig {
    SessionConfig::default()
        .with_host_name("chat.test:443")
        .with_use_tls(true)
        .with_sync_interval(TEST_SYNC_INTERVAL)
}

/// A session cache with handles to its mock collaborators.
pub struct SessionFixture {
    pub cache: SessionCache,
    pub device: Arc<MockDevice>,
    pub storage: Arc<MockStorage>,
    pub job: Arc<CountingSyncJob>,
}

impl SessionFixture {
    pub fn new() -> Self {
        Self::with(test_config(), MockDevice::new(TEST_DEVICE_ID, TEST_OS))
    }

    pub fn with(config: SessionConfig, device: MockDevice) -> Self {
        let device = Arc::new(device);
        let storage = Arc::new(MockStorage::new(TEST_STORAGE));
        let job = Arc::new(CountingSyncJob::new());
        let collaborators = Collaborators {
            build_info: Arc::new(StaticBuildInfo::new("parley", "0.3.0")),
            device: device.clone(),
            storage: storage.clone(),
            sync_job: job.clone(),
        };
        Self {
            cache: SessionCache::new(config, collaborators),
            device,
            storage,
            job,
        }
    }
}

impl Default for SessionFixture {
    fn default() -> Self {
        Self::new()
    }
}
