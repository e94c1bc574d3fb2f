//! Concrete implementations of trait abstractions.
//!
//! Production adapters implementing the traits defined in `crate::traits`,
//! plus the wiring that assembles them into the session cache's
//! collaborators.
//!
//! # Adapters
//!
//! - [`FileStorage`] - Storage rooted in the platform data directory
//! - [`SystemDevice`] - Device id persisted in storage, OS from the host
//! - [`CargoBuildInfo`] - Name and version from Cargo metadata
//! - [`CommandSyncJob`] - Sync job running an external command
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles for all adapters:
//! - [`mock::MockStorage`] - Fixed root with injectable failure
//! - [`mock::MockDevice`] - Settable device id with read counting
//! - [`mock::StaticBuildInfo`] - Fixed name and version
//! - [`mock::CountingSyncJob`] - Records runs

pub mod cargo_build_info;
pub mod command_sync;
pub mod file_storage;
pub mod mock;
pub mod system_device;

pub use cargo_build_info::CargoBuildInfo;
pub use command_sync::CommandSyncJob;
pub use file_storage::FileStorage;
pub use mock::{CountingSyncJob, MockDevice, MockStorage, StaticBuildInfo};
pub use system_device::SystemDevice;

use std::sync::Arc;

use crate::config::SessionConfig;
use crate::session::Collaborators;
use crate::traits::StorageProvider;

/// Assemble the production collaborators for a session cache.
pub fn production_collaborators(config: &SessionConfig, storage: FileStorage) -> Collaborators {
    let storage: Arc<dyn StorageProvider> = Arc::new(storage);
    Collaborators {
        build_info: Arc::new(CargoBuildInfo),
        device: Arc::new(SystemDevice::new(Arc::clone(&storage))),
        storage,
        sync_job: Arc::new(CommandSyncJob::new(config.sync_command.clone())),
    }
}
