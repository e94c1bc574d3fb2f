//! Mock implementations for testing.
//!
//! Test doubles for every collaborator of the session cache, so the cache
//! and the sync scheduler can be exercised without touching the file
//! system or the platform.
//!
//! # Available Mocks
//!
//! - [`MockStorage`] - Fixed storage root with injectable failure
//! - [`MockDevice`] - Mutable device id that counts reads
//! - [`StaticBuildInfo`] - Fixed name and version
//! - [`CountingSyncJob`] - Records runs, optionally slow

pub mod build_info;
pub mod device;
pub mod storage;
pub mod sync_job;

pub use build_info::StaticBuildInfo;
pub use device::MockDevice;
pub use storage::MockStorage;
pub use sync_job::CountingSyncJob;
