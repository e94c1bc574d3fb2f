//! Trait abstractions for the session core's collaborators.
//!
//! Every external fact or operation the session core depends on sits
//! behind one of these traits, so the composition root picks production
//! adapters and tests pick the doubles in [`crate::adapters::mock`].
//!
//! # Traits
//!
//! - [`StorageProvider`] - persistent storage handle for the connection client
//! - [`DeviceInfoProvider`] - per-install device id and OS version
//! - [`BuildInfoProvider`] - application name and version
//! - [`SyncJob`] - the contact synchronization job run by the scheduler
//! - [`ClientSource`] - access to the process-wide connection client

pub mod build_info;
pub mod client;
pub mod device;
pub mod storage;
pub mod sync_job;

pub use build_info::BuildInfoProvider;
pub use client::ClientSource;
pub use device::DeviceInfoProvider;
pub use storage::{StorageHandle, StorageProvider};
pub use sync_job::SyncJob;
