//! Periodic contact synchronization.
//!
//! [`SyncScheduler`] pairs a [`crate::timer::RepeatingTimer`] with a
//! [`crate::traits::SyncJob`]. Each run (immediate or timer-driven) is
//! spawned as its own task and forgotten: the scheduler never waits for a
//! run, inspects its outcome, or retries it.

mod scheduler;
mod stats;

pub use scheduler::{SyncScheduler, DEFAULT_SYNC_INTERVAL};
pub use stats::{SyncStats, SyncTrigger};
