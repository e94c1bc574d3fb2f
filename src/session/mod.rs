//! Session lifecycle.
//!
//! [`SessionCache`] owns the single [`ConnectionClient`] of the process and
//! the [`crate::sync::SyncScheduler`] that keeps contacts reconciled. It is
//! built once by the composition root and shared by reference; nothing in
//! this module is a hidden global.

mod cache;
mod client;

pub use cache::{Collaborators, SessionCache};
pub use client::{ClientParams, ConnectionClient};
