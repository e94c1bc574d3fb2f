//! Parley - session core for a messaging client
//!
//! Owns the process-wide connection client, drives periodic contact sync
//! on a suspendable timer, and classifies login credentials.
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod credentials;
pub mod error;
pub mod logging;
pub mod session;
pub mod sync;
pub mod timer;
pub mod traits;
