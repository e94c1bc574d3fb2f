//! Error types for the parley session core.
//!
//! - **Error Categories**: fatal vs. reportable classification
//! - **Domain-specific Errors**: timer construction, configuration
//! - **Unified Error Type**: `SessionError` wraps the others
//! - **Result Type Alias**: `SessionResult<T>`
//!
//! Timer transitions and credential classification have no error path:
//! misuse of the former is a no-op, an unrecognized credential is `None`.

mod category;
mod config;
mod result;
mod session;
mod timer;

pub use category::ErrorCategory;
pub use config::ConfigError;
pub use result::SessionResult;
pub use session::SessionError;
pub use timer::TimerError;
