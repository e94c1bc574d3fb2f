//! Unified error type for session setup.

use thiserror::Error;

use super::category::ErrorCategory;
use super::config::ConfigError;
use super::timer::TimerError;

/// Errors raised while building the session or its sync machinery.
///
/// Identity and configuration errors are fatal at startup. A storage
/// failure is not: nothing is memoized, so the caller may retry.
#[derive(Debug, Error)]
pub enum SessionError {
    /// A required identity fact could not be obtained.
    #[error("Required identity fact unavailable: {fact}")]
    MissingIdentity { fact: &'static str },

    /// The persistent storage provider failed.
    #[error("Storage unavailable: {0}")]
    Storage(String),

    #[error(transparent)]
    Timer(#[from] TimerError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl SessionError {
    /// Get the category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            SessionError::MissingIdentity { .. } => ErrorCategory::Identity,
            SessionError::Storage(_) => ErrorCategory::System,
            SessionError::Timer(_) => ErrorCategory::Client,
            SessionError::Config(_) => ErrorCategory::Configuration,
        }
    }

    /// Whether this error must abort process initialization.
    pub fn is_fatal(&self) -> bool {
        self.category().is_fatal()
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            SessionError::MissingIdentity { .. } => "SESSION_MISSING_IDENTITY",
            SessionError::Storage(_) => "SESSION_STORAGE",
            SessionError::Timer(err) => err.error_code(),
            SessionError::Config(err) => err.error_code(),
        }
    }
}
