//! Error category classification for session errors.
//!
//! Categories tell the composition root whether a failure should abort
//! startup or can be reported and left alone.

use std::fmt;

/// High-level categorization of errors for handling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Missing or invalid settings (config file, environment, constants).
    /// Not retryable until the configuration is corrected.
    Configuration,

    /// A required identity fact (device id, build metadata) is unavailable.
    /// Fatal at startup.
    Identity,

    /// System/OS errors (filesystem, permissions).
    System,

    /// Programming errors such as using the timer outside a runtime.
    Client,
}

impl ErrorCategory {
    /// Returns true if errors in this category must stop process initialization.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            ErrorCategory::Configuration | ErrorCategory::Identity | ErrorCategory::Client
        )
    }

    /// Returns a short label for the category suitable for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Configuration => "configuration",
            ErrorCategory::Identity => "identity",
            ErrorCategory::System => "system",
            ErrorCategory::Client => "client",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
