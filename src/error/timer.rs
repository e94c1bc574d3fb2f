//! Timer construction errors.
//!
//! Transitions (`resume`/`suspend`) never fail; only creating a timer can.

use thiserror::Error;

/// Errors returned by [`crate::timer::RepeatingTimer::new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimerError {
    /// The firing interval must be a positive duration.
    #[error("Timer interval must be greater than zero")]
    ZeroInterval,

    /// The interval is so long that the first firing time is unrepresentable.
    #[error("Timer interval {0:?} is too long")]
    IntervalTooLong(std::time::Duration),

    /// No tokio runtime is available to host the firing task.
    #[error("Timer requires a running tokio runtime")]
    NoRuntime,
}

impl TimerError {
    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            TimerError::ZeroInterval => "TIMER_ZERO_INTERVAL",
            TimerError::IntervalTooLong(_) => "TIMER_INTERVAL_TOO_LONG",
            TimerError::NoRuntime => "TIMER_NO_RUNTIME",
        }
    }
}
