//! Timer state machine.

use std::fmt;

/// Run state of a [`crate::timer::RepeatingTimer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TimerState {
    /// Created but never resumed.
    #[default]
    Idle,
    /// The firing task is live and the callback may be invoked.
    Running,
    /// Previously running, paused; can be resumed.
    Suspended,
}

/// Side effect a transition asks the driver to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEffect {
    /// Start the underlying periodic mechanism.
    Activate,
    /// Stop the underlying periodic mechanism.
    Deactivate,
    /// Nothing to do; the request was a no-op in the current state.
    Unchanged,
}

impl TimerState {
    /// Apply a resume request.
    pub fn on_resume(self) -> (TimerState, TimerEffect) {
        match self {
            TimerState::Idle | TimerState::Suspended => (TimerState::Running, TimerEffect::Activate),
            TimerState::Running => (TimerState::Running, TimerEffect::Unchanged),
        }
    }

    /// Apply a suspend request.
    pub fn on_suspend(self) -> (TimerState, TimerEffect) {
        match self {
            TimerState::Running => (TimerState::Suspended, TimerEffect::Deactivate),
            other => (other, TimerEffect::Unchanged),
        }
    }

    pub fn is_running(self) -> bool {
        self == TimerState::Running
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TimerState::Idle => "idle",
            TimerState::Running => "running",
            TimerState::Suspended => "suspended",
        }
    }
}

impl fmt::Display for TimerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
