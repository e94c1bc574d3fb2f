//! Bookkeeping for sync dispatches.

use std::fmt;
use std::sync::{Mutex, PoisonError};

use chrono::{DateTime, Utc};

/// What caused a sync run to be dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncTrigger {
    /// The run issued by `start` itself.
    Immediate,
    /// A periodic timer firing.
    Timer,
}

impl fmt::Display for SyncTrigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyncTrigger::Immediate => f.write_str("immediate"),
            SyncTrigger::Timer => f.write_str("timer"),
        }
    }
}

/// Snapshot of scheduler activity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncStats {
    /// Number of `start` calls.
    pub installs: u64,
    pub immediate_runs: u64,
    pub timer_runs: u64,
    pub last_dispatch: Option<DateTime<Utc>>,
    pub last_trigger: Option<SyncTrigger>,
}

impl SyncStats {
    pub fn total_runs(&self) -> u64 {
        self.immediate_runs + self.timer_runs
    }
}

/// Shared, lock-protected [`SyncStats`] updated from timer callbacks.
#[derive(Debug, Default)]
pub(crate) struct StatsRecorder {
    inner: Mutex<SyncStats>,
}

impl StatsRecorder {
    pub(crate) fn record_install(&self) {
        self.update(|stats| stats.installs += 1);
    }

    pub(crate) fn record_dispatch(&self, trigger: SyncTrigger) {
        self.update(|stats| {
            match trigger {
                SyncTrigger::Immediate => stats.immediate_runs += 1,
                SyncTrigger::Timer => stats.timer_runs += 1,
            }
            stats.last_dispatch = Some(Utc::now());
            stats.last_trigger = Some(trigger);
        });
    }

    pub(crate) fn snapshot(&self) -> SyncStats {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn update(&self, f: impl FnOnce(&mut SyncStats)) {
        let mut stats = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut stats);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recorder_counts_by_trigger() {
        let recorder = StatsRecorder::default();
        recorder.record_install();
        recorder.record_dispatch(SyncTrigger::Immediate);
        recorder.record_dispatch(SyncTrigger::Timer);
        recorder.record_dispatch(SyncTrigger::Timer);

        let stats = recorder.snapshot();
        assert_eq!(stats.installs, 1);
        assert_eq!(stats.immediate_runs, 1);
        assert_eq!(stats.timer_runs, 2);
        assert_eq!(stats.total_runs(), 3);
        assert_eq!(stats.last_trigger, Some(SyncTrigger::Timer));
        assert!(stats.last_dispatch.is_some());
    }

    #[test]
    fn test_empty_stats() {
        let stats = StatsRecorder::default().snapshot();
        assert_eq!(stats, SyncStats::default());
        assert_eq!(stats.total_runs(), 0);
    }

    #[test]
    fn test_trigger_display() {
        assert_eq!(SyncTrigger::Immediate.to_string(), "immediate");
        assert_eq!(SyncTrigger::Timer.to_string(), "timer");
    }
}
