//! Sync scheduler: one timer, one job, restartable.

use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;

use super::stats::{StatsRecorder, SyncStats, SyncTrigger};
use crate::error::{SessionResult, TimerError};
use crate::timer::{RepeatingTimer, TimerState};
use crate::traits::SyncJob;

/// Default period between contact syncs (6 hours).
pub const DEFAULT_SYNC_INTERVAL: Duration = Duration::from_secs(6 * 60 * 60);

/// Drives a [`SyncJob`] once immediately and then every interval.
pub struct SyncScheduler {
    timer: RepeatingTimer,
    job: Arc<dyn SyncJob>,
    runtime: Handle,
    stats: Arc<StatsRecorder>,
}

impl SyncScheduler {
    /// Create a scheduler on the current tokio runtime. The timer starts idle.
    pub fn new(interval: Duration, job: Arc<dyn SyncJob>) -> SessionResult<Self> {
        let runtime = Handle::try_current().map_err(|_| TimerError::NoRuntime)?;
        Self::with_runtime(interval, job, runtime)
    }

    pub fn with_runtime(
        interval: Duration,
        job: Arc<dyn SyncJob>,
        runtime: Handle,
    ) -> SessionResult<Self> {
        let timer = RepeatingTimer::with_runtime(interval, runtime.clone())?;
        Ok(Self {
            timer,
            job,
            runtime,
            stats: Arc::new(StatsRecorder::default()),
        })
    }

    /// (Re)install the sync: suspend, run once now, install the periodic
    /// callback, resume.
    ///
    /// Returns without waiting for the immediate run to finish.
    pub fn start(&mut self) {
        self.timer.suspend();
        self.stats.record_install();

        dispatch(&self.runtime, &self.job, &self.stats, SyncTrigger::Immediate);

        let runtime = self.runtime.clone();
        let job = Arc::clone(&self.job);
        let stats = Arc::clone(&self.stats);
        self.timer
            .set_callback(move || dispatch(&runtime, &job, &stats, SyncTrigger::Timer));

        self.timer.resume();
        tracing::info!(
            "Periodic {} installed (every {:?})",
            self.job.name(),
            self.timer.interval()
        );
    }

    /// Stop future firings. Does not cancel a run in progress.
    pub fn stop(&mut self) {
        self.timer.suspend();
    }

    pub fn state(&self) -> TimerState {
        self.timer.state()
    }

    pub fn stats(&self) -> SyncStats {
        self.stats.snapshot()
    }

    pub fn timer(&self) -> &RepeatingTimer {
        &self.timer
    }
}

fn dispatch(runtime: &Handle, job: &Arc<dyn SyncJob>, stats: &StatsRecorder, trigger: SyncTrigger) {
    stats.record_dispatch(trigger);
    let job = Arc::clone(job);
    runtime.spawn(async move {
        tracing::debug!("Running {} ({})", job.name(), trigger);
        job.run().await;
    });
}
