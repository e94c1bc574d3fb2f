//! Tokio-backed repeating timer.
//!
//! # Dependency on a runtime
//!
//! The firing task is spawned on the tokio runtime captured at construction,
//! so callbacks always run on a runtime worker and never on the caller's
//! thread. Construct the timer from inside a runtime, or pass a
//! [`Handle`] explicitly with [`RepeatingTimer::with_runtime`].

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

use super::state::{TimerEffect, TimerState};
use crate::error::TimerError;

/// Callback invoked on each firing.
///
/// Runs on a runtime worker. It should return quickly; long work belongs in
/// a task spawned by the callback.
pub type TimerCallback = Arc<dyn Fn() + Send + Sync>;

type CallbackSlot = Arc<RwLock<Option<TimerCallback>>>;

#[derive(Debug, Default)]
struct TimerCounters {
    activations: AtomicU64,
    firings: AtomicU64,
}

/// A periodic timer with an explicit Idle/Running/Suspended lifecycle.
///
/// Mutating methods take `&mut self`: the owner is the single writer of the
/// run state. The callback slot is shared with the firing task, so
/// [`set_callback`](Self::set_callback) takes effect on the next firing.
pub struct RepeatingTimer {
    interval: Duration,
    runtime: Handle,
    state: TimerState,
    driver: Option<JoinHandle<()>>,
    callback: CallbackSlot,
    counters: Arc<TimerCounters>,
}

impl RepeatingTimer {
    /// Create an idle timer on the current tokio runtime.
    ///
    /// Nothing fires until [`resume`](Self::resume) is called.
    pub fn new(interval: Duration) -> Result<Self, TimerError> {
        let runtime = Handle::try_current().map_err(|_| TimerError::NoRuntime)?;
        Self::with_runtime(interval, runtime)
    }

    /// Create an idle timer whose firings run on `runtime`.
    pub fn with_runtime(interval: Duration, runtime: Handle) -> Result<Self, TimerError> {
        if interval.is_zero() {
            return Err(TimerError::ZeroInterval);
        }
        if Instant::now().checked_add(interval).is_none() {
            return Err(TimerError::IntervalTooLong(interval));
        }
        Ok(Self {
            interval,
            runtime,
            state: TimerState::Idle,
            driver: None,
            callback: Arc::new(RwLock::new(None)),
            counters: Arc::new(TimerCounters::default()),
        })
    }

    /// Start (or restart) periodic firings. No-op while already running.
    ///
    /// The first firing after a resume happens one full interval later.
    pub fn resume(&mut self) {
        let (next, effect) = self.state.on_resume();
        self.apply(next, effect);
    }

    /// Stop future firings. No-op unless running.
    ///
    /// A callback invocation already in progress is not interrupted.
    pub fn suspend(&mut self) {
        let (next, effect) = self.state.on_suspend();
        self.apply(next, effect);
    }

    /// Replace the callback invoked on each firing.
    pub fn set_callback<F>(&mut self, callback: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.install(Some(Arc::new(callback)));
    }

    /// Remove the callback; firings still happen but do nothing.
    pub fn clear_callback(&mut self) {
        self.install(None);
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Number of times the firing task has been started.
    pub fn activations(&self) -> u64 {
        self.counters.activations.load(Ordering::SeqCst)
    }

    /// Number of elapsed-interval firings so far.
    pub fn firings(&self) -> u64 {
        self.counters.firings.load(Ordering::SeqCst)
    }

    fn install(&mut self, callback: Option<TimerCallback>) {
        match self.callback.write() {
            Ok(mut slot) => *slot = callback,
            Err(poisoned) => *poisoned.into_inner() = callback,
        }
    }

    fn apply(&mut self, next: TimerState, effect: TimerEffect) {
        let previous = self.state;
        self.state = next;

        match effect {
            TimerEffect::Activate => {
                // The state machine only activates from a non-running state,
                // which never holds a live driver.
                debug_assert!(self.driver.is_none());
                self.driver = Some(self.spawn_driver());
                self.counters.activations.fetch_add(1, Ordering::SeqCst);
                tracing::debug!(
                    "Timer {} -> {} (interval: {:?})",
                    previous,
                    next,
                    self.interval
                );
            }
            TimerEffect::Deactivate => {
                if let Some(driver) = self.driver.take() {
                    driver.abort();
                }
                tracing::debug!("Timer {} -> {}", previous, next);
            }
            TimerEffect::Unchanged => {
                tracing::trace!("Timer transition ignored in state {}", previous);
            }
        }
    }

    fn spawn_driver(&self) -> JoinHandle<()> {
        let period = self.interval;
        let slot = Arc::clone(&self.callback);
        let counters = Arc::clone(&self.counters);
        let first = Instant::now().checked_add(period);

        self.runtime.spawn(async move {
            let Some(first) = first else {
                tracing::warn!("Timer interval {:?} overflows the clock; not firing", period);
                return;
            };
            let mut ticker = time::interval_at(first, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;
                counters.firings.fetch_add(1, Ordering::SeqCst);

                // Clone out so the slot is not locked while the callback runs.
                let callback = match slot.read() {
                    Ok(guard) => guard.clone(),
                    Err(poisoned) => poisoned.into_inner().clone(),
                };
                match callback {
                    Some(callback) => callback(),
                    None => tracing::trace!("Timer fired with no callback installed"),
                }
            }
        })
    }
}

impl Drop for RepeatingTimer {
    fn drop(&mut self) {
        self.suspend();
        self.clear_callback();
    }
}

impl std::fmt::Debug for RepeatingTimer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RepeatingTimer")
            .field("interval", &self.interval)
            .field("state", &self.state)
            .field("activations", &self.activations())
            .field("firings", &self.firings())
            .finish()
    }
}
