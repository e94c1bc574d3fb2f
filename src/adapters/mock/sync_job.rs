//! Counting sync job for testing.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::traits::SyncJob;

/// How long `wait_for_runs` polls before giving up.
const WAIT_STEPS: usize = 500;
const WAIT_STEP: Duration = Duration::from_millis(10);

/// Sync job that counts how often it was started.
///
/// A run counts as soon as it starts. With a delay configured, each run
/// stays in flight for that long, which makes overlapping runs observable
/// through [`CountingSyncJob::max_in_flight`].
#[derive(Debug, Clone, Default)]
pub struct CountingSyncJob {
    delay: Option<Duration>,
    runs: Arc<AtomicUsize>,
    in_flight: Arc<AtomicUsize>,
    max_in_flight: Arc<AtomicUsize>,
}

impl CountingSyncJob {
    pub fn new() -> Self {
        Self::default()
    }

    /// Each run sleeps for `delay` before completing.
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::default()
        }
    }

    /// Number of runs started so far.
    pub fn runs(&self) -> usize {
        self.runs.load(Ordering::SeqCst)
    }

    /// Highest number of runs observed executing at the same time.
    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    /// Wait until at least `count` runs have started.
    ///
    /// Gives up after a bounded number of short sleeps so a broken test
    /// fails on its assertion instead of hanging.
    pub async fn wait_for_runs(&self, count: usize) {
        for _ in 0..WAIT_STEPS {
            if self.runs() >= count {
                return;
            }
            tokio::time::sleep(WAIT_STEP).await;
        }
    }
}

#[async_trait]
impl SyncJob for CountingSyncJob {
    fn name(&self) -> &str {
        "counting-sync"
    }

    async fn run(&self) {
        self.runs.fetch_add(1, Ordering::SeqCst);
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
    }
}
