//! Process-wide session cache.
//!
//! # Concurrency
//!
//! - `client()` serializes only the first construction: concurrent first
//!   callers block on the cell while one of them builds the client, and
//!   every later call is a lock-free read of the initialized cell.
//! - `start_periodic_sync()` / `stop_periodic_sync()` take a mutex around
//!   the scheduler, making the cache the single writer of the timer.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use once_cell::sync::OnceCell;

use super::client::{ClientParams, ConnectionClient};
use crate::config::SessionConfig;
use crate::error::{SessionError, SessionResult};
use crate::sync::{SyncScheduler, SyncStats};
use crate::timer::TimerState;
use crate::traits::{BuildInfoProvider, ClientSource, DeviceInfoProvider, StorageProvider, SyncJob};

/// External collaborators the cache is built from.
#[derive(Clone)]
pub struct Collaborators {
    pub build_info: Arc<dyn BuildInfoProvider>,
    pub device: Arc<dyn DeviceInfoProvider>,
    pub storage: Arc<dyn StorageProvider>,
    pub sync_job: Arc<dyn SyncJob>,
}

/// Owns the process's [`ConnectionClient`] and its sync scheduler.
pub struct SessionCache {
    config: SessionConfig,
    collaborators: Collaborators,
    client: OnceCell<Arc<ConnectionClient>>,
    scheduler: Mutex<Option<SyncScheduler>>,
}

impl SessionCache {
    pub fn new(config: SessionConfig, collaborators: Collaborators) -> Self {
        Self {
            config,
            collaborators,
            client: OnceCell::new(),
            scheduler: Mutex::new(None),
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Get the shared client, constructing it on first call.
    ///
    /// A missing identity fact fails the call and leaves the cache empty;
    /// a partially-built client is never stored.
    pub fn client(&self) -> SessionResult<Arc<ConnectionClient>> {
        self.client
            .get_or_try_init(|| self.construct_client().map(Arc::new))
            .map(Arc::clone)
    }

    /// Whether the client has been constructed yet.
    pub fn is_initialized(&self) -> bool {
        self.client.get().is_some()
    }

    /// (Re)install the periodic contact sync.
    ///
    /// Suspends the existing timer, dispatches one immediate sync, installs
    /// the job as the timer callback and resumes the timer. Calling it again
    /// reuses the same timer, so at most one periodic schedule is ever live.
    ///
    /// Must be called from within a tokio runtime the first time.
    pub fn start_periodic_sync(&self) -> SessionResult<()> {
        let mut guard = self.lock_scheduler();
        if guard.is_none() {
            let scheduler = SyncScheduler::new(
                self.config.sync_interval(),
                Arc::clone(&self.collaborators.sync_job),
            )?;
            *guard = Some(scheduler);
        }
        if let Some(scheduler) = guard.as_mut() {
            scheduler.start();
        }
        Ok(())
    }

    /// Stop future sync firings. Runs already in flight finish on their own.
    pub fn stop_periodic_sync(&self) {
        if let Some(scheduler) = self.lock_scheduler().as_mut() {
            scheduler.stop();
        }
    }

    /// Current timer state, `None` before the first `start_periodic_sync`.
    pub fn sync_state(&self) -> Option<TimerState> {
        self.lock_scheduler().as_ref().map(SyncScheduler::state)
    }

    pub fn sync_stats(&self) -> Option<SyncStats> {
        self.lock_scheduler().as_ref().map(SyncScheduler::stats)
    }

    /// Number of times the sync timer's firing task has been started.
    pub fn sync_activations(&self) -> u64 {
        self.lock_scheduler()
            .as_ref()
            .map_or(0, |scheduler| scheduler.timer().activations())
    }

    fn lock_scheduler(&self) -> MutexGuard<'_, Option<SyncScheduler>> {
        self.scheduler.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn construct_client(&self) -> SessionResult<ConnectionClient> {
        let Collaborators {
            build_info,
            device,
            storage,
            ..
        } = &self.collaborators;

        let name = self
            .config
            .app_name
            .clone()
            .unwrap_or_else(|| build_info.name());
        let version = build_info.version();
        if name.trim().is_empty() {
            return Err(SessionError::MissingIdentity { fact: "app_name" });
        }
        if version.trim().is_empty() {
            return Err(SessionError::MissingIdentity { fact: "app_version" });
        }

        let device_id = device
            .device_id()
            .filter(|id| !id.trim().is_empty())
            .ok_or(SessionError::MissingIdentity { fact: "device_id" })?;

        let params = ClientParams {
            app_identity: format!("{}/{}", name, version),
            api_key: self.config.api_key.clone(),
            device_id,
            os_version: device.os_version(),
            storage: storage.storage()?,
            host_name: self.config.host_name.clone(),
            use_tls: self.config.use_tls,
        };

        tracing::info!(
            "Connection client created: {} on {} (device: {}, host: {})",
            params.app_identity,
            params.os_version,
            params.device_id,
            params.host_name
        );
        Ok(ConnectionClient::new(params))
    }
}

impl ClientSource for SessionCache {
    fn client(&self) -> SessionResult<Arc<ConnectionClient>> {
        SessionCache::client(self)
    }
}

impl std::fmt::Debug for SessionCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionCache")
            .field("config", &self.config)
            .field("initialized", &self.is_initialized())
            .finish()
    }
}
