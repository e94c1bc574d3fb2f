//! Contact synchronization job trait abstraction.

use async_trait::async_trait;

/// The periodic reconciliation job driven by the sync scheduler.
///
/// Implementations own their failures: the scheduler neither inspects nor
/// retries a run. Runs may overlap (a firing cannot be cancelled once
/// started), so `run` must be idempotent.
///
/// # Example
///
/// ```ignore
/// struct ContactSync { client: Arc<ConnectionClient> }
///
/// #[async_trait]
/// impl SyncJob for ContactSync {
///     async fn run(&self) {
///         if let Err(e) = self.reconcile().await {
///             tracing::warn!("Contact sync failed: {}", e);
///         }
///     }
/// }
/// ```
#[async_trait]
pub trait SyncJob: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &str {
        "contact-sync"
    }

    /// Perform one synchronization attempt.
    async fn run(&self);
}
