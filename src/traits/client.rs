//! Connection client access trait abstraction.

use std::sync::Arc;

use crate::error::SessionResult;
use crate::session::ConnectionClient;

/// Access to the process-wide [`ConnectionClient`].
///
/// Feature code depends on this trait instead of on
/// [`crate::session::SessionCache`] so tests can hand out a fake client.
pub trait ClientSource: Send + Sync {
    /// Get the shared client, constructing it on first use.
    fn client(&self) -> SessionResult<Arc<ConnectionClient>>;
}
