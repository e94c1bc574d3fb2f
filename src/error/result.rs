//! Result type alias for session operations.

use super::session::SessionError;

/// Type alias for Results using [`SessionError`].
///
/// # Example
///
/// ```ignore
/// use parley::error::SessionResult;
///
/// fn open() -> SessionResult<Arc<ConnectionClient>> {
///     cache.client()
/// }
/// ```
pub type SessionResult<T> = Result<T, SessionError>;
