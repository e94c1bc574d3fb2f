//! The authenticated connection client.

use chrono::{DateTime, Utc};

use crate::traits::StorageHandle;

/// Everything needed to construct a [`ConnectionClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientParams {
    /// `name/version` of the application, sent as the user agent.
    pub app_identity: String,
    pub api_key: String,
    /// Stable per-install identifier.
    pub device_id: String,
    pub os_version: String,
    pub storage: StorageHandle,
    pub host_name: String,
    pub use_tls: bool,
}

/// Handle to the backend session.
///
/// The messaging transport itself lives behind this type; the session core
/// only constructs it and hands out shared references. It is never mutated
/// after construction.
#[derive(Debug)]
pub struct ConnectionClient {
    params: ClientParams,
    created_at: DateTime<Utc>,
}

impl ConnectionClient {
    pub fn new(params: ClientParams) -> Self {
        Self {
            params,
            created_at: Utc::now(),
        }
    }

    pub fn app_identity(&self) -> &str {
        &self.params.app_identity
    }

    pub fn api_key(&self) -> &str {
        &self.params.api_key
    }

    pub fn device_id(&self) -> &str {
        &self.params.device_id
    }

    pub fn os_version(&self) -> &str {
        &self.params.os_version
    }

    pub fn storage(&self) -> &StorageHandle {
        &self.params.storage
    }

    pub fn host_name(&self) -> &str {
        &self.params.host_name
    }

    pub fn use_tls(&self) -> bool {
        self.params.use_tls
    }

    /// WebSocket URL of the configured server.
    pub fn server_url(&self) -> String {
        let scheme = if self.params.use_tls { "wss" } else { "ws" };
        format!("{}://{}", scheme, self.params.host_name)
    }

    pub fn params(&self) -> &ClientParams {
        &self.params
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
