//! Session configuration.
//!
//! Values come from three layers, later ones winning:
//!
//! 1. Built-in defaults (debug builds talk to a local server without TLS)
//! 2. `config.json` in the storage directory, if present
//! 3. `PARLEY_*` environment variables
//!
//! # Example
//!
//! ```ignore
//! use parley::config::SessionConfig;
//!
//! let config = SessionConfig::default()
//!     .with_host_name("chat.example.com")
//!     .with_use_tls(true);
//! ```

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::credentials::{region, CredentialClassifier};
use crate::error::ConfigError;
use crate::sync::DEFAULT_SYNC_INTERVAL;

/// Name of the optional config file inside the storage directory.
pub const CONFIG_FILE: &str = "config.json";

/// API key identifying this application to the server.
pub const DEFAULT_API_KEY: &str = "AQEAAAABAAD_parley0dev0key0Qw";

#[cfg(debug_assertions)]
pub const DEFAULT_HOST_NAME: &str = "127.0.0.1:6060";
#[cfg(not(debug_assertions))]
pub const DEFAULT_HOST_NAME: &str = "api.parley.chat";

pub const DEFAULT_USE_TLS: bool = !cfg!(debug_assertions);

pub const DEFAULT_REGION: &str = "US";

/// Longest accepted sync interval: one year.
pub const MAX_SYNC_INTERVAL_SECS: u64 = 365 * 24 * 60 * 60;

/// Environment variable names.
pub mod env {
    pub const HOST: &str = "PARLEY_HOST";
    pub const USE_TLS: &str = "PARLEY_USE_TLS";
    pub const API_KEY: &str = "PARLEY_API_KEY";
    pub const REGION: &str = "PARLEY_REGION";
    pub const SYNC_INTERVAL_SECS: &str = "PARLEY_SYNC_INTERVAL_SECS";
}

/// Settings for the session core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub api_key: String,
    pub host_name: String,
    pub use_tls: bool,
    /// Seconds between periodic contact syncs.
    pub sync_interval_secs: u64,
    /// Region assumed for phone numbers typed without a country code.
    pub default_region: Option<String>,
    /// Overrides the application name from build metadata.
    pub app_name: Option<String>,
    /// External command run as the contact sync job; empty means log only.
    pub sync_command: Vec<String>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            api_key: DEFAULT_API_KEY.to_string(),
            host_name: DEFAULT_HOST_NAME.to_string(),
            use_tls: DEFAULT_USE_TLS,
            sync_interval_secs: DEFAULT_SYNC_INTERVAL.as_secs(),
            default_region: Some(DEFAULT_REGION.to_string()),
            app_name: None,
            sync_command: Vec::new(),
        }
    }
}

impl SessionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load defaults, then `dir/config.json`, then the process environment.
    pub fn load(dir: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::from_file(&dir.join(CONFIG_FILE))?.unwrap_or_default();
        config.apply_env(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Read a config file. `Ok(None)` if it does not exist.
    pub fn from_file(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = serde_json::from_str(&json).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Some(config))
    }

    /// Apply `PARLEY_*` overrides read through `lookup`.
    ///
    /// Blank values are ignored.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(host) = get(env::HOST) {
            self.host_name = host.trim().to_string();
        }
        if let Some(value) = get(env::USE_TLS) {
            self.use_tls = parse_bool(env::USE_TLS, &value)?;
        }
        if let Some(key) = get(env::API_KEY) {
            self.api_key = key.trim().to_string();
        }
        if let Some(code) = get(env::REGION) {
            self.default_region = Some(code.trim().to_uppercase());
        }
        if let Some(value) = get(env::SYNC_INTERVAL_SECS) {
            self.sync_interval_secs = value.trim().parse().map_err(|_| {
                ConfigError::invalid(env::SYNC_INTERVAL_SECS, format!("'{}' is not a number", value))
            })?;
        }
        Ok(())
    }

    /// Reject settings the session core cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_key.trim().is_empty() {
            return Err(ConfigError::invalid("api_key", "must not be empty"));
        }
        if self.host_name.trim().is_empty() {
            return Err(ConfigError::invalid("host_name", "must not be empty"));
        }
        if self.sync_interval_secs == 0 {
            return Err(ConfigError::invalid(
                "sync_interval_secs",
                "must be greater than zero",
            ));
        }
        if self.sync_interval_secs > MAX_SYNC_INTERVAL_SECS {
            return Err(ConfigError::invalid(
                "sync_interval_secs",
                format!("must be at most {} seconds", MAX_SYNC_INTERVAL_SECS),
            ));
        }
        if let Some(code) = &self.default_region {
            if region(code).is_none() {
                return Err(ConfigError::invalid(
                    "default_region",
                    format!("unknown region '{}'", code),
                ));
            }
        }
        Ok(())
    }

    pub fn sync_interval(&self) -> Duration {
        Duration::from_secs(self.sync_interval_secs)
    }

    /// Credential classifier using the configured default region.
    pub fn classifier(&self) -> CredentialClassifier {
        CredentialClassifier::new(self.default_region.as_deref().and_then(region))
    }

    pub fn with_host_name(mut self, host: impl Into<String>) -> Self {
        self.host_name = host.into();
        self
    }

    pub fn with_use_tls(mut self, use_tls: bool) -> Self {
        self.use_tls = use_tls;
        self
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = key.into();
        self
    }

    pub fn with_sync_interval(mut self, interval: Duration) -> Self {
        self.sync_interval_secs = interval.as_secs();
        self
    }

    pub fn with_default_region(mut self, code: Option<&str>) -> Self {
        self.default_region = code.map(str::to_string);
        self
    }

    pub fn with_app_name(mut self, name: impl Into<String>) -> Self {
        self.app_name = Some(name.into());
        self
    }

    pub fn with_sync_command(mut self, command: Vec<String>) -> Self {
        self.sync_command = command;
        self
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::invalid(key, format!("'{}' is not a boolean", other))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = SessionConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.sync_interval(), DEFAULT_SYNC_INTERVAL);
        assert_eq!(config.default_region.as_deref(), Some("US"));
        assert!(config.sync_command.is_empty());
    }

    #[test]
    fn test_env_overrides() {
        let mut config = SessionConfig::default();
        config
            .apply_env(lookup(&[
                (env::HOST, "chat.example.com:443"),
                (env::USE_TLS, "yes"),
                (env::API_KEY, "k2"),
                (env::REGION, "gb"),
                (env::SYNC_INTERVAL_SECS, "3600"),
            ]))
            .unwrap();

        assert_eq!(config.host_name, "chat.example.com:443");
        assert!(config.use_tls);
        assert_eq!(config.api_key, "k2");
        assert_eq!(config.default_region.as_deref(), Some("GB"));
        assert_eq!(config.sync_interval(), Duration::from_secs(3600));
    }

    #[test]
    fn test_blank_env_values_ignored() {
        let mut config = SessionConfig::default();
        config.apply_env(lookup(&[(env::HOST, "  ")])).unwrap();
        assert_eq!(config.host_name, DEFAULT_HOST_NAME);
    }

    #[test]
    fn test_bad_env_values_rejected() {
        let mut config = SessionConfig::default();
        let err = config
            .apply_env(lookup(&[(env::SYNC_INTERVAL_SECS, "soon")]))
            .unwrap_err();
        assert_eq!(err.error_code(), "CONFIG_INVALID_VALUE");

        let err = config.apply_env(lookup(&[(env::USE_TLS, "maybe")])).unwrap_err();
        assert!(err.to_string().contains(env::USE_TLS));
    }

    #[test]
    fn test_validate_rejects_zero_interval_and_unknown_region() {
        let config = SessionConfig::default().with_sync_interval(Duration::ZERO);
        assert!(config.validate().is_err());

        let config = SessionConfig::default().with_default_region(Some("XX"));
        assert!(config.validate().is_err());

        let config = SessionConfig::default().with_default_region(None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_huge_interval() {
        let max = u64::MAX.to_string();
        let mut config = SessionConfig::default();
        config
            .apply_env(lookup(&[(env::SYNC_INTERVAL_SECS, max.as_str())]))
            .unwrap();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));

        config.sync_interval_secs = MAX_SYNC_INTERVAL_SECS;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(SessionConfig::from_file(&dir.path().join(CONFIG_FILE))
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, r#"{ "host_name": "chat.example.com", "use_tls": true }"#).unwrap();

        let config = SessionConfig::from_file(&path).unwrap().unwrap();
        assert_eq!(config.host_name, "chat.example.com");
        assert!(config.use_tls);
        assert_eq!(config.api_key, DEFAULT_API_KEY);
        assert_eq!(config.sync_interval(), DEFAULT_SYNC_INTERVAL);
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "{ not json").unwrap();

        let err = SessionConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_classifier_uses_region() {
        let config = SessionConfig::default().with_default_region(Some("GB"));
        assert_eq!(config.classifier().default_region().map(|r| r.code), Some("GB"));

        let config = SessionConfig::default().with_default_region(None);
        assert!(config.classifier().default_region().is_none());
    }
}
