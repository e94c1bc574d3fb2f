//! Tracing subscriber setup.

use std::env;

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,parley=debug";

/// Application-specific filter variable, consulted when `RUST_LOG` is unset.
pub const LOG_ENV: &str = "PARLEY_LOG";

/// Install the global subscriber, writing to stderr.
///
/// Precedence:
/// 1) `RUST_LOG`
/// 2) `PARLEY_LOG`
/// 3) internal default filter
///
/// Calling it again after a subscriber is installed is a no-op.
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_target(true)
        .with_thread_names(true)
        .with_writer(std::io::stderr)
        .with_env_filter(filter_from_env())
        .try_init();
}

fn filter_from_env() -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    filter_from(env::var(LOG_ENV).ok())
}

fn filter_from(value: Option<String>) -> EnvFilter {
    value
        .filter(|v| !v.trim().is_empty())
        .and_then(|v| EnvFilter::try_new(v).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}
