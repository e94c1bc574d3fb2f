use std::path::Path;

use color_eyre::eyre::WrapErr;
use color_eyre::Result;

use parley::adapters::{production_collaborators, FileStorage};
use parley::cli::{handle_version_command, parse_args, run_cli_command, CliCommand};
use parley::config::SessionConfig;
use parley::logging;
use parley::session::SessionCache;

fn main() -> Result<()> {
    // Handle --version flag before any initialization
    let command = parse_args(std::env::args());
    if command == CliCommand::Version {
        handle_version_command();
    }

    color_eyre::install()?;
    logging::init();

    let storage = FileStorage::default_location()?;
    let config = load_config(storage.root())?;

    if let Some(result) = run_cli_command(command, &config) {
        return result;
    }

    // Create Tokio runtime for the session and its sync timer
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(run_session(config, storage))
}

fn load_config(dir: &Path) -> Result<SessionConfig> {
    SessionConfig::load(dir)
        .wrap_err_with(|| format!("Failed to load configuration from {}", dir.display()))
}

async fn run_session(config: SessionConfig, storage: FileStorage) -> Result<()> {
    let collaborators = production_collaborators(&config, storage);
    let cache = SessionCache::new(config, collaborators);

    // Missing identity facts are unrecoverable
    let client = cache
        .client()
        .wrap_err("Failed to construct connection client")?;
    tracing::info!("Session ready, server {}", client.server_url());

    cache.start_periodic_sync()?;
    tracing::info!(
        "Periodic contact sync every {:?}",
        cache.config().sync_interval()
    );

    tokio::signal::ctrl_c()
        .await
        .wrap_err("Failed to listen for Ctrl-C")?;

    cache.stop_periodic_sync();
    if let Some(stats) = cache.sync_stats() {
        tracing::info!("Shutting down after {} sync runs", stats.total_runs());
    }
    Ok(())
}
