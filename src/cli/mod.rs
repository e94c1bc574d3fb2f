//! CLI module for Parley.
//!
//! This module provides command-line interface functionality including:
//! - Argument parsing
//! - Version display
//! - Credential classification
//!
//! # Usage
//!
//! The CLI dispatcher should be called early in main() to handle one-shot
//! commands before starting the session:
//!
//! ```ignore
//! use parley::cli::{parse_args, run_cli_command, CliCommand};
//!
//! let command = parse_args(std::env::args());
//! if let Some(result) = run_cli_command(command, &config) {
//!     result?;
//!     return Ok(());
//! }
//! // No CLI command, run the session
//! ```

pub mod args;
pub mod classify;
pub mod version;

pub use args::{parse_args, CliCommand};
pub use classify::handle_classify_command;
pub use version::{handle_version_command, VERSION};

use color_eyre::Result;

use crate::config::SessionConfig;

/// Run a CLI command if applicable.
///
/// # Returns
///
/// * `None` - If the command is `Run` (no CLI action needed)
/// * `Some(Ok(()))` - If a CLI command executed successfully
/// * `Some(Err(e))` - If a CLI command failed
///
/// # Note
///
/// The `Version` command never returns as it calls `std::process::exit(0)`.
pub fn run_cli_command(command: CliCommand, config: &SessionConfig) -> Option<Result<()>> {
    match command {
        CliCommand::Version => {
            handle_version_command();
        }
        CliCommand::Classify { region, inputs } => Some(handle_classify_command(
            config,
            region.as_deref(),
            &inputs,
        )),
        CliCommand::Run => None,
    }
}
