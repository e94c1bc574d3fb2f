//! Command-line argument parsing for the Parley CLI.
//!
//! This module handles parsing command-line arguments and determining
//! which CLI command to execute.

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Classify each input as a login credential
    Classify {
        /// Default region for phone numbers, overriding the config
        region: Option<String>,
        inputs: Vec<String>,
    },
    /// Run the session with periodic sync until interrupted (default)
    Run,
}

/// Parse command-line arguments and return the appropriate command.
///
/// # Examples
///
/// ```
/// use parley::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["parley".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut args = args.skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "classify" => return parse_classify(args),
            _ => {}
        }
    }
    CliCommand::Run
}

fn parse_classify<I>(mut args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut region = None;
    let mut inputs = Vec::new();
    while let Some(arg) = args.next() {
        if arg == "--region" {
            region = args.next();
        } else if let Some(code) = arg.strip_prefix("--region=") {
            region = Some(code.to_string());
        } else {
            inputs.push(arg);
        }
    }
    CliCommand::Classify { region, inputs }
}
