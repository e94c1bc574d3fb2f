//! Sync job running an external command.
//!
//! Contact reconciliation itself lives outside this crate. The job runs a
//! configured command per firing and logs its outcome; with no command
//! configured it only logs.

use async_trait::async_trait;
use tokio::process::Command;

use crate::traits::SyncJob;

#[derive(Debug, Clone, Default)]
pub struct CommandSyncJob {
    command: Vec<String>,
}

impl CommandSyncJob {
    /// `command[0]` is the program, the rest its arguments.
    pub fn new(command: Vec<String>) -> Self {
        Self { command }
    }

    pub fn command(&self) -> &[String] {
        &self.command
    }
}

#[async_trait]
impl SyncJob for CommandSyncJob {
    async fn run(&self) {
        let Some((program, args)) = self.command.split_first() else {
            tracing::info!("Contact sync triggered (no sync command configured)");
            return;
        };

        match Command::new(program).args(args).output().await {
            Ok(output) if output.status.success() => {
                tracing::info!("Contact sync finished: {}", program);
            }
            Ok(output) => {
                tracing::warn!(
                    "Contact sync command {} exited with {}: {}",
                    program,
                    output.status,
                    String::from_utf8_lossy(&output.stderr).trim()
                );
            }
            Err(e) => {
                tracing::warn!("Failed to run contact sync command {}: {}", program, e);
            }
        }
    }
}
