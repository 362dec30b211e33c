//! External command execution.
//!
//! Every local action the agent performs (pin control, wireless queries,
//! restart) goes through one narrow seam: [`CommandRunner`]. The
//! production implementation shells out; tests substitute
//! [`MemoryRunner`](crate::memory::MemoryRunner).

use std::process::Command;
use std::time::Duration;

use tracing::warn;

use fieldlink_core::error::{Error, Result};

/// Runs external commands, now or after a delay.
pub trait CommandRunner: Send + Sync {
    /// Run `command` through the shell and capture its output.
    ///
    /// Blocks for the duration of the command. A spawn failure or a
    /// non-zero exit yields [`Error::Command`] carrying the raw
    /// diagnostic; nothing else crosses this boundary.
    fn run(&self, command: &str) -> Result<String>;

    /// Schedule `command` to run after `delay`, fire-and-forget.
    ///
    /// Returns immediately; the eventual outcome is not reported to the
    /// caller. There is no cancellation path once scheduled.
    fn run_after(&self, command: &str, delay: Duration);
}

/// [`CommandRunner`] backed by `sh -c`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellRunner;

impl CommandRunner for ShellRunner {
    fn run(&self, command: &str) -> Result<String> {
        let output = Command::new("sh")
            .arg("-c")
            .arg(command)
            .output()
            .map_err(|e| Error::Command(format!("failed to spawn `{}`: {}", command, e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::Command(format!(
                "`{}` exited with {}: {}",
                command,
                output.status,
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn run_after(&self, command: &str, delay: Duration) {
        let command = command.to_string();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if let Err(err) = ShellRunner.run(&command) {
                warn!(%err, "scheduled command failed");
            }
        });
    }
}
