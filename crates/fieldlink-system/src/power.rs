//! System power control.

use std::sync::Arc;
use std::time::Duration;

use fieldlink_core::error::Result;

use crate::executor::CommandRunner;

/// Command that reboots the system.
pub const RESTART_COMMAND: &str = "shutdown -r now";

/// Triggers immediate or delayed system restarts.
#[derive(Clone)]
pub struct Power {
    runner: Arc<dyn CommandRunner>,
}

impl Power {
    pub fn new(runner: Arc<dyn CommandRunner>) -> Self {
        Self { runner }
    }

    /// Restart the system, now or after `delay`.
    ///
    /// Without a delay the restart command runs synchronously and its
    /// failure propagates. With a delay the command is scheduled
    /// fire-and-forget: this returns `Ok` immediately and the scheduled
    /// command's outcome is unobservable. There is no cancellation path.
    pub fn restart(&self, delay: Option<Duration>) -> Result<()> {
        match delay {
            None => self.runner.run(RESTART_COMMAND).map(|_| ()),
            Some(delay) => {
                self.runner.run_after(RESTART_COMMAND, delay);
                Ok(())
            }
        }
    }
}
