//! In-memory command runner for deterministic tests.
//!
//! Records every command with its (virtual) timestamp instead of spawning
//! processes. Results can be scripted per command string; `run_after`
//! schedules through a real tokio task so paused-clock tests observe the
//! same timing the shell runner would.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::time::Instant;

use fieldlink_core::error::Result;

use crate::executor::CommandRunner;

/// One recorded invocation.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    /// The command line as the runner received it.
    pub command: String,
    /// When it ran, on the (possibly paused) tokio clock.
    pub at: Instant,
}

#[derive(Default)]
struct Inner {
    calls: Mutex<Vec<RecordedCall>>,
    results: Mutex<HashMap<String, Result<String>>>,
    fail_all: Mutex<Option<String>>,
}

/// [`CommandRunner`] that records instead of executing.
#[derive(Default, Clone)]
pub struct MemoryRunner {
    inner: Arc<Inner>,
}

impl MemoryRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the result returned for an exact command string.
    ///
    /// Unscripted commands succeed with empty output.
    pub fn set_result(&self, command: impl Into<String>, result: Result<String>) {
        self.inner
            .results
            .lock()
            .unwrap()
            .insert(command.into(), result);
    }

    /// Make every command fail with the given diagnostic.
    pub fn fail_all(&self, diagnostic: impl Into<String>) {
        *self.inner.fail_all.lock().unwrap() = Some(diagnostic.into());
    }

    /// All recorded calls, in execution order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.inner.calls.lock().unwrap().clone()
    }

    /// Just the command strings, in execution order.
    pub fn commands(&self) -> Vec<String> {
        self.calls().into_iter().map(|c| c.command).collect()
    }

    fn record_and_resolve(inner: &Inner, command: &str) -> Result<String> {
        inner.calls.lock().unwrap().push(RecordedCall {
            command: command.to_string(),
            at: Instant::now(),
        });
        if let Some(diagnostic) = inner.fail_all.lock().unwrap().clone() {
            return Err(fieldlink_core::Error::Command(diagnostic));
        }
        match inner.results.lock().unwrap().get(command) {
            Some(result) => result.clone(),
            None => Ok(String::new()),
        }
    }
}

impl CommandRunner for MemoryRunner {
    fn run(&self, command: &str) -> Result<String> {
        Self::record_and_resolve(&self.inner, command)
    }

    fn run_after(&self, command: &str, delay: Duration) {
        let inner = Arc::clone(&self.inner);
        let command = command.to_string();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = Self::record_and_resolve(&inner, &command);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fieldlink_core::Error;

    #[tokio::test]
    async fn test_records_calls_in_order() {
        let runner = MemoryRunner::new();
        runner.run("first").unwrap();
        runner.run("second").unwrap();
        assert_eq!(runner.commands(), vec!["first", "second"]);
    }

    #[tokio::test]
    async fn test_scripted_results() {
        let runner = MemoryRunner::new();
        runner.set_result("query", Ok("value\n".to_string()));
        runner.set_result("bad", Err(Error::Command("boom".to_string())));

        assert_eq!(runner.run("query").unwrap(), "value\n");
        assert!(runner.run("bad").is_err());
        assert_eq!(runner.run("unscripted").unwrap(), "");
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_after_records_at_virtual_time() {
        let runner = MemoryRunner::new();
        let start = Instant::now();

        runner.run_after("later", Duration::from_millis(500));
        assert!(runner.calls().is_empty());

        tokio::time::sleep(Duration::from_millis(600)).await;
        let calls = runner.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].at - start, Duration::from_millis(500));
    }
}
