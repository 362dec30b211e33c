//! Wireless network queries.
//!
//! Read-only lookups through the system's wireless utilities. Each query
//! takes the first line of the command output, trimmed.

use std::sync::Arc;

use fieldlink_core::error::Result;

use crate::executor::CommandRunner;

/// Query pipeline for the SSID of the current WLAN connection.
const SSID_QUERY: &str = r#"iwgetid | awk -F '"' '{print $2}'"#;

/// Wireless SSID and address lookups.
pub struct NetworkInfo {
    runner: Arc<dyn CommandRunner>,
}

impl NetworkInfo {
    pub fn new(runner: Arc<dyn CommandRunner>) -> Self {
        Self { runner }
    }

    /// SSID of the current WLAN connection.
    pub fn wireless_ssid(&self) -> Result<String> {
        self.runner.run(SSID_QUERY).map(|out| first_line(&out))
    }

    /// IPv4 address of the given wireless interface.
    pub fn wireless_address(&self, interface: &str) -> Result<String> {
        let query = format!(
            "ifconfig {} | awk -F ' *|:' '/inet /{{print $3}}'",
            interface
        );
        self.runner.run(&query).map(|out| first_line(&out))
    }
}

fn first_line(output: &str) -> String {
    output.lines().next().unwrap_or("").trim().to_string()
}

/// Render an accessor result for display: the value itself, or the
/// diagnostic behind an `"Error: "` prefix.
pub fn value_or_error(result: Result<String>) -> String {
    match result {
        Ok(value) => value,
        Err(err) => format!("Error: {}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryRunner;

    #[tokio::test]
    async fn test_ssid_takes_first_line_trimmed() {
        let runner = MemoryRunner::new();
        runner.set_result(SSID_QUERY, Ok("  home-network  \nsecond line\n".to_string()));

        let network = NetworkInfo::new(Arc::new(runner));
        assert_eq!(network.wireless_ssid().unwrap(), "home-network");
    }

    #[tokio::test]
    async fn test_ssid_empty_output() {
        let runner = MemoryRunner::new();
        runner.set_result(SSID_QUERY, Ok(String::new()));

        let network = NetworkInfo::new(Arc::new(runner));
        assert_eq!(network.wireless_ssid().unwrap(), "");
    }

    #[tokio::test]
    async fn test_address_queries_named_interface() {
        let runner = MemoryRunner::new();
        let network = NetworkInfo::new(Arc::new(runner.clone()));
        network.wireless_address("wlan0").unwrap();

        assert!(runner.commands()[0].starts_with("ifconfig wlan0"));
    }

    #[tokio::test]
    async fn test_failure_renders_with_error_prefix() {
        let runner = MemoryRunner::new();
        runner.fail_all("iwgetid: not found");

        let network = NetworkInfo::new(Arc::new(runner));
        let rendered = value_or_error(network.wireless_ssid());
        assert!(rendered.starts_with("Error: "), "rendered: {}", rendered);
        assert!(rendered.contains("iwgetid: not found"));
    }
}
