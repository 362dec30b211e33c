//! Agent configuration.
//!
//! Defaults, environment variable names and the config file loader live
//! here so no other crate has to repeat them.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default configuration values.
pub mod defaults {
    /// Wireless interface queried for the device address.
    pub const INTERFACE: &str = "wlan0";
    /// Application manifest holding the version field.
    pub const MANIFEST_PATH: &str = "manifest.json";
    /// Connectivity parameter store document.
    pub const PARAMETERS_PATH: &str = "parameters.json";
}

/// Environment variable names.
pub mod env_vars {
    pub const INTERFACE: &str = "FIELDLINK_INTERFACE";
    pub const MANIFEST_PATH: &str = "FIELDLINK_MANIFEST";
    pub const PARAMETERS_PATH: &str = "FIELDLINK_PARAMETERS";
}

/// Agent configuration.
///
/// Loaded from an optional JSON file, then overridden by environment
/// variables. Missing fields fall back to [`defaults`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Wireless interface name.
    #[serde(default = "default_interface")]
    pub interface: String,
    /// Path to the application manifest.
    #[serde(default = "default_manifest_path")]
    pub manifest_path: PathBuf,
    /// Path to the parameter store document.
    #[serde(default = "default_parameters_path")]
    pub parameters_path: PathBuf,
}

fn default_interface() -> String {
    defaults::INTERFACE.to_string()
}

fn default_manifest_path() -> PathBuf {
    PathBuf::from(defaults::MANIFEST_PATH)
}

fn default_parameters_path() -> PathBuf {
    PathBuf::from(defaults::PARAMETERS_PATH)
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            interface: default_interface(),
            manifest_path: default_manifest_path(),
            parameters_path: default_parameters_path(),
        }
    }
}

impl AgentConfig {
    /// Load configuration from an optional file, then apply environment
    /// variable overrides.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => {
                let raw = std::fs::read_to_string(path).map_err(|e| {
                    Error::Config(format!("failed to read {}: {}", path.display(), e))
                })?;
                serde_json::from_str(&raw).map_err(|e| {
                    Error::Config(format!("failed to parse {}: {}", path.display(), e))
                })?
            }
            None => Self::default(),
        };
        config.apply_env();
        Ok(config)
    }

    /// Apply environment variable overrides in place.
    fn apply_env(&mut self) {
        if let Ok(interface) = std::env::var(env_vars::INTERFACE) {
            self.interface = interface;
        }
        if let Ok(path) = std::env::var(env_vars::MANIFEST_PATH) {
            self.manifest_path = PathBuf::from(path);
        }
        if let Ok(path) = std::env::var(env_vars::PARAMETERS_PATH) {
            self.parameters_path = PathBuf::from(path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = AgentConfig::default();
        assert_eq!(config.interface, defaults::INTERFACE);
        assert_eq!(config.manifest_path, PathBuf::from(defaults::MANIFEST_PATH));
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"interface": "wlan1"}}"#).unwrap();

        let config = AgentConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.interface, "wlan1");
        // Unspecified fields keep their defaults.
        assert_eq!(
            config.parameters_path,
            PathBuf::from(defaults::PARAMETERS_PATH)
        );
    }

    #[test]
    fn test_load_missing_file() {
        let result = AgentConfig::load(Some(Path::new("/nonexistent/fieldlink.json")));
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
