//! Application manifest access.
//!
//! The deployed agent ships with a small JSON manifest next to its data
//! files; the version field is what the control plane sees.

use std::path::Path;

use serde::Deserialize;

use fieldlink_core::error::{Error, Result};

/// The application manifest.
#[derive(Debug, Clone, Deserialize)]
pub struct AppManifest {
    /// Application name.
    #[serde(default)]
    pub name: Option<String>,
    /// Application version, semver.
    pub version: String,
}

impl AppManifest {
    /// Read and validate the manifest at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| Error::Manifest(format!("failed to read {}: {}", path.display(), e)))?;
        let manifest: AppManifest = serde_json::from_str(&raw)
            .map_err(|e| Error::Manifest(format!("invalid manifest: {}", e)))?;
        semver::Version::parse(&manifest.version).map_err(|e| {
            Error::Manifest(format!("invalid version '{}': {}", manifest.version, e))
        })?;
        Ok(manifest)
    }
}

/// The application version from the manifest at `path`.
pub fn application_version(path: &Path) -> Result<String> {
    AppManifest::load(path).map(|manifest| manifest.version)
}
