//! Connectivity parameter store.
//!
//! The device keeps two opaque parameter sets: connection parameters for
//! the cloud hub link and provisioning parameters for enrollment. The
//! agent only reads and replaces them whole; their contents belong to the
//! connectivity layer.

use std::path::PathBuf;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tokio::sync::RwLock;
use tracing::debug;

use crate::error::{Error, Result};

/// Access to the connectivity parameter sets.
#[async_trait]
pub trait ParameterStore: Send + Sync {
    /// Current connection parameters.
    async fn connection_parameters(&self) -> Value;

    /// Replace the connection parameters.
    async fn update_connection_parameters(&self, parameters: Value) -> Result<()>;

    /// Current provisioning parameters.
    async fn provisioning_parameters(&self) -> Value;

    /// Replace the provisioning parameters.
    async fn update_provisioning_parameters(&self, parameters: Value) -> Result<()>;
}

/// On-disk shape of the store document.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoreDocument {
    #[serde(default = "empty_object")]
    connection: Value,
    #[serde(default = "empty_object")]
    provisioning: Value,
}

fn empty_object() -> Value {
    json!({})
}

impl Default for StoreDocument {
    fn default() -> Self {
        Self {
            connection: empty_object(),
            provisioning: empty_object(),
        }
    }
}

/// File-backed parameter store.
///
/// Both parameter sets live in one JSON document, rewritten on every
/// update. A missing file loads as empty parameter sets.
pub struct FileParameterStore {
    path: PathBuf,
    state: RwLock<StoreDocument>,
}

impl FileParameterStore {
    /// Open the store at `path`, loading the existing document if any.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let document = match std::fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw)
                .map_err(|e| Error::Store(format!("invalid store document: {}", e)))?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no parameter document, starting empty");
                StoreDocument::default()
            }
            Err(err) => {
                return Err(Error::Store(format!(
                    "failed to read {}: {}",
                    path.display(),
                    err
                )));
            }
        };
        Ok(Self {
            path,
            state: RwLock::new(document),
        })
    }

    /// Reject anything that is not a JSON object.
    fn check_object(parameters: &Value) -> Result<()> {
        if parameters.is_object() {
            Ok(())
        } else {
            Err(Error::Validation(
                "parameters must be a JSON object".to_string(),
            ))
        }
    }

    /// Write the current document to disk.
    async fn persist(&self) -> Result<()> {
        let document = self.state.read().await;
        let raw = serde_json::to_string_pretty(&*document)?;
        std::fs::write(&self.path, raw)
            .map_err(|e| Error::Store(format!("failed to write {}: {}", self.path.display(), e)))
    }
}

#[async_trait]
impl ParameterStore for FileParameterStore {
    async fn connection_parameters(&self) -> Value {
        self.state.read().await.connection.clone()
    }

    async fn update_connection_parameters(&self, parameters: Value) -> Result<()> {
        Self::check_object(&parameters)?;
        self.state.write().await.connection = parameters;
        self.persist().await
    }

    async fn provisioning_parameters(&self) -> Value {
        self.state.read().await.provisioning.clone()
    }

    async fn update_provisioning_parameters(&self, parameters: Value) -> Result<()> {
        Self::check_object(&parameters)?;
        self.state.write().await.provisioning = parameters;
        self.persist().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileParameterStore::open(dir.path().join("parameters.json")).unwrap();
        assert_eq!(store.connection_parameters().await, json!({}));
        assert_eq!(store.provisioning_parameters().await, json!({}));
    }

    #[tokio::test]
    async fn test_update_persists_and_reloads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("parameters.json");

        let store = FileParameterStore::open(&path).unwrap();
        store
            .update_connection_parameters(json!({"hostName": "hub.example"}))
            .await
            .unwrap();
        store
            .update_provisioning_parameters(json!({"scopeId": "0ne000"}))
            .await
            .unwrap();

        let reloaded = FileParameterStore::open(&path).unwrap();
        assert_eq!(
            reloaded.connection_parameters().await,
            json!({"hostName": "hub.example"})
        );
        assert_eq!(
            reloaded.provisioning_parameters().await,
            json!({"scopeId": "0ne000"})
        );
    }

    #[tokio::test]
    async fn test_update_rejects_non_object() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileParameterStore::open(dir.path().join("parameters.json")).unwrap();
        let result = store.update_connection_parameters(json!("not-an-object")).await;
        assert!(matches!(result, Err(Error::Validation(_))));
        // The stored value is untouched.
        assert_eq!(store.connection_parameters().await, json!({}));
    }
}
