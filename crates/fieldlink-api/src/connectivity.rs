//! Connectivity direct methods.
//!
//! Reading and replacing the cloud connection and provisioning parameter
//! sets. Update methods require a `parameters` field in the payload and
//! translate store failures into 500-class responses.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use fieldlink_core::method::{MethodHandler, MethodRequest, MethodResponse};
use fieldlink_core::params::ParameterStore;

/// `getConnectionParameters`: report the current connection parameters.
pub struct GetConnectionParameters {
    pub(crate) store: Arc<dyn ParameterStore>,
}

#[async_trait]
impl MethodHandler for GetConnectionParameters {
    async fn handle(&self, _request: MethodRequest) -> MethodResponse {
        MethodResponse::ok(self.store.connection_parameters().await)
    }
}

/// `updateConnectionParameters`: replace the connection parameters.
pub struct UpdateConnectionParameters {
    pub(crate) store: Arc<dyn ParameterStore>,
}

#[async_trait]
impl MethodHandler for UpdateConnectionParameters {
    async fn handle(&self, request: MethodRequest) -> MethodResponse {
        let Some(parameters) = request.field("parameters") else {
            return MethodResponse::error(400, "No parameters");
        };
        match self
            .store
            .update_connection_parameters(parameters.clone())
            .await
        {
            Ok(()) => {
                info!("connection parameters updated");
                MethodResponse::message("Successfully updated the connection parameters")
            }
            Err(err) => MethodResponse::error(500, err.to_string()),
        }
    }
}

/// `getProvisioningParameters`: report the current provisioning
/// parameters.
pub struct GetProvisioningParameters {
    pub(crate) store: Arc<dyn ParameterStore>,
}

#[async_trait]
impl MethodHandler for GetProvisioningParameters {
    async fn handle(&self, _request: MethodRequest) -> MethodResponse {
        MethodResponse::ok(self.store.provisioning_parameters().await)
    }
}

/// `updateProvisioningParameters`: replace the provisioning parameters.
pub struct UpdateProvisioningParameters {
    pub(crate) store: Arc<dyn ParameterStore>,
}

#[async_trait]
impl MethodHandler for UpdateProvisioningParameters {
    async fn handle(&self, request: MethodRequest) -> MethodResponse {
        let Some(parameters) = request.field("parameters") else {
            return MethodResponse::error(400, "No parameters");
        };
        match self
            .store
            .update_provisioning_parameters(parameters.clone())
            .await
        {
            Ok(()) => {
                info!("provisioning parameters updated");
                MethodResponse::message("Successfully updated the provisioning parameters")
            }
            Err(err) => MethodResponse::error(500, err.to_string()),
        }
    }
}
