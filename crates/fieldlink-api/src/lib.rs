//! Direct-method API for the Fieldlink agent.
//!
//! Binds the connectivity store and the system components to the method
//! registry. The external dispatch layer drives the registry; handlers
//! here only translate between method payloads and component calls.

pub mod connectivity;
pub mod system;

use std::sync::Arc;

use fieldlink_core::method::MethodRegistry;
use fieldlink_core::params::ParameterStore;
use fieldlink_system::Power;

use connectivity::{
    GetConnectionParameters, GetProvisioningParameters, UpdateConnectionParameters,
    UpdateProvisioningParameters,
};
use system::Reboot;

pub use system::REBOOT_DELAY;

/// Build the registry with all direct methods the agent exposes.
pub fn build_registry(store: Arc<dyn ParameterStore>, power: Power) -> MethodRegistry {
    let mut registry = MethodRegistry::new();
    registry.register(
        "getConnectionParameters",
        Arc::new(GetConnectionParameters {
            store: store.clone(),
        }),
    );
    registry.register(
        "updateConnectionParameters",
        Arc::new(UpdateConnectionParameters {
            store: store.clone(),
        }),
    );
    registry.register(
        "getProvisioningParameters",
        Arc::new(GetProvisioningParameters {
            store: store.clone(),
        }),
    );
    registry.register(
        "updateProvisioningParameters",
        Arc::new(UpdateProvisioningParameters { store }),
    );
    registry.register("reboot", Arc::new(Reboot { power }));
    registry
}
