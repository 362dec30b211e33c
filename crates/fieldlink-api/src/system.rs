//! System direct methods.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{info, warn};

use fieldlink_core::method::{MethodHandler, MethodRequest, MethodResponse};
use fieldlink_system::Power;

/// Delay before a remotely requested reboot, so the method response can
/// still reach the transport.
pub const REBOOT_DELAY: Duration = Duration::from_secs(2);

/// `reboot`: restart the system after [`REBOOT_DELAY`].
pub struct Reboot {
    pub(crate) power: Power,
}

#[async_trait]
impl MethodHandler for Reboot {
    async fn handle(&self, _request: MethodRequest) -> MethodResponse {
        match self.power.restart(Some(REBOOT_DELAY)) {
            Ok(()) => {
                info!("system restart scheduled");
                MethodResponse::message("Restarting system")
            }
            Err(err) => {
                warn!(%err, "system restart failed");
                MethodResponse::error(500, "System restart failed")
            }
        }
    }
}
