use std::sync::Arc;

use di_core::device::{DeviceId, DeviceRegistration};
use di_core::ports::{ClockPort, DeviceRepositoryError, DeviceRepositoryPort};
use tracing::info;

use super::ClassifyReachability;

/// Use case for registering a new device.
/// 注册新设备的用例。
///
/// The reachability verdict is computed before anything is written, so a
/// stored record always carries a status.
pub struct RegisterDevice {
    device_repo: Arc<dyn DeviceRepositoryPort>,
    classifier: Arc<ClassifyReachability>,
    clock: Arc<dyn ClockPort>,
}

impl RegisterDevice {
    pub fn from_ports(
        device_repo: Arc<dyn DeviceRepositoryPort>,
        classifier: Arc<ClassifyReachability>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            device_repo,
            classifier,
            clock,
        }
    }

    /// Classifies `registration.ip_address`, then inserts the record.
    ///
    /// # Returns
    /// The identifier assigned by the store, or `Storage` if the insert fails.
    /// Probe failures never surface here.
    #[tracing::instrument(
        name = "usecase.register_device.execute",
        skip(self, registration),
        fields(name = %registration.name, ip_address = %registration.ip_address)
    )]
    pub async fn execute(
        &self,
        registration: DeviceRegistration,
    ) -> Result<DeviceId, DeviceRepositoryError> {
        let status = self.classifier.execute(&registration.ip_address).await;

        let id = self
            .device_repo
            .insert(&registration, status, self.clock.now_ms())
            .await?;

        info!(device_id = %id, %status, "Device registered");
        Ok(id)
    }
}
