use std::sync::Arc;

use di_core::device::{Device, DeviceId};
use di_core::ports::{DeviceRepositoryError, DeviceRepositoryPort, TelemetrySamplerPort};
use tracing::info;

/// Fetch one device and attach a freshly sampled telemetry block.
///
/// Nothing is persisted; every call samples anew.
pub struct GetDeviceMonitoring {
    device_repo: Arc<dyn DeviceRepositoryPort>,
    telemetry: Arc<dyn TelemetrySamplerPort>,
}

impl GetDeviceMonitoring {
    pub fn from_ports(
        device_repo: Arc<dyn DeviceRepositoryPort>,
        telemetry: Arc<dyn TelemetrySamplerPort>,
    ) -> Self {
        Self {
            device_repo,
            telemetry,
        }
    }

    #[tracing::instrument(
        name = "usecase.get_device_monitoring.execute",
        skip(self),
        fields(device_id = %id)
    )]
    pub async fn execute(&self, id: DeviceId) -> Result<Vec<Device>, DeviceRepositoryError> {
        let devices: Vec<Device> = self
            .device_repo
            .find_by_id(id)
            .await?
            .into_iter()
            .map(|device| device.with_metadata(self.telemetry.sample()))
            .collect();

        info!(found = !devices.is_empty(), "Monitoring snapshot built");
        Ok(devices)
    }
}
