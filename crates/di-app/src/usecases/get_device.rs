use std::sync::Arc;

use di_core::device::{Device, DeviceId};
use di_core::ports::{DeviceRepositoryError, DeviceRepositoryPort};
use tracing::info;

/// Fetch one device by identifier.
///
/// Yields a zero-or-one element list; absence is not an error.
pub struct GetDevice {
    device_repo: Arc<dyn DeviceRepositoryPort>,
}

impl GetDevice {
    pub fn from_ports(device_repo: Arc<dyn DeviceRepositoryPort>) -> Self {
        Self { device_repo }
    }

    #[tracing::instrument(
        name = "usecase.get_device.execute",
        skip(self),
        fields(device_id = %id)
    )]
    pub async fn execute(&self, id: DeviceId) -> Result<Vec<Device>, DeviceRepositoryError> {
        let devices: Vec<Device> = self.device_repo.find_by_id(id).await?.into_iter().collect();
        info!(found = !devices.is_empty(), "Device lookup finished");
        Ok(devices)
    }
}
