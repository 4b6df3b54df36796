use std::sync::Arc;

use di_core::device::Device;
use di_core::ports::{DeviceRepositoryError, DeviceRepositoryPort};
use tracing::info;

/// Use case for listing every registered device.
/// 列出所有已注册设备的用例。
pub struct ListDevices {
    device_repo: Arc<dyn DeviceRepositoryPort>,
}

impl ListDevices {
    pub fn from_ports(device_repo: Arc<dyn DeviceRepositoryPort>) -> Self {
        Self { device_repo }
    }

    #[tracing::instrument(name = "usecase.list_devices.execute", skip(self))]
    pub async fn execute(&self) -> Result<Vec<Device>, DeviceRepositoryError> {
        let devices = self.device_repo.list_all().await?;
        info!(count = devices.len(), "Listed devices");
        Ok(devices)
    }
}
