use std::sync::Arc;

use di_core::device::DeviceId;
use di_core::ports::{DeviceRepositoryError, DeviceRepositoryPort};
use tracing::info;

/// Use case for removing a device record.
/// 删除设备记录的用例。
pub struct DeleteDevice {
    device_repo: Arc<dyn DeviceRepositoryPort>,
}

impl DeleteDevice {
    pub fn from_ports(device_repo: Arc<dyn DeviceRepositoryPort>) -> Self {
        Self { device_repo }
    }

    /// Returns the number of removed records; `0` means nothing matched.
    #[tracing::instrument(
        name = "usecase.delete_device.execute",
        skip(self),
        fields(device_id = %id)
    )]
    pub async fn execute(&self, id: DeviceId) -> Result<u64, DeviceRepositoryError> {
        let removed = self.device_repo.delete(id).await?;
        info!(removed, "Device delete finished");
        Ok(removed)
    }
}
