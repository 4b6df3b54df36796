use std::sync::Arc;

use di_core::device::{DeviceId, DevicePatch};
use di_core::ports::{ClockPort, DeviceRepositoryError, DeviceRepositoryPort};
use tracing::info;

/// Use case for partially updating a device.
/// 部分更新设备的用例。
pub struct UpdateDevice {
    device_repo: Arc<dyn DeviceRepositoryPort>,
    clock: Arc<dyn ClockPort>,
}

impl UpdateDevice {
    pub fn from_ports(device_repo: Arc<dyn DeviceRepositoryPort>, clock: Arc<dyn ClockPort>) -> Self {
        Self { device_repo, clock }
    }

    /// Applies `patch` to the stored record.
    ///
    /// The merge happens inside a single storage write, so concurrent patches
    /// touching different fields never overwrite each other. Fields absent from
    /// the patch keep their stored values; `updated_at` is always refreshed.
    ///
    /// # Returns
    /// Affected rows: `0` when the record vanished before the write landed.
    #[tracing::instrument(
        name = "usecase.update_device.execute",
        skip(self, patch),
        fields(device_id = %id, empty_patch = patch.is_empty())
    )]
    pub async fn execute(
        &self,
        id: DeviceId,
        patch: &DevicePatch,
    ) -> Result<u64, DeviceRepositoryError> {
        let affected = self
            .device_repo
            .apply_patch(id, patch, self.clock.now_ms())
            .await?;

        info!(affected, "Device patch applied");
        Ok(affected)
    }
}
