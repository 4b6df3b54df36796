use crate::{
    device::{Device, DeviceId, DevicePatch, DeviceRegistration, DeviceStatus},
    ports::errors::DeviceRepositoryError,
};
use async_trait::async_trait;

#[async_trait]
pub trait DeviceRepositoryPort: Send + Sync {
    /// Persist a new record and return the identifier the store assigned.
    ///
    /// `created_at` and `updated_at` are both set to `now_ms`.
    async fn insert(
        &self,
        registration: &DeviceRegistration,
        status: DeviceStatus,
        now_ms: i64,
    ) -> Result<DeviceId, DeviceRepositoryError>;

    /// Zero or one record. Absence is not an error.
    async fn find_by_id(&self, id: DeviceId) -> Result<Option<Device>, DeviceRepositoryError>;

    /// All records, in storage order.
    async fn list_all(&self) -> Result<Vec<Device>, DeviceRepositoryError>;

    async fn exists(&self, id: DeviceId) -> Result<bool, DeviceRepositoryError>;

    /// Merge `patch` into the stored record in a single statement.
    ///
    /// Returns the number of rows touched: `0` when the record does not exist
    /// at the time of the write, `1` otherwise.
    async fn apply_patch(
        &self,
        id: DeviceId,
        patch: &DevicePatch,
        now_ms: i64,
    ) -> Result<u64, DeviceRepositoryError>;

    /// Returns the number of rows removed (`0` or `1`).
    async fn delete(&self, id: DeviceId) -> Result<u64, DeviceRepositoryError>;
}
