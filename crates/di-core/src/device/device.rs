use super::metadata::DeviceMetadata;
use super::status::DeviceStatus;
use super::value_objects::DeviceId;

/// A registered device record
/// 已注册的设备记录
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Device {
    pub id: DeviceId,
    pub name: String,
    pub device_type: String,
    pub ip_address: String,
    pub os_type: String,
    pub status: DeviceStatus,
    pub created_at_ms: i64,
    pub updated_at_ms: i64,
    /// Only populated by monitoring reads; storage never yields it.
    pub metadata: Option<DeviceMetadata>,
}

impl Device {
    pub fn id(&self) -> DeviceId {
        self.id
    }

    /// Attach a freshly sampled telemetry block, replacing any previous one.
    pub fn with_metadata(mut self, metadata: DeviceMetadata) -> Self {
        self.metadata = Some(metadata);
        self
    }
}
