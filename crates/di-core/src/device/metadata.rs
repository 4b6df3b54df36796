use serde::{Deserialize, Serialize};

/// Synthetic telemetry attached to a device on monitoring reads.
///
/// Never persisted. Values are pre-formatted with their unit suffix
/// (`"37%"`, `"2048MB"`, `"120GB"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceMetadata {
    pub cpu: String,
    pub memory: String,
    pub disk: String,
}

impl DeviceMetadata {
    pub fn new(cpu_percent: u32, memory_mb: u32, disk_gb: u32) -> Self {
        Self {
            cpu: format!("{cpu_percent}%"),
            memory: format!("{memory_mb}MB"),
            disk: format!("{disk_gb}GB"),
        }
    }
}
