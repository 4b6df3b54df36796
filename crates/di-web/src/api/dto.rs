//! Wire types for the `/devices` routes.

use chrono::{DateTime, Utc};
use di_core::device::{Device, DeviceMetadata, DevicePatch, DeviceRegistration, DeviceStatus};
use di_core::ports::DeviceValidationError;
use serde::{Deserialize, Serialize};

/// Device as rendered in every read response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceDto {
    pub id: i64,
    pub name: String,
    pub device_type: String,
    pub ip_address: String,
    pub status: DeviceStatus,
    pub os_type: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub metadata: Option<DeviceMetadata>,
}

fn from_millis(ms: i64) -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp_millis(ms).unwrap_or_default()
}

impl From<Device> for DeviceDto {
    fn from(device: Device) -> Self {
        Self {
            id: device.id.value(),
            name: device.name,
            device_type: device.device_type,
            ip_address: device.ip_address,
            status: device.status,
            os_type: device.os_type,
            created_at: from_millis(device.created_at_ms),
            updated_at: from_millis(device.updated_at_ms),
            metadata: device.metadata,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RegisteredDto {
    pub id: i64,
}

#[derive(Debug, Serialize)]
pub struct DeviceListDto {
    pub devices: Vec<DeviceDto>,
}

/// Zero-or-one element wrapper used by single-device reads.
#[derive(Debug, Serialize)]
pub struct DeviceLookupDto {
    pub device: Vec<DeviceDto>,
}

impl DeviceLookupDto {
    pub fn from_devices(devices: Vec<Device>) -> Self {
        Self {
            device: devices.into_iter().map(DeviceDto::from).collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterDeviceRequest {
    pub name: String,
    pub device_type: String,
    pub ip_address: String,
    pub os_type: String,
}

impl TryFrom<RegisterDeviceRequest> for DeviceRegistration {
    type Error = DeviceValidationError;

    fn try_from(req: RegisterDeviceRequest) -> Result<Self, Self::Error> {
        DeviceRegistration::new(req.name, req.device_type, req.ip_address, req.os_type)
    }
}

/// Sparse update body. An absent key and `null` both leave the field as is.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDeviceRequest {
    pub name: Option<String>,
    pub device_type: Option<String>,
    pub ip_address: Option<String>,
    pub status: Option<String>,
    pub os_type: Option<String>,
}

impl TryFrom<UpdateDeviceRequest> for DevicePatch {
    type Error = DeviceValidationError;

    fn try_from(req: UpdateDeviceRequest) -> Result<Self, Self::Error> {
        let status = req
            .status
            .as_deref()
            .map(str::parse::<DeviceStatus>)
            .transpose()?;

        Ok(DevicePatch {
            name: req.name,
            device_type: req.device_type,
            ip_address: req.ip_address,
            status,
            os_type: req.os_type,
        })
    }
}
