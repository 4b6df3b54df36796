use anyhow::Result;
use di_core::device::{Device, DeviceId, DevicePatch, DeviceStatus};

use crate::db::models::{DeviceChangesetRow, DeviceRow};
use crate::db::ports::{InsertMapper, RowMapper};

pub struct DeviceRowMapper;

impl RowMapper<DeviceRow, Device> for DeviceRowMapper {
    fn to_domain(&self, row: &DeviceRow) -> Result<Device> {
        let status = row.status.parse::<DeviceStatus>()?;
        Ok(Device {
            id: DeviceId::new(row.id),
            name: row.name.clone(),
            device_type: row.device_type.clone(),
            ip_address: row.ip_address.clone(),
            os_type: row.os_type.clone(),
            status,
            created_at_ms: row.created_at,
            updated_at_ms: row.updated_at,
            metadata: None,
        })
    }
}

impl InsertMapper<DevicePatch, DeviceChangesetRow> for DeviceRowMapper {
    fn to_row(&self, patch: &DevicePatch) -> Result<DeviceChangesetRow> {
        Ok(DeviceChangesetRow {
            name: patch.name.clone(),
            device_type: patch.device_type.clone(),
            status: patch.status.map(|s| s.as_str().to_string()),
            ip_address: patch.ip_address.clone(),
            os_type: patch.os_type.clone(),
        })
    }
}
