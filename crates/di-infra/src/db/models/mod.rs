pub mod device_row;

pub use device_row::{DeviceChangesetRow, DeviceRow, NewDeviceRow};
