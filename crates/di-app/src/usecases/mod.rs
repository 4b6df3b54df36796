//! Registry use cases
//!
//! RegisterDevice ──> ClassifyReachability ──> ReachabilityProbePort
//!       │
//!       └──────────> DeviceRepositoryPort <── List / Get / Exists / Update / Delete
//!                            ▲
//! GetDeviceMonitoring ───────┘ + TelemetrySamplerPort

pub mod classify_reachability;
pub mod delete_device;
pub mod device_exists;
pub mod get_device;
pub mod get_device_monitoring;
pub mod list_devices;
pub mod register_device;
pub mod update_device;

#[cfg(test)]
pub(crate) mod mocks;

pub use classify_reachability::ClassifyReachability;
pub use delete_device::DeleteDevice;
pub use device_exists::DeviceExists;
pub use get_device::GetDevice;
pub use get_device_monitoring::GetDeviceMonitoring;
pub use list_devices::ListDevices;
pub use register_device::RegisterDevice;
pub use update_device::UpdateDevice;
