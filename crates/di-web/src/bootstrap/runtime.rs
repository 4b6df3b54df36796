//! # Use Cases Accessor
//!
//! [`AppRuntime`] owns the wired [`AppDeps`]; handlers call
//! `runtime.usecases().xxx()` to get a use case with its ports attached.
//!
//! ## Adding New Use Cases
//!
//! 1. Give the use case a `from_ports()` constructor taking its ports
//! 2. Add a method to `UseCases` that calls it with deps

use std::sync::Arc;

use di_app::usecases::{
    ClassifyReachability, DeleteDevice, DeviceExists, GetDevice, GetDeviceMonitoring, ListDevices,
    RegisterDevice, UpdateDevice,
};
use di_app::AppDeps;

/// Application runtime with dependencies.
///
/// Shared by every request handler through axum state.
pub struct AppRuntime {
    pub deps: AppDeps,
}

impl AppRuntime {
    pub fn new(deps: AppDeps) -> Self {
        Self { deps }
    }

    pub fn usecases(&self) -> UseCases<'_> {
        UseCases::new(self)
    }
}

pub struct UseCases<'a> {
    runtime: &'a AppRuntime,
}

impl<'a> UseCases<'a> {
    /// Create a new UseCases accessor from AppRuntime.
    /// 从 AppRuntime 创建新的 UseCases 访问器。
    pub fn new(runtime: &'a AppRuntime) -> Self {
        Self { runtime }
    }

    pub fn classify_reachability(&self) -> ClassifyReachability {
        ClassifyReachability::from_port(
            self.runtime.deps.reachability_probe.clone(),
            self.runtime.deps.probe_threshold,
        )
    }

    /// Registration runs the classifier before persisting.
    pub fn register_device(&self) -> RegisterDevice {
        RegisterDevice::from_ports(
            self.runtime.deps.device_repo.clone(),
            Arc::new(self.classify_reachability()),
            self.runtime.deps.clock.clone(),
        )
    }

    pub fn list_devices(&self) -> ListDevices {
        ListDevices::from_ports(self.runtime.deps.device_repo.clone())
    }

    pub fn get_device(&self) -> GetDevice {
        GetDevice::from_ports(self.runtime.deps.device_repo.clone())
    }

    pub fn device_exists(&self) -> DeviceExists {
        DeviceExists::from_ports(self.runtime.deps.device_repo.clone())
    }

    pub fn update_device(&self) -> UpdateDevice {
        UpdateDevice::from_ports(
            self.runtime.deps.device_repo.clone(),
            self.runtime.deps.clock.clone(),
        )
    }

    pub fn delete_device(&self) -> DeleteDevice {
        DeleteDevice::from_ports(self.runtime.deps.device_repo.clone())
    }

    pub fn get_device_monitoring(&self) -> GetDeviceMonitoring {
        GetDeviceMonitoring::from_ports(
            self.runtime.deps.device_repo.clone(),
            self.runtime.deps.telemetry.clone(),
        )
    }
}
