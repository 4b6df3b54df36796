//! # di-core
//!
//! Core domain models and business rules for the device inventory.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

pub mod config;
pub mod device;
pub mod ports;
pub mod reachability;

// Re-export commonly used types at the crate root
pub use config::AppConfig;
pub use device::{
    Device, DeviceId, DeviceMetadata, DevicePatch, DeviceRegistration, DeviceStatus,
};
pub use reachability::ProbeStats;
