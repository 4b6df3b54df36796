//! Port interfaces for the application layer
//!
//! Ports define the contract between the use cases and the infrastructure
//! implementations, so the registry logic stays independent of the storage
//! engine, the ICMP stack and the system clock.

mod clock;
pub mod device_repository;
pub mod errors;
pub mod reachability;
mod telemetry;

pub use clock::*;
pub use device_repository::DeviceRepositoryPort;
pub use errors::{DeviceRepositoryError, DeviceValidationError, ReachabilityError};
pub use reachability::ReachabilityProbePort;
pub use telemetry::TelemetrySamplerPort;
