//! Device domain models.

pub mod device;
pub mod metadata;
pub mod patch;
pub mod registration;
pub mod status;
pub mod value_objects;

pub use device::Device;
pub use metadata::DeviceMetadata;
pub use patch::DevicePatch;
pub use registration::DeviceRegistration;
pub use status::DeviceStatus;
pub use value_objects::DeviceId;
