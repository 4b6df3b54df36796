use crate::ports::errors::DeviceValidationError;

/// Input for registering a new device.
///
/// Status, identifier and timestamps are not part of the input: the registry
/// assigns them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceRegistration {
    pub name: String,
    pub device_type: String,
    pub ip_address: String,
    pub os_type: String,
}

impl DeviceRegistration {
    /// Build a registration, rejecting empty `name`, `device_type` and `os_type`.
    ///
    /// `ip_address` is taken as given: it is neither checked nor parsed here.
    /// Whitespace counts as content.
    pub fn new(
        name: impl Into<String>,
        device_type: impl Into<String>,
        ip_address: impl Into<String>,
        os_type: impl Into<String>,
    ) -> Result<Self, DeviceValidationError> {
        let registration = Self {
            name: name.into(),
            device_type: device_type.into(),
            ip_address: ip_address.into(),
            os_type: os_type.into(),
        };
        registration.validate()?;
        Ok(registration)
    }

    fn validate(&self) -> Result<(), DeviceValidationError> {
        let fields = [
            ("name", &self.name),
            ("deviceType", &self.device_type),
            ("osType", &self.os_type),
        ];
        for (field, value) in fields {
            if value.is_empty() {
                return Err(DeviceValidationError::EmptyField(field));
            }
        }
        Ok(())
    }
}
