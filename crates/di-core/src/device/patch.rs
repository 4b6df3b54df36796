use super::status::DeviceStatus;

/// Sparse update for a device record.
///
/// `None` leaves the stored value untouched. `Some("")` is a valid overwrite.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DevicePatch {
    pub name: Option<String>,
    pub device_type: Option<String>,
    pub ip_address: Option<String>,
    pub status: Option<DeviceStatus>,
    pub os_type: Option<String>,
}

impl DevicePatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.device_type.is_none()
            && self.ip_address.is_none()
            && self.status.is_none()
            && self.os_type.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_patch_is_empty() {
        assert!(DevicePatch::default().is_empty());
    }

    #[test]
    fn empty_string_counts_as_present() {
        let patch = DevicePatch {
            name: Some(String::new()),
            ..Default::default()
        };
        assert!(!patch.is_empty());
    }
}
