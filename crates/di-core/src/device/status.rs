use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;

use crate::ports::errors::DeviceValidationError;

/// Reachability status of a registered device.
///
/// A stored record always carries one of these two values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeviceStatus {
    Active,
    Inactive,
}

impl DeviceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceStatus::Active => "Active",
            DeviceStatus::Inactive => "Inactive",
        }
    }
}

impl FromStr for DeviceStatus {
    type Err = DeviceValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Active" => Ok(DeviceStatus::Active),
            "Inactive" => Ok(DeviceStatus::Inactive),
            other => Err(DeviceValidationError::InvalidStatus(other.to_string())),
        }
    }
}

impl Display for DeviceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
