use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeviceRepositoryError {
    #[error("storage error: {0}")]
    Storage(String),

    #[error("corrupt device row: {0}")]
    Mapping(String),
}

/// Reasons a reachability probe could not produce counters.
///
/// Never surfaced to API callers: the classifier maps every variant to
/// `Inactive`.
#[derive(Debug, Error)]
pub enum ReachabilityError {
    #[error("cannot resolve address {address}: {reason}")]
    Resolve { address: String, reason: String },

    #[error("cannot open icmp socket: {0}")]
    Socket(String),

    #[error("probe failed: {0}")]
    Probe(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DeviceValidationError {
    #[error("{0} must not be empty")]
    EmptyField(&'static str),

    #[error("invalid status {0:?}, expected \"Active\" or \"Inactive\"")]
    InvalidStatus(String),
}
