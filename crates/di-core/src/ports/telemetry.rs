use crate::device::DeviceMetadata;

pub trait TelemetrySamplerPort: Send + Sync {
    /// Produce one telemetry block. Each call is independent of the last.
    fn sample(&self) -> DeviceMetadata;
}
