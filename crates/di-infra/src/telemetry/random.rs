use rand::Rng;

use di_core::device::DeviceMetadata;
use di_core::ports::TelemetrySamplerPort;

const CPU_PERCENT_BOUND: u32 = 100;
const MEMORY_MB_BOUND: u32 = 16_000;
const DISK_GB_BOUND: u32 = 512;

/// Uniformly random, illustrative telemetry. Carries no real measurement.
pub struct RandomTelemetrySampler;

impl TelemetrySamplerPort for RandomTelemetrySampler {
    fn sample(&self) -> DeviceMetadata {
        let mut rng = rand::rng();
        DeviceMetadata::new(
            rng.random_range(0..CPU_PERCENT_BOUND),
            rng.random_range(0..MEMORY_MB_BOUND),
            rng.random_range(0..DISK_GB_BOUND),
        )
    }
}
