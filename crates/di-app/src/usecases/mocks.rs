//! Port mocks shared by the use case unit tests.

use di_core::device::{
    Device, DeviceId, DeviceMetadata, DevicePatch, DeviceRegistration, DeviceStatus,
};
use di_core::ports::{
    ClockPort, DeviceRepositoryError, DeviceRepositoryPort, ReachabilityError,
    ReachabilityProbePort, TelemetrySamplerPort,
};
use di_core::ProbeStats;

mockall::mock! {
    pub DeviceRepo {}

    #[async_trait::async_trait]
    impl DeviceRepositoryPort for DeviceRepo {
        async fn insert(
            &self,
            registration: &DeviceRegistration,
            status: DeviceStatus,
            now_ms: i64,
        ) -> Result<DeviceId, DeviceRepositoryError>;
        async fn find_by_id(&self, id: DeviceId) -> Result<Option<Device>, DeviceRepositoryError>;
        async fn list_all(&self) -> Result<Vec<Device>, DeviceRepositoryError>;
        async fn exists(&self, id: DeviceId) -> Result<bool, DeviceRepositoryError>;
        async fn apply_patch(
            &self,
            id: DeviceId,
            patch: &DevicePatch,
            now_ms: i64,
        ) -> Result<u64, DeviceRepositoryError>;
        async fn delete(&self, id: DeviceId) -> Result<u64, DeviceRepositoryError>;
    }
}

mockall::mock! {
    pub Probe {}

    #[async_trait::async_trait]
    impl ReachabilityProbePort for Probe {
        async fn probe(&self, address: &str) -> Result<ProbeStats, ReachabilityError>;
    }
}

mockall::mock! {
    pub Telemetry {}

    impl TelemetrySamplerPort for Telemetry {
        fn sample(&self) -> DeviceMetadata;
    }
}

pub struct FixedClock(pub i64);

impl ClockPort for FixedClock {
    fn now_ms(&self) -> i64 {
        self.0
    }
}

pub fn sample_device(id: i64) -> Device {
    Device {
        id: DeviceId::new(id),
        name: "edge-1".to_string(),
        device_type: "router".to_string(),
        ip_address: "10.0.0.5".to_string(),
        os_type: "linux".to_string(),
        status: DeviceStatus::Active,
        created_at_ms: 1_000,
        updated_at_ms: 1_000,
        metadata: None,
    }
}
