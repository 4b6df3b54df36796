//! Device lifecycle integration tests
//! 设备生命周期集成测试
//!
//! Runs the use cases against the real SQLite repository with a scripted
//! reachability probe.

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use di_app::usecases::{
    ClassifyReachability, DeleteDevice, DeviceExists, GetDevice, GetDeviceMonitoring, ListDevices,
    RegisterDevice, UpdateDevice,
};
use di_core::device::{DeviceId, DevicePatch, DeviceRegistration, DeviceStatus};
use di_core::ports::{DeviceRepositoryPort, ReachabilityError, ReachabilityProbePort};
use di_core::ProbeStats;
use di_infra::db::mappers::DeviceRowMapper;
use di_infra::db::pool::init_db_pool;
use di_infra::db::repositories::DieselDeviceRepository;
use di_infra::db::DieselSqliteExecutor;
use di_infra::{RandomTelemetrySampler, SystemClock};
use tempfile::TempDir;
use tracing_subscriber::EnvFilter;

/// Answers a fixed number of echo requests out of five.
struct ScriptedProbe {
    replies: u32,
}

#[async_trait]
impl ReachabilityProbePort for ScriptedProbe {
    async fn probe(&self, _address: &str) -> Result<ProbeStats, ReachabilityError> {
        Ok(ProbeStats::new(5, self.replies))
    }
}

struct Harness {
    _dir: TempDir,
    repo: Arc<dyn DeviceRepositoryPort>,
    register: RegisterDevice,
}

/// Route use-case spans to the test output; `RUST_LOG` overrides the level.
fn init_test_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

fn harness(replies: u32) -> Harness {
    init_test_tracing();
    let dir = tempfile::tempdir().expect("temp dir");
    let db_path = dir.path().join("devices.db");
    let pool = init_db_pool(db_path.to_str().unwrap()).expect("Failed to create test DB pool");
    let repo: Arc<dyn DeviceRepositoryPort> = Arc::new(DieselDeviceRepository::new(
        DieselSqliteExecutor::new(pool),
        DeviceRowMapper,
        DeviceRowMapper,
    ));
    let classifier = Arc::new(ClassifyReachability::from_port(
        Arc::new(ScriptedProbe { replies }),
        0.33,
    ));
    let register = RegisterDevice::from_ports(repo.clone(), classifier, Arc::new(SystemClock));
    Harness {
        _dir: dir,
        repo,
        register,
    }
}

fn edge_router() -> DeviceRegistration {
    DeviceRegistration::new("edge-1", "router", "10.0.0.5", "linux").unwrap()
}

#[tokio::test]
async fn test_register_update_delete_lifecycle() {
    let h = harness(5);
    let get = GetDevice::from_ports(h.repo.clone());
    let update = UpdateDevice::from_ports(h.repo.clone(), Arc::new(SystemClock));
    let delete = DeleteDevice::from_ports(h.repo.clone());

    let id = h.register.execute(edge_router()).await.unwrap();
    assert_eq!(id, DeviceId::new(1));

    let devices = get.execute(id).await.unwrap();
    assert_eq!(devices.len(), 1);
    assert_eq!(devices[0].name, "edge-1");
    assert_eq!(devices[0].status, DeviceStatus::Active);
    assert!(devices[0].metadata.is_none());

    let patch = DevicePatch {
        status: Some(DeviceStatus::Inactive),
        ..Default::default()
    };
    assert_eq!(update.execute(id, &patch).await.unwrap(), 1);

    let updated = &get.execute(id).await.unwrap()[0];
    assert_eq!(updated.status, DeviceStatus::Inactive);
    assert_eq!(updated.name, "edge-1");
    assert_eq!(updated.ip_address, "10.0.0.5");
    assert!(updated.updated_at_ms >= updated.created_at_ms);

    assert_eq!(delete.execute(id).await.unwrap(), 1);
    assert!(get.execute(id).await.unwrap().is_empty());
    assert_eq!(delete.execute(id).await.unwrap(), 0);
}

#[tokio::test]
async fn test_unreachable_device_registers_inactive() {
    let h = harness(1);

    let id = h.register.execute(edge_router()).await.unwrap();

    let device = h.repo.find_by_id(id).await.unwrap().unwrap();
    assert_eq!(device.status, DeviceStatus::Inactive);
}

#[tokio::test]
async fn test_two_of_five_replies_is_active() {
    let h = harness(2);

    let id = h.register.execute(edge_router()).await.unwrap();

    let device = h.repo.find_by_id(id).await.unwrap().unwrap();
    assert_eq!(device.status, DeviceStatus::Active);
}

#[tokio::test]
async fn test_get_unknown_id_is_empty_not_error() {
    let h = harness(5);

    let devices = GetDevice::from_ports(h.repo.clone())
        .execute(DeviceId::new(9999))
        .await
        .unwrap();

    assert!(devices.is_empty());
    assert!(!DeviceExists::from_ports(h.repo.clone())
        .execute(DeviceId::new(9999))
        .await
        .unwrap());
}

#[tokio::test]
async fn test_empty_patch_only_refreshes_timestamp() {
    let h = harness(5);
    let id = h.register.execute(edge_router()).await.unwrap();
    let before = h.repo.find_by_id(id).await.unwrap().unwrap();

    let affected = UpdateDevice::from_ports(h.repo.clone(), Arc::new(SystemClock))
        .execute(id, &DevicePatch::default())
        .await
        .unwrap();

    let after = h.repo.find_by_id(id).await.unwrap().unwrap();
    assert_eq!(affected, 1);
    assert_eq!(after.name, before.name);
    assert_eq!(after.device_type, before.device_type);
    assert_eq!(after.ip_address, before.ip_address);
    assert_eq!(after.os_type, before.os_type);
    assert_eq!(after.status, before.status);
    assert_eq!(after.created_at_ms, before.created_at_ms);
    assert!(after.updated_at_ms >= before.updated_at_ms);
}

#[tokio::test]
async fn test_list_returns_every_registered_device() {
    let h = harness(5);
    for name in ["edge-1", "edge-2", "edge-3"] {
        let registration = DeviceRegistration::new(name, "router", "10.0.0.5", "linux").unwrap();
        h.register.execute(registration).await.unwrap();
    }

    let devices = ListDevices::from_ports(h.repo.clone()).execute().await.unwrap();

    let names: Vec<&str> = devices.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["edge-1", "edge-2", "edge-3"]);
}

#[tokio::test]
async fn test_monitoring_samples_fresh_metadata_each_call() {
    let h = harness(5);
    let id = h.register.execute(edge_router()).await.unwrap();
    let monitoring =
        GetDeviceMonitoring::from_ports(h.repo.clone(), Arc::new(RandomTelemetrySampler));

    let mut samples = HashSet::new();
    for _ in 0..20 {
        let devices = monitoring.execute(id).await.unwrap();
        let metadata = devices[0].metadata.clone().unwrap();
        assert!(metadata.cpu.ends_with('%'));
        assert!(metadata.memory.ends_with("MB"));
        assert!(metadata.disk.ends_with("GB"));
        samples.insert((metadata.cpu, metadata.memory, metadata.disk));
    }

    assert!(samples.len() > 1);

    // Nothing sampled is written back.
    let stored = h.repo.find_by_id(id).await.unwrap().unwrap();
    assert!(stored.metadata.is_none());
}
