//! # Dependency Injection / 依赖注入模块
//!
//! Builds the concrete adapters from [`AppConfig`] and groups them into
//! [`AppDeps`]. Assembly only: no business decisions and no config validation.

use std::path::Path;
use std::sync::Arc;

use di_app::AppDeps;
use di_core::config::AppConfig;
use di_core::ports::DeviceRepositoryPort;
use di_infra::db::mappers::DeviceRowMapper;
use di_infra::db::pool::{init_db_pool, DbPool};
use di_infra::db::repositories::DieselDeviceRepository;
use di_infra::db::DieselSqliteExecutor;
use di_infra::{IcmpReachabilityProbe, RandomTelemetrySampler, SystemClock};
use tracing::info;

/// Result type for wiring operations
pub type WiringResult<T> = Result<T, WiringError>;

/// Errors during dependency injection
/// 依赖注入错误（基础设施初始化失败）
#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("Database initialization failed: {0}")]
    DatabaseInit(String),
}

/// Create SQLite database connection pool
/// 创建 SQLite 数据库连接池
///
/// The pool initialiser creates the parent directory and runs pending
/// migrations.
fn create_db_pool(db_path: &Path) -> WiringResult<DbPool> {
    let db_url = db_path
        .to_str()
        .ok_or_else(|| WiringError::DatabaseInit("Invalid database path".to_string()))?;

    init_db_pool(db_url)
        .map_err(|e| WiringError::DatabaseInit(format!("Failed to initialize DB: {e:#}")))
}

/// Wire every port to its production adapter.
pub fn wire_dependencies(config: &AppConfig) -> WiringResult<AppDeps> {
    let db_pool = create_db_pool(&config.storage.storage_path)?;
    info!(path = %config.storage.storage_path.display(), "Storage ready");

    let device_repo: Arc<dyn DeviceRepositoryPort> = Arc::new(DieselDeviceRepository::new(
        DieselSqliteExecutor::new(db_pool),
        DeviceRowMapper,
        DeviceRowMapper,
    ));

    Ok(AppDeps {
        device_repo,
        reachability_probe: Arc::new(IcmpReachabilityProbe::from_config(&config.probe)),
        probe_threshold: config.probe.threshold,
        telemetry: Arc::new(RandomTelemetrySampler),
        clock: Arc::new(SystemClock),
    })
}
