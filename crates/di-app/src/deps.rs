//! # Application Dependencies / 应用依赖
//!
//! Dependency grouping for use case construction. Not a builder: every port
//! is required and nothing is defaulted.

use std::sync::Arc;
use di_core::ports::*;

pub struct AppDeps {
    // Registry storage / 设备存储
    pub device_repo: Arc<dyn DeviceRepositoryPort>,

    // Reachability / 可达性探测
    pub reachability_probe: Arc<dyn ReachabilityProbePort>,
    pub probe_threshold: f64,

    // Monitoring / 监控
    pub telemetry: Arc<dyn TelemetrySamplerPort>,

    // System / 系统
    pub clock: Arc<dyn ClockPort>,
}
