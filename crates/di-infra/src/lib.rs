//! # di-infra
//!
//! Infrastructure adapters implementing the `di-core` ports: SQLite storage via
//! diesel, ICMP reachability probing, synthetic telemetry and the system clock.

pub mod db;
pub mod reachability;
pub mod telemetry;
pub mod time;

pub use reachability::IcmpReachabilityProbe;
pub use telemetry::RandomTelemetrySampler;
pub use time::SystemClock;
