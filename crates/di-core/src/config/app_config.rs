//! Application configuration domain model

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::reachability::DEFAULT_SUCCESS_THRESHOLD;

/// Application configuration
///
/// Every section and key is optional in the file; missing values fall back to
/// [`Default`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub general: GeneralConfig,
    pub http_server: HttpServerConfig,
    pub storage: StorageConfig,
    pub probe: ProbeConfig,
    pub server: ServerConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Deployment label (`local`, `dev`, `prod`), informational only
    pub env: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpServerConfig {
    /// Listen address, `host:port`
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// SQLite database file
    pub storage_path: PathBuf,
}

/// Reachability probe settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbeConfig {
    /// Echo requests per probe run
    pub count: u32,
    /// Upper bound for one whole probe run
    pub timeout_secs: u64,
    /// Use a raw ICMP socket instead of an unprivileged datagram socket
    pub privileged: bool,
    /// Success rate a device must exceed to be `Active`
    pub threshold: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// How long in-flight requests may run after a shutdown signal
    pub shutdown_grace_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Also write logs to `<log_dir>/device-inventory.log` when set
    pub log_dir: Option<PathBuf>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            env: "local".to_string(),
        }
    }
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            address: "127.0.0.1:8082".to_string(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            storage_path: PathBuf::from("storage/devices.db"),
        }
    }
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            count: 5,
            timeout_secs: 5,
            privileged: true,
            threshold: DEFAULT_SUCCESS_THRESHOLD,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            shutdown_grace_secs: 5,
        }
    }
}

impl AppConfig {
    /// Parse configuration from TOML text
    /// 从 TOML 文本解析配置
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }
}
