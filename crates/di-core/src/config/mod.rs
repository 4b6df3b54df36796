pub mod app_config;

pub use app_config::{
    AppConfig, GeneralConfig, HttpServerConfig, LoggingConfig, ProbeConfig, ServerConfig,
    StorageConfig,
};
