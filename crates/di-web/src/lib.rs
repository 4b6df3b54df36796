//! # di-web
//!
//! HTTP adapter for the device inventory: axum router and handlers, the JSON
//! envelope, and the bootstrap sequence (config, tracing, wiring, serve).

pub mod api;
pub mod bootstrap;

pub use api::build_router;
pub use bootstrap::{load_config, run_app, AppRuntime};
