pub mod config;
pub mod run;
pub mod runtime;
pub mod tracing;
pub mod wiring;

pub use config::load_config;
pub use run::{run_app, serve_until};
pub use runtime::{AppRuntime, UseCases};
pub use wiring::wire_dependencies;
