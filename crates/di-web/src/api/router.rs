use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use super::devices;
use crate::bootstrap::AppRuntime;

/// Build the HTTP router
pub fn build_router(runtime: Arc<AppRuntime>) -> Router {
    Router::new()
        .route("/health", get(|| async { "OK" }))
        .route(
            "/devices",
            get(devices::list_devices).post(devices::register_device),
        )
        .route(
            "/devices/:id",
            get(devices::get_device)
                .put(devices::update_device)
                .delete(devices::delete_device),
        )
        .route(
            "/devices/:id/monitoring",
            get(devices::get_device_monitoring),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(runtime)
}
