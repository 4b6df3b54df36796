//! Serve loop and shutdown sequencing.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use axum::Router;
use di_core::config::AppConfig;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

use super::runtime::AppRuntime;
use super::wiring::wire_dependencies;
use crate::api::build_router;

/// Wire the service from `config`, bind the listener and serve until
/// Ctrl-C or SIGTERM.
pub async fn run_app(config: AppConfig) -> anyhow::Result<()> {
    info!(
        env = %config.general.env,
        address = %config.http_server.address,
        "Starting device inventory service"
    );

    let deps = wire_dependencies(&config)?;
    let router = build_router(Arc::new(AppRuntime::new(deps)));

    let listener = TcpListener::bind(&config.http_server.address)
        .await
        .with_context(|| format!("Failed to bind {}", config.http_server.address))?;
    info!(address = %listener.local_addr()?, "Listening");

    let shutdown = CancellationToken::new();
    spawn_signal_handlers(shutdown.clone());

    serve_until(
        listener,
        router,
        shutdown,
        Duration::from_secs(config.server.shutdown_grace_secs),
    )
    .await
}

/// Serve `router` on `listener` until `shutdown` is cancelled.
///
/// After cancellation the listener stops accepting and in-flight requests
/// have `grace` to complete. Once `grace` elapses the serve task is aborted
/// and this returns `Ok`; connection tasks still running are not awaited and
/// end when the runtime shuts down.
pub async fn serve_until(
    listener: TcpListener,
    router: Router,
    shutdown: CancellationToken,
    grace: Duration,
) -> anyhow::Result<()> {
    let server_token = shutdown.clone();
    let mut server = tokio::spawn(async move {
        axum::serve(listener, router)
            .with_graceful_shutdown(async move { server_token.cancelled().await })
            .await
    });

    tokio::select! {
        joined = &mut server => {
            return joined
                .context("HTTP server task panicked")?
                .context("HTTP server error");
        }
        _ = shutdown.cancelled() => {}
    }

    info!(grace_secs = grace.as_secs(), "Draining in-flight requests");

    match tokio::time::timeout(grace, &mut server).await {
        Ok(joined) => {
            joined
                .context("HTTP server task panicked")?
                .context("HTTP server error")?;
            info!("Server stopped gracefully");
        }
        Err(_) => {
            warn!("Grace period elapsed, abandoning remaining requests");
            server.abort();
        }
    }

    Ok(())
}

fn spawn_signal_handlers(token: CancellationToken) {
    let ctrl_c_token = token.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Received shutdown signal");
                ctrl_c_token.cancel();
            }
            Err(err) => {
                error!("Error setting up signal handler: {}", err);
            }
        }
    });

    #[cfg(unix)]
    {
        tokio::spawn(async move {
            use tokio::signal::unix::{signal, SignalKind};
            match signal(SignalKind::terminate()) {
                Ok(mut sigterm) => {
                    sigterm.recv().await;
                    info!("Received SIGTERM signal");
                    token.cancel();
                }
                Err(err) => {
                    error!("Error setting up SIGTERM handler: {}", err);
                }
            }
        });
    }
}
