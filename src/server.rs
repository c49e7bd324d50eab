//! Router assembly and serve loop.
//!
//! Wires the single route plus its 404 fallbacks, the trace and timeout
//! layers, and runs the listener with graceful shutdown on SIGINT/SIGTERM.

use std::time::Duration;

use axum::http::StatusCode;
use axum::routing::post;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::routes;
use crate::AppState;

/// Build the application router.
///
/// One route: `POST /auth`. The fallback on the method router (wrong method
/// on `/auth`) and on the router itself (any other path) both answer 404
/// with an empty body; there is no 405 in this contract.
pub fn router(state: AppState) -> Router {
    let timeout = Duration::from_millis(state.config.server.request_timeout_ms);
    Router::new()
        .route(
            "/auth",
            post(routes::authorize::authorize).fallback(not_found),
        )
        .fallback(not_found)
        .layer(TimeoutLayer::new(timeout))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Fallback for every request that is not `POST /auth`.
async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}

/// Bind the configured listener and serve until shutdown.
pub async fn run(state: AppState) {
    let listen = state.config.server.listen.clone();
    let app = router(state);

    let listener = TcpListener::bind(&listen).await.expect("Failed to bind");
    info!("Server ready");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    info!("Goodbye");
}

/// Resolve when the process receives SIGINT or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = tokio::signal::ctrl_c();
    #[cfg(unix)]
    {
        let mut sigterm = tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to register SIGTERM");
        tokio::select! {
            _ = ctrl_c => info!("Received SIGINT"),
            _ = sigterm.recv() => info!("Received SIGTERM"),
        }
    }
    #[cfg(not(unix))]
    {
        ctrl_c.await.ok();
        info!("Received SIGINT");
    }
}
