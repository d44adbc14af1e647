// ABOUTME: HTTP server assembly and lifecycle for the forecasting service
// ABOUTME: Builds the axum router with tracing and request-id layers, binds, and shuts down gracefully
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Loadcast Contributors

use crate::middleware::request_id_middleware;
use crate::resources::ServerResources;
use crate::routes::{HealthRoutes, PredictionRoutes};
use anyhow::{Context, Result};
use axum::{body::Body, http::Request, middleware, Router};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::{DefaultOnResponse, TraceLayer};
use tracing::{error, field, info, info_span, Level};

/// Build the application router.
///
/// Layers run outside-in: the trace span opens first so the request id
/// middleware can record the id on it.
pub fn build_router(resources: Arc<ServerResources>) -> Router {
    Router::new()
        .merge(HealthRoutes::routes())
        .merge(PredictionRoutes::routes(resources))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    info_span!(
                        "http_request",
                        method = %request.method(),
                        path = %request.uri().path(),
                        request_id = field::Empty,
                    )
                })
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}

/// Serve `router` on `listener` until SIGINT or SIGTERM
///
/// # Errors
///
/// Returns an error if the server fails while accepting connections
pub async fn serve(listener: TcpListener, router: Router) -> Result<()> {
    let address = listener.local_addr().context("Listener has no local address")?;
    info!(%address, "Loadcast server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("Graceful shutdown complete");
    Ok(())
}

/// Bind `bind_address` and serve until shutdown
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails
pub async fn run(bind_address: &str, resources: Arc<ServerResources>) -> Result<()> {
    let listener = TcpListener::bind(bind_address)
        .await
        .with_context(|| format!("Failed to bind {bind_address}"))?;
    serve(listener, build_router(resources)).await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to install Ctrl-C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received SIGINT, starting graceful shutdown"),
        () = terminate => info!("Received SIGTERM, starting graceful shutdown"),
    }
}
