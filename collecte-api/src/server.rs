use crate::handlers;
use axum::Router;
use axum::routing::{get, post};
use collecte_core::config::ServerConfig;
use collecte_journal::VisitJournal;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;

/// Shared state for the HTTP API.
pub struct ApiState {
    pub journal: VisitJournal,
}

/// Build the axum router with the three service routes.
///
/// CORS is wide open: the recording endpoint is called from browser
/// JavaScript served by another origin.
pub fn build_router(state: Arc<ApiState>) -> Router {
    Router::new()
        .route("/", get(handlers::index::index))
        .route("/enregistrer-ip", post(handlers::record::record_visit))
        .route("/voir-ips", get(handlers::view::view_visits))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind and serve until a shutdown signal arrives.
pub async fn start(config: &ServerConfig, state: Arc<ApiState>) -> anyhow::Result<()> {
    let addr = config.socket_addr()?;
    let app = build_router(state).into_make_service_with_connect_info::<SocketAddr>();

    info!(addr = %addr, "Starting Collecte HTTP server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Resolves on SIGINT (Ctrl+C) or, on Unix, SIGTERM (docker stop).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }

    info!("Shutdown signal received, stopping...");
}
