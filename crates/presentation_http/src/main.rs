//! Realtime gateway HTTP server
//!
//! Main entry point for the HTTP API server.

use std::time::Duration;

use ai_core::OpenAiClient;
use anyhow::Context;
use infrastructure::{AppConfig, init_logging, telemetry::DEFAULT_LOG_FILTER};
use presentation_http::{RequestIdLayer, cors_layer, routes, serve_with_shutdown, state::AppState};
use tokio::{net::TcpListener, signal};
use tower_http::trace::TraceLayer;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Configuration must be complete before anything binds
    let config = AppConfig::load().context("Failed to load configuration")?;

    init_logging(config.server.log_format, DEFAULT_LOG_FILTER)?;

    info!("Realtime gateway v{} starting...", env!("CARGO_PKG_VERSION"));
    info!(
        host = %config.server.host,
        port = %config.server.port,
        chat_model = %config.upstream.chat_model,
        reasoning_model = %config.upstream.reasoning_model,
        index = %config.server.index_path.display(),
        "Configuration loaded"
    );

    let client = OpenAiClient::new(config.upstream.clone())
        .context("Failed to initialize upstream client")?;

    let state = AppState::from_client(client, config.server.index_path.clone());

    let cors = cors_layer(&config.server.allowed_origins)?;

    // Order matters: last added = outermost
    let app = routes::create_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(RequestIdLayer::new());

    let addr = config.server.bind_address();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!("Server listening on http://{}", addr);

    let shutdown_timeout = Duration::from_secs(config.server.shutdown_timeout_secs.unwrap_or(30));

    serve_with_shutdown(listener, app, shutdown_signal(), shutdown_timeout).await?;

    info!("Server shutdown complete");

    Ok(())
}

/// Wait for shutdown signals (SIGINT, SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown...");
        }
    }
}
