use axum::http::{header::InvalidHeaderValue, HeaderValue, Method};
use axum::Router;
use listkeeper_api::{create_router, AppState};
use listkeeper_storage::StorageError;
use thiserror::Error;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::config::Config;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Invalid CORS origin: {0}")]
    InvalidCorsOrigin(#[from] InvalidHeaderValue),
    #[error("Database initialization failed: {0}")]
    Storage(#[from] StorageError),
    #[error("Server IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Install the global tracing subscriber (RUST_LOG, default `info`)
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .init();
}

/// Layer the API router with CORS, request tracing, and the optional static frontend
pub fn build_app(config: &Config, state: AppState) -> Result<Router, ServerError> {
    let cors = CorsLayer::new()
        .allow_origin(config.cors_origin.parse::<HeaderValue>()?)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    let mut app = create_router(state);

    if let Some(static_dir) = &config.static_dir {
        info!("Serving static files from {}", static_dir.display());
        app = app.fallback_service(ServeDir::new(static_dir));
    }

    Ok(app.layer(cors).layer(TraceLayer::new_for_http()))
}

pub async fn run_server(config: Config) -> Result<(), ServerError> {
    info!("Opening database at {}", config.database_path.display());
    let state =
        AppState::init_with_path(Some(config.database_path.clone()), config.max_connections)
            .await?;

    let app = build_app(&config, state)?;

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await?;
    info!("Listkeeper server listening on {}", listener.local_addr()?);
    info!("CORS origin: {}", config.cors_origin);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received, draining connections"),
        Err(e) => {
            error!("Failed to listen for shutdown signal: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
