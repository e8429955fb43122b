//! HTTP server setup and configuration.

use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderName, Method},
    routing::{get, post},
    Router,
};
use reqwest::Client;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers;
use crate::config::Config;
use crate::storage::LogStore;

/// Inbound body size ceiling (large to tolerate long conversation histories).
pub const MAX_BODY_BYTES: usize = 100 * 1024 * 1024;

/// Custom API-key header accepted alongside `authorization`.
pub(crate) const X_API_KEY_HEADER: &str = "x-api-key";

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub http_client: Client,
    pub logs: LogStore,
    pub config: Arc<Config>,
}

/// Create the axum router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    // Browser clients call the relay directly, so allow everything
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            HeaderName::from_static(X_API_KEY_HEADER),
        ]);

    Router::new()
        .route("/v1/chat/completions", post(handlers::chat_completions))
        .route("/", get(handlers::health))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Run the HTTP server until the process is terminated.
pub async fn run_server(config: Config) -> anyhow::Result<()> {
    use anyhow::Context;

    let logs = LogStore::init(&config.log_dir)
        .await
        .with_context(|| format!("failed to create log directory {}", config.log_dir.display()))?;

    // No request timeout: a slow upstream holds the request open, matching
    // the relay's contract of no enforced upstream deadline.
    let http_client = Client::builder().build()?;

    let port = config.port;
    let state = AppState {
        http_client,
        logs,
        config: Arc::new(config),
    };

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(address = %addr, "relay listening");

    axum::serve(listener, app).await?;

    Ok(())
}
