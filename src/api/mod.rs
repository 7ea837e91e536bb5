//! HTTP API
//!
//! An axum router over [`AppState`]: lead CRUD under `/api/leads`, CSV
//! import and export, and health checks. Errors are returned as
//! `{"error": "<message>"}`.
//!
//! # Example
//!
//! ```rust
//! use leadbook::adapters::memory::MemoryLeadStore;
//! use leadbook::api::{app_router, AppState};
//! use leadbook::config::ServerConfig;
//! use std::sync::Arc;
//!
//! let config = ServerConfig::default();
//! let state = AppState::new(Arc::new(MemoryLeadStore::new()), &config);
//! let _router = app_router(state, &config);
//! ```

pub mod error;
pub mod health;
pub mod leads;
pub mod state;
pub mod transfer;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

use crate::config::ServerConfig;
use crate::domain::{LeadbookError, Result};
use axum::extract::DefaultBodyLimit;
use axum::http::HeaderValue;
use axum::Router;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if config.allows_any_origin() {
        return cors.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = config
        .cors_allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    cors.allow_origin(origins)
}

/// Build the application router with its middleware stack
pub fn app_router(state: Arc<AppState>, config: &ServerConfig) -> Router {
    Router::new()
        .merge(health::router())
        .merge(transfer::router())
        .merge(leads::router())
        .with_state(state)
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(config.max_body_bytes()))
        .layer(cors_layer(config))
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.request_timeout_seconds,
        )))
        .layer(TraceLayer::new_for_http())
}

/// Serve `router` on `listen_addr` until `shutdown` flips to true
///
/// In-flight requests are allowed to finish before returning.
pub async fn serve(
    router: Router,
    listen_addr: &str,
    mut shutdown: watch::Receiver<bool>,
) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(listen_addr)
        .await
        .map_err(|e| LeadbookError::Io(format!("Failed to bind {listen_addr}: {e}")))?;

    let local_addr = listener
        .local_addr()
        .map_err(|e| LeadbookError::Io(e.to_string()))?;
    tracing::info!(addr = %local_addr, "HTTP server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(async move {
            while !*shutdown.borrow() {
                if shutdown.changed().await.is_err() {
                    break;
                }
            }
            tracing::info!("HTTP server draining connections");
        })
        .await
        .map_err(|e| LeadbookError::Io(format!("HTTP server error: {e}")))?;

    tracing::info!("HTTP server stopped");
    Ok(())
}
