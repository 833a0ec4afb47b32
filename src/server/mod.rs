//! HTTP lint service.
//!
//! ## Routes
//!
//! - `GET /health` (public): status, version and uptime
//! - `POST /lint` (API key): lint a configuration submitted as JSON
//! - anything else: static assets from the configured directory, if it
//!   exists
//!
//! ## Layers (outermost first)
//!
//! Panic recovery, request tracing, CORS, then API key injection. The auth
//! check itself runs only on `/lint`, so CORS preflights and static assets
//! never need a key.

pub mod auth;
pub mod config;
pub mod error;
pub mod routes;
pub mod state;

pub use auth::ApiKeys;
pub use config::ServerConfig;
pub use error::AppError;
pub use state::AppState;

use std::any::Any;
use std::path::Path;

use anyhow::Context;
use axum::http::{header, HeaderName, Method};
use axum::middleware::from_fn;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any as AnyOrigin, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Build the application router.
pub fn app(state: AppState, api_keys: ApiKeys, static_dir: Option<&Path>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            header::CONTENT_TYPE,
            HeaderName::from_static(auth::API_KEY_HEADER),
            header::AUTHORIZATION,
        ]);

    let trace = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    // Authenticated API routes.
    let api = Router::new()
        .route("/lint", post(routes::lint))
        .route_layer(from_fn(auth::auth_middleware));

    let mut router = Router::new()
        .route("/health", get(routes::health))
        .merge(api);

    if let Some(dir) = static_dir {
        router = router.fallback_service(ServeDir::new(dir));
    }

    router
        .layer(axum::Extension(api_keys))
        .layer(cors)
        .layer(trace)
        .layer(CatchPanicLayer::custom(handle_panic))
        .with_state(state)
}

/// Turn a handler panic into a generic 500.
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    tracing::error!(panic = %detail, "handler panicked");
    AppError::Internal(detail).into_response()
}

/// Bind and serve until the process is stopped.
pub async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    if config.api_keys.is_empty() {
        tracing::warn!(
            "no API keys configured; set {} to protect /lint",
            config::API_KEY_ENV
        );
    } else {
        tracing::info!(keys = config.api_keys.len(), "API key authentication enabled");
    }

    let static_dir = if config.static_dir.is_dir() {
        tracing::info!(directory = %config.static_dir.display(), "serving static files");
        Some(config.static_dir.as_path())
    } else {
        tracing::warn!(
            path = %config.static_dir.display(),
            "static directory not found; static files disabled"
        );
        None
    };

    let router = app(AppState::new(), config.api_keys.clone(), static_dir);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, version = env!("CARGO_PKG_VERSION"), "deploylint server listening");

    axum::serve(listener, router).await.context("server error")?;

    Ok(())
}
