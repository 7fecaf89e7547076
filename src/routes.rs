//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `/api/*`       - JSON API (shorten, stats, logs, health)
//! - `GET /{code}`  - Short link redirect
//!
//! The fixed `/api` routes are registered before the single-segment
//! redirect capture.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Permissive, for the browser UI
//! - **Timeout** - Per-request deadline, answered with a JSON 408
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::redirect_handler;
use crate::api::middleware::{cors, timeout, tracing};
use crate::state::AppState;
use axum::Router;
use axum::middleware::map_response;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `request_timeout_seconds` - deadline applied to every request
pub fn build_router(state: AppState, request_timeout_seconds: u64) -> Router {
    Router::new()
        .nest("/api", api::routes::api_routes())
        .route("/{code}", get(redirect_handler))
        .with_state(state)
        .layer(timeout::layer(request_timeout_seconds))
        .layer(map_response(timeout::json_body))
        .layer(cors::layer())
        .layer(tracing::layer())
}

/// [`build_router`] wrapped so `/api/stats/` and `/api/stats` are the same route.
pub fn app_router(state: AppState, request_timeout_seconds: u64) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(build_router(state, request_timeout_seconds))
}
