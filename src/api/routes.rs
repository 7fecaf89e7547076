//! API route configuration.

use crate::api::handlers::{health_handler, log_handler, shorten_handler, stats_list_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Routes mounted under `/api`.
///
/// # Endpoints
///
/// - `POST /shorten` - Create a short link
/// - `GET  /stats`   - All links with click counts
/// - `POST /logs`    - Append a client event
/// - `GET  /health`  - Liveness
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/stats", get(stats_list_handler))
        .route("/logs", post(log_handler))
        .route("/health", get(health_handler))
}
