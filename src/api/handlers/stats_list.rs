//! Handler for link statistics.

use axum::{Json, extract::State};

use crate::api::dto::stats_list::LinkStatsItem;
use crate::error::AppError;
use crate::state::AppState;

/// Lists every link with its click count, newest first.
///
/// # Endpoint
///
/// `GET /api/stats`
///
/// # Response
///
/// ```json
/// [
///   {
///     "id": 1,
///     "short_code": "abc",
///     "long_url": "https://example.com/a",
///     "created_at": "2025-01-01T12:00:00Z",
///     "clicks": 0
///   }
/// ]
/// ```
pub async fn stats_list_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<LinkStatsItem>>, AppError> {
    let links = state.link_service.list_links().await?;

    tracing::debug!(count = links.len(), "Stats returned");

    Ok(Json(links.into_iter().map(LinkStatsItem::from).collect()))
}
