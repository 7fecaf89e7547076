//! Handler for client log ingestion.

use axum::{Json, extract::State, extract::rejection::JsonRejection};

use crate::api::dto::logs::{LogRequest, LogResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Appends a client-reported event.
///
/// # Endpoint
///
/// `POST /api/logs`
///
/// # Request Body
///
/// ```json
/// { "type": "shorten", "message": "URL shortened", "data": { "code": "abc" } }
/// ```
///
/// # Errors
///
/// Returns 400 if the body is not JSON or lacks `type` / `message`, and 500
/// if the entry cannot be stored.
pub async fn log_handler(
    State(state): State<AppState>,
    payload: Result<Json<LogRequest>, JsonRejection>,
) -> Result<Json<LogResponse>, AppError> {
    let Json(payload) = payload?;

    state
        .log_service
        .record(&payload.kind, &payload.message, payload.data)
        .await?;

    Ok(Json(LogResponse { success: true }))
}
