//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its destination.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Look up the code
/// 2. Build the `Location` header
/// 3. Increment its click counter (awaited, never dropped)
/// 4. Return `302 Found`
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist, and 500 if the
/// stored destination is not a valid header value. Nothing is written in
/// either case.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let link = state.link_service.get_link_by_code(&code).await?;

    let location = HeaderValue::from_str(&link.long_url).map_err(|_| {
        tracing::error!(code = %link.code, "Stored destination is not a valid Location header");
        AppError::internal("Invalid stored destination", json!({ "code": link.code }))
    })?;

    state.link_service.record_click(&link.code).await?;

    tracing::debug!(code = %link.code, "Redirecting");

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}
