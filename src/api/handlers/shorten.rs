//! Handler for link shortening endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection, http::HeaderMap};
use serde_json::json;
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::extract_host::extract_host_from_headers;

/// Creates a short link.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// { "longUrl": "https://example.com/a", "customCode": "abc" }
/// ```
///
/// `customCode` is optional; an empty string means "generate one".
///
/// # Response
///
/// ```json
/// {
///   "shortUrl": "http://localhost:3001/abc",
///   "shortCode": "abc",
///   "longUrl": "https://example.com/a"
/// }
/// ```
///
/// The short URL origin is `BASE_URL` when configured, otherwise
/// `http://{Host}`.
///
/// # Errors
///
/// - 400 if the body is not a JSON object of the expected shape, the URL is
///   missing or invalid, the custom code is malformed or
///   already taken, or no origin can be determined
/// - 500 if no free code was found within the attempt budget
pub async fn shorten_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<Json<ShortenResponse>, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let long_url = payload
        .long_url
        .as_deref()
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .ok_or_else(|| AppError::bad_request("URL is required", json!({})))?;

    // Resolved before any write so a bad Host never leaves an orphan row.
    let base_url = match &state.base_url {
        Some(base_url) => base_url.clone(),
        None => format!("http://{}", extract_host_from_headers(&headers)?),
    };

    let link = state
        .link_service
        .shorten(long_url, payload.custom_code.as_deref())
        .await?;

    let short_url = state.link_service.get_short_url(&base_url, &link.code);

    Ok(Json(ShortenResponse {
        short_url,
        short_code: link.code,
        long_url: link.long_url,
    }))
}
