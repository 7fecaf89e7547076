//! Request timeout middleware.

use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use std::time::Duration;
use tower_http::timeout::TimeoutLayer;

use crate::error::AppError;

/// Fails requests that take longer than `seconds` with `408 Request Timeout`.
///
/// The layer itself answers with an empty body; pair it with
/// [`json_body`] so the client gets the usual error payload.
pub fn layer(seconds: u64) -> TimeoutLayer {
    TimeoutLayer::new(Duration::from_secs(seconds))
}

/// Replaces the bodiless 408 produced by [`layer`] with an [`AppError::Timeout`]
/// JSON body. Other responses pass through untouched.
///
/// Used with `axum::middleware::map_response`, outside the timeout layer.
pub async fn json_body(response: Response) -> Response {
    if response.status() == StatusCode::REQUEST_TIMEOUT
        && !response.headers().contains_key(header::CONTENT_TYPE)
    {
        return AppError::Timeout.into_response();
    }

    response
}
