//! Cross-origin access for browser clients.

use tower_http::cors::CorsLayer;

/// Allows any origin, method and header. No credentials are involved.
pub fn layer() -> CorsLayer {
    CorsLayer::permissive()
}
