//! HTTP middleware for request processing.
//!
//! Provides observability, CORS and request timeout layers.

pub mod cors;
pub mod timeout;
pub mod tracing;
