//! Utility functions shared by services and handlers.
//!
//! - [`code_generator`] - Short code generation and custom code validation
//! - [`destination`] - Destination URL validation
//! - [`retry`] - Bounded draw-and-reserve loop
//! - [`extract_host`] - Host extraction from HTTP headers

pub mod code_generator;
pub mod destination;
pub mod extract_host;
pub mod retry;
