//! Business logic services for the application layer.

pub mod link_service;
pub mod log_service;

pub use link_service::{LinkService, MAX_CODE_ATTEMPTS};
pub use log_service::LogService;
