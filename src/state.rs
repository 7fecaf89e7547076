//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::{LinkService, LogService};
use crate::infrastructure::persistence::{SqliteLinkRepository, SqliteLogRepository};

/// Handles shared by every request.
///
/// Cheap to clone: services are behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<SqliteLinkRepository>>,
    pub log_service: Arc<LogService<SqliteLogRepository>>,
    /// Public origin for short URLs; `None` falls back to the Host header.
    pub base_url: Option<String>,
}

impl AppState {
    /// Builds the state from a database pool.
    pub fn new(pool: Arc<sqlx::SqlitePool>, base_url: Option<String>) -> Self {
        let link_repository = Arc::new(SqliteLinkRepository::new(pool.clone()));
        let log_repository = Arc::new(SqliteLogRepository::new(pool));

        Self {
            link_service: Arc::new(LinkService::new(link_repository)),
            log_service: Arc::new(LogService::new(log_repository)),
            base_url,
        }
    }
}
