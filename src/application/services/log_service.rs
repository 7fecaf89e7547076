//! Client event ingestion service.

use std::sync::Arc;

use crate::domain::entities::{LogEntry, NewLogEntry};
use crate::domain::repositories::LogRepository;
use crate::error::AppError;
use serde_json::Value;

/// Service appending client-reported events to the log table.
pub struct LogService<R: LogRepository> {
    repository: Arc<R>,
}

impl<R: LogRepository> LogService<R> {
    /// Creates a new log service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Appends an event.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn record(
        &self,
        kind: &str,
        message: &str,
        data: Option<Value>,
    ) -> Result<LogEntry, AppError> {
        tracing::info!(kind, message, "Client event");

        self.repository
            .append(NewLogEntry::new(kind, message, data))
            .await
    }

    /// Returns up to `limit` recent entries, newest first.
    pub async fn recent(&self, limit: i64) -> Result<Vec<LogEntry>, AppError> {
        self.repository.recent(limit.max(0)).await
    }

    /// Counts stored entries.
    pub async fn count(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }
}
