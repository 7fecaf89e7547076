//! Repository trait for the append-only event log.

use crate::domain::entities::{LogEntry, NewLogEntry};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for ingested log entries.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LogRepository: Send + Sync {
    /// Appends a log entry and returns the stored record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn append(&self, entry: NewLogEntry) -> Result<LogEntry, AppError>;

    /// Returns up to `limit` entries, most recent first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn recent(&self, limit: i64) -> Result<Vec<LogEntry>, AppError>;

    /// Counts stored log entries.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;
}
