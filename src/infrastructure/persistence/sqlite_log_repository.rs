//! SQLite implementation of the log repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::SqlitePool;
use sqlx::types::Json;
use std::sync::Arc;

use crate::domain::entities::{LogEntry, NewLogEntry};
use crate::domain::repositories::LogRepository;
use crate::error::AppError;

/// SQLite repository for the append-only `logs` table.
///
/// `data` is stored as JSON text.
pub struct SqliteLogRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteLogRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct LogRow {
    id: i64,
    #[sqlx(rename = "type")]
    kind: String,
    message: String,
    data: Option<Json<Value>>,
    created_at: DateTime<Utc>,
}

impl From<LogRow> for LogEntry {
    fn from(r: LogRow) -> Self {
        LogEntry {
            id: r.id,
            kind: r.kind,
            message: r.message,
            data: r.data.map(|Json(v)| v),
            created_at: r.created_at,
        }
    }
}

#[async_trait]
impl LogRepository for SqliteLogRepository {
    async fn append(&self, entry: NewLogEntry) -> Result<LogEntry, AppError> {
        let row = sqlx::query_as::<_, LogRow>(
            r#"
            INSERT INTO logs (type, message, data, created_at)
            VALUES (?1, ?2, ?3, ?4)
            RETURNING id, type, message, data, created_at
            "#,
        )
        .bind(&entry.kind)
        .bind(&entry.message)
        .bind(entry.data.map(Json))
        .bind(entry.created_at)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn recent(&self, limit: i64) -> Result<Vec<LogEntry>, AppError> {
        let rows = sqlx::query_as::<_, LogRow>(
            r#"
            SELECT id, type, message, data, created_at
            FROM logs
            ORDER BY id DESC
            LIMIT ?1
            "#,
        )
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(LogEntry::from).collect())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM logs")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
