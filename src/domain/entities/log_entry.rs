//! Log entry entity for ingested client events.

use chrono::{DateTime, Utc};
use serde_json::Value;

/// An appended log record.
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub id: i64,
    pub kind: String,
    pub message: String,
    pub data: Option<Value>,
    pub created_at: DateTime<Utc>,
}

/// Input data for appending a log record.
#[derive(Debug, Clone, PartialEq)]
pub struct NewLogEntry {
    pub kind: String,
    pub message: String,
    pub data: Option<Value>,
    pub created_at: DateTime<Utc>,
}

impl NewLogEntry {
    pub fn new(kind: impl Into<String>, message: impl Into<String>, data: Option<Value>) -> Self {
        Self {
            kind: kind.into(),
            message: message.into(),
            data,
            created_at: Utc::now(),
        }
    }
}
