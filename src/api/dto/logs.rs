//! DTOs for client log ingestion.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A client-reported event.
#[derive(Debug, Deserialize)]
pub struct LogRequest {
    #[serde(rename = "type")]
    pub kind: String,
    pub message: String,
    #[serde(default)]
    pub data: Option<Value>,
}

/// Acknowledgement for an accepted event.
#[derive(Debug, Serialize)]
pub struct LogResponse {
    pub success: bool,
}
