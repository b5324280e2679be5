//! System log wire models (read-only).

use serde::{Deserialize, Serialize};

/// A system log entry as returned by the Cervantes API.
///
/// Unlike the other resources, logs are keyed by an integer id and are never
/// created or mutated through this bridge.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    pub id: i64,
    pub created_on: Option<String>,
    pub level: Option<String>,
    pub message: Option<String>,
    pub stack_trace: Option<String>,
    pub exception: Option<String>,
    pub logger: Option<String>,
}
