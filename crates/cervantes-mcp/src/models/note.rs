//! Note wire models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A personal note as returned by the Cervantes API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: Uuid,
    pub name: Option<String>,
    pub description: Option<String>,
    pub user_id: Option<String>,
    pub created_date: Option<DateTime<Utc>>,
}

/// Payload for `POST /api/Note`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteCreate {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Payload for `PUT /api/Note`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteUpdate {
    pub id: Uuid,
    pub name: Option<String>,
    pub description: Option<String>,
}
