//! Report wire payloads.
//!
//! Reports, templates, components and parts come back from the API with no
//! stable documented shape, so responses stay opaque (`serde_json::Value`).
//! The outbound payloads are still explicit named structs.

use super::project::Language;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Payload for `POST /api/Report/GenerateNewReport`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportCreate {
    pub name: String,
    pub description: Option<String>,
    pub language: Language,
    pub project_id: Uuid,
}

/// Payload for `PUT /api/Report`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportUpdate {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub language: Language,
}

/// Payload for `POST /api/Report/Template`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportTemplateCreate {
    pub name: String,
    pub description: Option<String>,
    pub language: Language,
}

/// Payload for `PUT /api/Report/Template`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportTemplateUpdate {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub language: Language,
}

/// Payload for `POST /api/Report/Download`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportDownload {
    pub report_id: Uuid,
    pub format: String,
}

/// Payload for `POST /api/Report/Import`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportImport {
    pub project_id: Uuid,
    pub import_data: String,
}
