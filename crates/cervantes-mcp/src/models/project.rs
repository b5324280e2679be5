//! Project (engagement) wire models.

use super::client::Client;
use super::document::Visibility;
use super::wire_enum;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

wire_enum! {
    /// Project lifecycle status.
    ProjectStatus {
        Archived = 0,
        Active = 1,
        Waiting = 2,
    }
}

wire_enum! {
    /// Whether an engagement is internal or for an external client.
    ProjectType {
        Internal = 0,
        External = 1,
    }
}

wire_enum! {
    /// Report/project language.
    Language {
        English = 0,
        Spanish = 1,
    }
}

wire_enum! {
    /// Coarse engagement score.
    Score {
        Low = 0,
        High = 1,
    }
}

/// A project as returned by the Cervantes API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: Uuid,
    #[serde(default)]
    pub name: String,
    pub description: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub template: bool,
    pub status: ProjectStatus,
    pub project_type: ProjectType,
    pub language: Language,
    #[serde(default)]
    pub score: f64,
    pub findings_id: Option<String>,
    pub executive_summary: Option<String>,
    pub client_id: Option<Uuid>,
    pub client: Option<Client>,
    pub user_id: Option<String>,
    pub created_date: Option<DateTime<Utc>>,
}

/// Payload for `POST /api/Project`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectCreate {
    pub name: String,
    pub description: Option<String>,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub template: bool,
    pub status: ProjectStatus,
    pub project_type: ProjectType,
    pub language: Language,
    pub client_id: Uuid,
    pub score: Score,
    pub findings_id: Option<String>,
    pub business_impact: i32,
}

/// Payload for `PUT /api/Project`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectUpdate {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub template: bool,
    pub status: ProjectStatus,
    pub project_type: ProjectType,
    pub language: Language,
    pub client_id: Uuid,
    pub score: Score,
    pub findings_id: Option<String>,
    pub business_impact: i32,
    pub executive_summary: Option<String>,
}

/// Payload for `POST /api/Project/ExecutiveSummary`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutiveSummaryRequest {
    pub project_id: Uuid,
}

/// Payload for `POST /api/Project/Member`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectMemberAttach {
    pub project_id: Uuid,
    pub user_id: String,
}

/// Payload for `POST /api/Project/Note`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectNoteAttach {
    pub project_id: Uuid,
    pub name: String,
    pub description: String,
    pub visibility: Visibility,
}

/// Payload for `POST /api/Project/Attachment`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectAttachmentAttach {
    pub project_id: Uuid,
    pub file_name: String,
    #[serde(with = "super::base64_bytes")]
    pub file_content: Option<Vec<u8>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_ordinals_round_trip() {
        for code in 0..=2 {
            let status = ProjectStatus::try_from(code).unwrap();
            assert_eq!(i32::from(status), code);
        }
        assert!(ProjectStatus::try_from(3).is_err());
        assert!(ProjectStatus::try_from(-1).is_err());
    }

    #[test]
    fn test_status_serializes_as_integer() {
        let json = serde_json::to_value(ProjectStatus::Waiting).unwrap();
        assert_eq!(json, serde_json::json!(2));

        let back: ProjectStatus = serde_json::from_value(serde_json::json!(1)).unwrap();
        assert_eq!(back, ProjectStatus::Active);
    }

    #[test]
    fn test_language_and_score_ordinals() {
        assert_eq!(i32::from(Language::Spanish), 1);
        assert_eq!(i32::from(Score::High), 1);
        assert_eq!(Language::try_from(0).unwrap(), Language::English);
        assert!(Score::try_from(2).is_err());
    }

    #[test]
    fn test_create_payload_shape() {
        let payload = ProjectCreate {
            name: "External audit".to_string(),
            description: None,
            start_date: Utc::now(),
            end_date: None,
            template: false,
            status: ProjectStatus::Active,
            project_type: ProjectType::External,
            language: Language::English,
            client_id: Uuid::new_v4(),
            score: Score::Low,
            findings_id: None,
            business_impact: 0,
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert!(value.get("id").is_none());
        assert_eq!(value["status"], serde_json::json!(1));
        assert_eq!(value["projectType"], serde_json::json!(1));
        assert_eq!(value["score"], serde_json::json!(0));
    }
}
