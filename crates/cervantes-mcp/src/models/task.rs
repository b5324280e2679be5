//! Task wire models.

use super::client::Client;
use super::document::Visibility;
use super::project::Project;
use super::wire_enum;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

wire_enum! {
    /// Task lifecycle status. Transitions are validated by the remote API,
    /// not locally: any in-range code is forwarded as-is.
    TaskStatus {
        Waiting = 0,
        InProgress = 1,
        Blocked = 2,
        Ready = 3,
        Completed = 4,
    }
}

/// A task as returned by the Cervantes API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: Uuid,
    #[serde(default)]
    pub name: String,
    pub description: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub status: TaskStatus,
    #[serde(default)]
    pub template: bool,
    // "asigned" is the upstream wire spelling.
    #[serde(rename = "asignedUserId")]
    pub assigned_user_id: Option<String>,
    pub project_id: Option<Uuid>,
    pub project: Option<Project>,
    pub client_id: Option<Uuid>,
    pub client: Option<Client>,
    pub user_id: Option<String>,
    pub created_date: Option<DateTime<Utc>>,
}

/// Payload for `POST /api/Task`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskCreate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub status: TaskStatus,
    pub template: bool,
    #[serde(rename = "asignedUserId")]
    pub assigned_user_id: Option<String>,
    pub project_id: Option<Uuid>,
    pub client_id: Option<Uuid>,
}

/// Payload for `PUT /api/Task` (full edit).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskUpdate {
    pub id: Uuid,
    pub name: Option<String>,
    pub description: Option<String>,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub status: TaskStatus,
    pub template: bool,
    #[serde(rename = "asignedUserId")]
    pub assigned_user_id: Option<String>,
    pub project_id: Option<Uuid>,
    pub client_id: Option<Uuid>,
}

/// Payload for `POST /api/Task/Update` (status-only update).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskStatusUpdate {
    pub id: Uuid,
    pub status: TaskStatus,
}

/// Payload for `POST /api/Task/Notes`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskNoteAttach {
    pub task_id: Uuid,
    pub name: String,
    pub description: String,
    pub visibility: Visibility,
}

/// Payload for `POST /api/Task/Target`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskTargetAttach {
    pub task_id: Uuid,
    pub target_id: Uuid,
}

/// Payload for `POST /api/Task/Attachments`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskAttachmentAttach {
    pub task_id: Uuid,
    pub name: String,
    pub file_name: Option<String>,
    #[serde(with = "super::base64_bytes")]
    pub file_content: Option<Vec<u8>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_ordinals_round_trip() {
        for code in 0..=4 {
            let status = TaskStatus::try_from(code).unwrap();
            assert_eq!(i32::from(status), code);
        }
        assert!(TaskStatus::try_from(5).is_err());
    }

    #[test]
    fn test_assigned_user_wire_spelling() {
        let payload = TaskCreate {
            name: Some("Recon".to_string()),
            description: None,
            start_date: Utc::now(),
            end_date: None,
            status: TaskStatus::Waiting,
            template: false,
            assigned_user_id: Some("user-1".to_string()),
            project_id: None,
            client_id: None,
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["asignedUserId"], "user-1");
        assert!(value.get("assignedUserId").is_none());
    }

    #[test]
    fn test_status_update_payload() {
        let id = Uuid::new_v4();
        let payload = TaskStatusUpdate {
            id,
            status: TaskStatus::Completed,
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["id"], serde_json::json!(id));
        assert_eq!(value["status"], serde_json::json!(4));
    }
}
