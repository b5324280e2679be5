//! Target and target service wire models.

use super::project::Project;
use super::wire_enum;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

wire_enum! {
    /// Kind of asset a target describes.
    TargetType {
        Domain = 0,
        Ip = 1,
        Binary = 2,
        Cidr = 3,
        Hostname = 4,
    }
}

/// A target (asset under test) as returned by the Cervantes API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Target {
    pub id: Uuid,
    #[serde(default)]
    pub name: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub target_type: TargetType,
    pub project_id: Option<Uuid>,
    pub project: Option<Project>,
    pub user_id: Option<String>,
    pub created_date: Option<DateTime<Utc>>,
}

/// A service discovered on a target.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetService {
    pub id: Uuid,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub port: i32,
    pub version: Option<String>,
    pub note: Option<String>,
    pub target_id: Option<Uuid>,
    pub user_id: Option<String>,
    pub created_date: Option<DateTime<Utc>>,
}

/// Payload for `POST /api/Target`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetCreate {
    pub name: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub target_type: TargetType,
    pub project_id: Uuid,
    pub user_id: Option<String>,
}

/// Payload for `PUT /api/Target`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetUpdate {
    pub id: Uuid,
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub target_type: TargetType,
    pub project_id: Option<Uuid>,
    pub user_id: Option<String>,
}

/// Payload for `POST /api/Target/{targetId}/Services`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetServiceCreate {
    pub target_id: Uuid,
    pub name: String,
    pub port: i32,
    pub version: Option<String>,
    pub note: Option<String>,
}

/// Payload for `POST /api/Target/Import`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetImport {
    pub project_id: Uuid,
    pub import_data: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_type_ordinals_round_trip() {
        for code in 0..=4 {
            let t = TargetType::try_from(code).unwrap();
            assert_eq!(i32::from(t), code);
        }
        assert!(TargetType::try_from(5).is_err());
    }

    #[test]
    fn test_type_field_wire_name() {
        let payload = TargetCreate {
            name: "acme.test".to_string(),
            description: None,
            target_type: TargetType::Domain,
            project_id: Uuid::new_v4(),
            user_id: None,
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["type"], serde_json::json!(0));
        assert!(value.get("targetType").is_none());
    }
}
