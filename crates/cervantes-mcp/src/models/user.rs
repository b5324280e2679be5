//! User wire models.
//!
//! Users are identified by an opaque string id, not a UUID.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user account as returned by the Cervantes API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Option<String>,
    pub user_name: Option<String>,
    pub email: Option<String>,
    #[serde(default)]
    pub email_confirmed: bool,
    pub phone_number: Option<String>,
    #[serde(default)]
    pub phone_number_confirmed: bool,
    #[serde(default)]
    pub two_factor_enabled: bool,
    pub lockout_end: Option<DateTime<Utc>>,
    #[serde(default)]
    pub lockout_enabled: bool,
    #[serde(default)]
    pub access_failed_count: i32,
    pub full_name: Option<String>,
    pub avatar: Option<String>,
    pub description: Option<String>,
    pub position: Option<String>,
    pub client_id: Option<Uuid>,
    #[serde(default)]
    pub external_login: bool,
}

/// Payload for `POST /api/User`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserCreate {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub description: Option<String>,
    pub position: Option<String>,
    pub password: Option<String>,
    pub confirm_password: Option<String>,
    pub role: Option<String>,
    pub file_name: Option<String>,
    #[serde(with = "super::base64_bytes")]
    pub file_content: Option<Vec<u8>>,
    pub external_login: bool,
    pub client_id: Option<Uuid>,
}

/// Payload for `PUT /api/User`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    pub id: String,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub description: Option<String>,
    pub position: Option<String>,
    pub password: Option<String>,
    pub confirm_password: Option<String>,
    pub role: Option<String>,
    pub file_name: Option<String>,
    #[serde(with = "super::base64_bytes")]
    pub file_content: Option<Vec<u8>>,
    pub client_id: Option<Uuid>,
    pub image_path: Option<String>,
    pub external_login: bool,
    pub lockout: bool,
    pub two_factor_enabled: bool,
}

/// Payload for `POST /api/User/Avatar`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvatarUpdate {
    #[serde(with = "super::base64_bytes")]
    pub avatar_content: Option<Vec<u8>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_decodes_with_minimal_fields() {
        let json = serde_json::json!({
            "id": "user-1",
            "email": "alice@example.com"
        });
        let user: User = serde_json::from_value(json).unwrap();
        assert_eq!(user.id.as_deref(), Some("user-1"));
        assert!(!user.two_factor_enabled);
    }

    #[test]
    fn test_update_payload_has_string_id() {
        let payload = UserUpdate {
            id: "user-1".to_string(),
            full_name: Some("Alice".to_string()),
            email: Some("alice@example.com".to_string()),
            phone_number: None,
            description: None,
            position: None,
            password: None,
            confirm_password: None,
            role: Some("Admin".to_string()),
            file_name: None,
            file_content: None,
            client_id: None,
            image_path: None,
            external_login: false,
            lockout: false,
            two_factor_enabled: false,
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["id"], "user-1");
    }
}
