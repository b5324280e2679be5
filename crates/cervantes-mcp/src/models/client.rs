//! Client (customer organization) wire models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A client organization as returned by the Cervantes API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: Uuid,
    #[serde(default)]
    pub name: String,
    pub description: Option<String>,
    pub url: Option<String>,
    pub contact_name: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub image_path: Option<String>,
    pub created_date: Option<DateTime<Utc>>,
    pub user_id: Option<String>,
}

/// Payload for `POST /api/Clients`. The server assigns the identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientCreate {
    pub name: String,
    pub description: Option<String>,
    pub url: Option<String>,
    pub contact_name: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub file_name: Option<String>,
    #[serde(with = "super::base64_bytes")]
    pub file_content: Option<Vec<u8>>,
}

/// Payload for `PUT /api/Clients`. The identity is required.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientUpdate {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub url: Option<String>,
    pub contact_name: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub file_name: Option<String>,
    #[serde(with = "super::base64_bytes")]
    pub file_content: Option<Vec<u8>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_payload_has_no_id() {
        let payload = ClientCreate {
            name: "Acme".to_string(),
            description: None,
            url: None,
            contact_name: None,
            contact_email: None,
            contact_phone: None,
            file_name: None,
            file_content: None,
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert!(value.get("id").is_none());
        assert_eq!(value["name"], "Acme");
        // Optional fields are transmitted as explicit nulls, not omitted.
        assert!(value["description"].is_null());
    }

    #[test]
    fn test_update_payload_has_id() {
        let id = Uuid::new_v4();
        let payload = ClientUpdate {
            id,
            name: "Acme".to_string(),
            description: Some("updated".to_string()),
            url: None,
            contact_name: None,
            contact_email: None,
            contact_phone: None,
            file_name: None,
            file_content: None,
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["id"], serde_json::json!(id));
    }

    #[test]
    fn test_client_decodes_camel_case() {
        let json = serde_json::json!({
            "id": "6f3f2a74-9b72-4c3e-9f39-0f6a0a3cf7af",
            "name": "Acme",
            "contactEmail": "security@acme.test",
            "createdDate": "2024-03-01T10:00:00Z"
        });
        let client: Client = serde_json::from_value(json).unwrap();
        assert_eq!(client.name, "Acme");
        assert_eq!(client.contact_email.as_deref(), Some("security@acme.test"));
        assert!(client.created_date.is_some());
    }
}
