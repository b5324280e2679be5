//! Document wire models.

use super::wire_enum;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

wire_enum! {
    /// Visibility of documents and notes.
    Visibility {
        Private = 0,
        Public = 1,
    }
}

/// A document as returned by the Cervantes API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: Uuid,
    pub name: Option<String>,
    pub description: Option<String>,
    pub file_path: Option<String>,
    pub user_id: Option<String>,
    pub visibility: Visibility,
    pub created_date: Option<DateTime<Utc>>,
}

/// Payload for `POST /api/Document`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentCreate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub file_name: Option<String>,
    #[serde(with = "super::base64_bytes")]
    pub file_content: Option<Vec<u8>>,
}

/// Payload for `PUT /api/Document`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentUpdate {
    pub id: Uuid,
    pub name: Option<String>,
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visibility_ordinals() {
        assert_eq!(i32::from(Visibility::Private), 0);
        assert_eq!(i32::from(Visibility::Public), 1);
        assert!(Visibility::try_from(2).is_err());
    }

    #[test]
    fn test_document_create_embeds_base64() {
        let payload = DocumentCreate {
            name: Some("report".to_string()),
            description: None,
            file_name: Some("report.pdf".to_string()),
            file_content: Some(vec![1, 2, 3]),
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["fileContent"], "AQID");
        assert!(value.get("id").is_none());
    }
}
