//! Vault (per-project secret store) wire models.

use super::wire_enum;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

wire_enum! {
    /// Kind of secret stored in a vault entry.
    VaultType {
        Credential = 0,
        Note = 1,
        Identity = 2,
        Card = 3,
        SecureNote = 4,
        Other = 5,
    }
}

/// A vault entry as returned by the Cervantes API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vault {
    pub id: Uuid,
    pub project_id: Option<Uuid>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub vault_type: VaultType,
    pub description: Option<String>,
    pub value: Option<String>,
    pub created_date: Option<DateTime<Utc>>,
    pub user_id: Option<String>,
}

/// Payload for `POST /api/Vault`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VaultCreate {
    pub name: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub vault_type: VaultType,
    pub value: String,
    pub project_id: Uuid,
}

/// Payload for `PUT /api/Vault`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VaultUpdate {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub vault_type: VaultType,
    pub value: String,
    pub project_id: Uuid,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vault_type_ordinals_round_trip() {
        for code in 0..=5 {
            let t = VaultType::try_from(code).unwrap();
            assert_eq!(i32::from(t), code);
        }
        assert!(VaultType::try_from(6).is_err());
    }
}
