//! Role wire models.
//!
//! Roles are keyed by name, not UUID. The role tier uses non-contiguous
//! integer codes on the wire.

use super::wire_enum;
use serde::{Deserialize, Serialize};

wire_enum! {
    /// Role tier.
    RoleType {
        Basic = 0,
        Management = 50,
        Admin = 60,
        SuperAdmin = 100,
    }
}

/// A role with its resolved permission names.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    #[serde(default)]
    pub role_name: String,
    pub description: Option<String>,
    pub role_type: RoleType,
    #[serde(default)]
    pub packed_permissions_in_role: String,
    pub permission_names: Option<Vec<String>>,
}

/// Payload for `POST`/`PUT /api/User/Role`.
///
/// Create and update share one shape; the role name is the identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RolePayload {
    pub name: String,
    pub description: Option<String>,
    pub permissions: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_type_non_contiguous_codes() {
        assert_eq!(i32::from(RoleType::Basic), 0);
        assert_eq!(i32::from(RoleType::Management), 50);
        assert_eq!(i32::from(RoleType::Admin), 60);
        assert_eq!(i32::from(RoleType::SuperAdmin), 100);

        assert_eq!(RoleType::try_from(50).unwrap(), RoleType::Management);
        assert!(RoleType::try_from(1).is_err());
        assert!(RoleType::try_from(99).is_err());
    }
}
