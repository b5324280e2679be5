//! User account tools.
//!
//! User ids are opaque strings, not UUIDs, and interpolate into paths and
//! query strings percent-encoded.

use super::{decode_file_content, encode_segment, parse_args};
use crate::client::CervantesClient;
use crate::models::{AvatarUpdate, User, UserCreate, UserUpdate};
use crate::server::{McpServerError, McpServerResult, Tool};
use crate::types::{ToolDefinition, ToolResult};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use uuid::Uuid;

/// All user tools bound to the shared API client.
pub fn user_tools(api: Arc<CervantesClient>) -> Vec<Arc<dyn Tool>> {
    vec![
        Arc::new(GetUsersTool { api: api.clone() }),
        Arc::new(GetUserByIdTool { api: api.clone() }),
        Arc::new(CreateUserTool { api: api.clone() }),
        Arc::new(UpdateUserTool { api: api.clone() }),
        Arc::new(GetUserRoleTool { api: api.clone() }),
        Arc::new(UpdateUserAvatarTool { api: api.clone() }),
        Arc::new(UpdateUserProfileTool { api }),
    ]
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserIdParams {
    user_id: String,
}

pub struct GetUsersTool {
    api: Arc<CervantesClient>,
}

#[async_trait]
impl Tool for GetUsersTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new("get_users", "Get all users").with_category("users")
    }

    async fn execute(&self, _args: Value) -> McpServerResult<ToolResult> {
        let users = self
            .api
            .get::<Vec<User>>("api/User")
            .await?
            .unwrap_or_default();
        Ok(ToolResult::json(users))
    }
}

pub struct GetUserByIdTool {
    api: Arc<CervantesClient>,
}

#[async_trait]
impl Tool for GetUserByIdTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new("get_user_by_id", "Get a specific user by ID")
            .with_category("users")
            .with_schema(json!({
                "type": "object",
                "properties": {
                    "userId": { "type": "string", "description": "User ID" }
                },
                "required": ["userId"]
            }))
    }

    async fn execute(&self, args: Value) -> McpServerResult<ToolResult> {
        let params: UserIdParams = parse_args(args)?;
        let user = self
            .api
            .get::<User>(&format!("api/User/{}", encode_segment(&params.user_id)))
            .await?;
        Ok(ToolResult::json(user))
    }
}

pub struct CreateUserTool {
    api: Arc<CervantesClient>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateUserParams {
    full_name: String,
    email: String,
    password: String,
    confirm_password: String,
    role: String,
    phone_number: Option<String>,
    description: Option<String>,
    position: Option<String>,
    client_id: Option<Uuid>,
    #[serde(default)]
    external_login: bool,
    file_name: Option<String>,
    file_content: Option<String>,
}

#[async_trait]
impl Tool for CreateUserTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new("create_user", "Create a new user")
            .with_category("users")
            .with_schema(json!({
                "type": "object",
                "properties": {
                    "fullName": { "type": "string", "description": "Full name of the user" },
                    "email": { "type": "string", "description": "Email address" },
                    "password": { "type": "string", "description": "Password" },
                    "confirmPassword": { "type": "string", "description": "Confirm password" },
                    "role": { "type": "string", "description": "User role" },
                    "phoneNumber": { "type": "string", "description": "Phone number" },
                    "description": { "type": "string", "description": "Description" },
                    "position": { "type": "string", "description": "Position/job title" },
                    "clientId": { "type": "string", "description": "Client ID" },
                    "externalLogin": { "type": "boolean", "description": "Is external login" },
                    "fileName": { "type": "string", "description": "Avatar file name" },
                    "fileContent": { "type": "string", "description": "Avatar content, base64 encoded" }
                },
                "required": ["fullName", "email", "password", "confirmPassword", "role"]
            }))
    }

    async fn execute(&self, args: Value) -> McpServerResult<ToolResult> {
        let params: CreateUserParams = parse_args(args)?;
        let file_content = params
            .file_content
            .as_deref()
            .map(|text| decode_file_content("fileContent", text))
            .transpose()?;
        let payload = UserCreate {
            full_name: Some(params.full_name),
            email: Some(params.email),
            phone_number: params.phone_number,
            description: params.description,
            position: params.position,
            password: Some(params.password),
            confirm_password: Some(params.confirm_password),
            role: Some(params.role),
            file_name: params.file_name,
            file_content,
            external_login: params.external_login,
            client_id: params.client_id,
        };
        let user = self.api.post::<_, User>("api/User", &payload).await?;
        Ok(ToolResult::json(user))
    }
}

pub struct UpdateUserTool {
    api: Arc<CervantesClient>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdateUserParams {
    id: String,
    full_name: String,
    email: String,
    role: String,
    phone_number: Option<String>,
    description: Option<String>,
    position: Option<String>,
    password: Option<String>,
    confirm_password: Option<String>,
    client_id: Option<Uuid>,
    #[serde(default)]
    external_login: bool,
    #[serde(default)]
    lockout: bool,
    #[serde(default)]
    two_factor_enabled: bool,
}

#[async_trait]
impl Tool for UpdateUserTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new("update_user", "Update an existing user")
            .with_category("users")
            .with_schema(json!({
                "type": "object",
                "properties": {
                    "id": { "type": "string", "description": "User ID" },
                    "fullName": { "type": "string", "description": "Full name of the user" },
                    "email": { "type": "string", "description": "Email address" },
                    "role": { "type": "string", "description": "User role" },
                    "phoneNumber": { "type": "string", "description": "Phone number" },
                    "description": { "type": "string", "description": "Description" },
                    "position": { "type": "string", "description": "Position/job title" },
                    "password": { "type": "string", "description": "Password (omit to keep current)" },
                    "confirmPassword": { "type": "string", "description": "Confirm password" },
                    "clientId": { "type": "string", "description": "Client ID" },
                    "externalLogin": { "type": "boolean", "description": "Is external login" },
                    "lockout": { "type": "boolean", "description": "Account is locked out" },
                    "twoFactorEnabled": { "type": "boolean", "description": "Two-factor authentication enabled" }
                },
                "required": ["id", "fullName", "email", "role"]
            }))
    }

    async fn execute(&self, args: Value) -> McpServerResult<ToolResult> {
        let params: UpdateUserParams = parse_args(args)?;
        let payload = UserUpdate {
            id: params.id,
            full_name: Some(params.full_name),
            email: Some(params.email),
            phone_number: params.phone_number,
            description: params.description,
            position: params.position,
            password: params.password,
            confirm_password: params.confirm_password,
            role: Some(params.role),
            file_name: None,
            file_content: None,
            client_id: params.client_id,
            image_path: None,
            external_login: params.external_login,
            lockout: params.lockout,
            two_factor_enabled: params.two_factor_enabled,
        };
        let user = self.api.put::<_, User>("api/User", &payload).await?;
        Ok(ToolResult::json(user))
    }
}

pub struct GetUserRoleTool {
    api: Arc<CervantesClient>,
}

#[async_trait]
impl Tool for GetUserRoleTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new("get_user_role", "Get user role by user ID")
            .with_category("users")
            .with_schema(json!({
                "type": "object",
                "properties": {
                    "userId": { "type": "string", "description": "User ID" }
                },
                "required": ["userId"]
            }))
    }

    async fn execute(&self, args: Value) -> McpServerResult<ToolResult> {
        let params: UserIdParams = parse_args(args)?;
        let role = self
            .api
            .get::<String>(&format!(
                "api/User/Role?userId={}",
                encode_segment(&params.user_id)
            ))
            .await?;
        Ok(ToolResult::json(role))
    }
}

pub struct UpdateUserAvatarTool {
    api: Arc<CervantesClient>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdateAvatarParams {
    avatar_content: String,
}

#[async_trait]
impl Tool for UpdateUserAvatarTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new("update_user_avatar", "Update user avatar")
            .with_category("users")
            .with_schema(json!({
                "type": "object",
                "properties": {
                    "avatarContent": { "type": "string", "description": "Avatar file content, base64 encoded" }
                },
                "required": ["avatarContent"]
            }))
    }

    async fn execute(&self, args: Value) -> McpServerResult<ToolResult> {
        let params: UpdateAvatarParams = parse_args(args)?;
        let avatar_content = Some(decode_file_content("avatarContent", &params.avatar_content)?);
        let payload = AvatarUpdate { avatar_content };
        let ok = self.api.post_ok("api/User/Avatar", &payload).await?;
        Ok(ToolResult::json(ok))
    }
}

pub struct UpdateUserProfileTool {
    api: Arc<CervantesClient>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdateProfileParams {
    profile_data: String,
}

#[async_trait]
impl Tool for UpdateUserProfileTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new("update_user_profile", "Update the current user's profile")
            .with_category("users")
            .with_schema(json!({
                "type": "object",
                "properties": {
                    "profileData": { "type": "string", "description": "Profile data as a JSON object string" }
                },
                "required": ["profileData"]
            }))
    }

    async fn execute(&self, args: Value) -> McpServerResult<ToolResult> {
        let params: UpdateProfileParams = parse_args(args)?;
        // The profile arrives as a JSON string; parse it so the API receives
        // an object, not a doubly-encoded string.
        let profile: Value = serde_json::from_str(&params.profile_data)
            .map_err(|e| McpServerError::InvalidParams(format!("Invalid profileData: {}", e)))?;
        let ok = self.api.put_ok("api/User/Profile", &profile).await?;
        Ok(ToolResult::json(ok))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CervantesConfig;

    fn api() -> Arc<CervantesClient> {
        Arc::new(CervantesClient::new(CervantesConfig::default()))
    }

    #[test]
    fn test_user_tools_registered() {
        let tools = user_tools(api());
        assert_eq!(tools.len(), 7);
        for tool in &tools {
            assert_eq!(tool.definition().category.as_deref(), Some("users"));
        }
    }

    #[tokio::test]
    async fn test_update_user_avatar_rejects_bad_base64() {
        let tool = UpdateUserAvatarTool { api: api() };
        let result = tool.execute(json!({ "avatarContent": "///...bad" })).await;
        assert!(matches!(result, Err(McpServerError::InvalidParams(_))));
    }

    #[tokio::test]
    async fn test_update_user_profile_rejects_malformed_json() {
        let tool = UpdateUserProfileTool { api: api() };
        let result = tool.execute(json!({ "profileData": "{not json" })).await;
        assert!(matches!(result, Err(McpServerError::InvalidParams(_))));
    }
}
