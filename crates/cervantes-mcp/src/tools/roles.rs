//! Role tools.
//!
//! Roles live under the user endpoint family and are keyed by name.

use super::{encode_segment, parse_args};
use crate::client::CervantesClient;
use crate::models::{Role, RolePayload};
use crate::server::{McpServerResult, Tool};
use crate::types::{ToolDefinition, ToolResult};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

/// All role tools bound to the shared API client.
pub fn role_tools(api: Arc<CervantesClient>) -> Vec<Arc<dyn Tool>> {
    vec![
        Arc::new(GetRolesTool { api: api.clone() }),
        Arc::new(GetRoleByUserIdTool { api: api.clone() }),
        Arc::new(GetRoleByNameTool { api: api.clone() }),
        Arc::new(CreateRoleTool { api: api.clone() }),
        Arc::new(UpdateRoleTool { api: api.clone() }),
        Arc::new(DeleteRoleTool { api }),
    ]
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RoleNameParams {
    role_name: String,
}

pub struct GetRolesTool {
    api: Arc<CervantesClient>,
}

#[async_trait]
impl Tool for GetRolesTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new("get_roles", "Get all roles with their permissions")
            .with_category("roles")
    }

    async fn execute(&self, _args: Value) -> McpServerResult<ToolResult> {
        let roles = self
            .api
            .get::<Vec<Role>>("api/User/Roles")
            .await?
            .unwrap_or_default();
        Ok(ToolResult::json(roles))
    }
}

pub struct GetRoleByUserIdTool {
    api: Arc<CervantesClient>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserIdParams {
    user_id: String,
}

#[async_trait]
impl Tool for GetRoleByUserIdTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new("get_role_by_user_id", "Get role by user ID")
            .with_category("roles")
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
            .get::<String>(&format!("api/User/Role/{}", encode_segment(&params.user_id)))
            .await?;
        Ok(ToolResult::json(role))
    }
}

pub struct GetRoleByNameTool {
    api: Arc<CervantesClient>,
}

#[async_trait]
impl Tool for GetRoleByNameTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new("get_role_by_name", "Get role by role name")
            .with_category("roles")
            .with_schema(json!({
                "type": "object",
                "properties": {
                    "roleName": { "type": "string", "description": "Role name" }
                },
                "required": ["roleName"]
            }))
    }

    async fn execute(&self, args: Value) -> McpServerResult<ToolResult> {
        let params: RoleNameParams = parse_args(args)?;
        let role = self
            .api
            .get::<Role>(&format!(
                "api/User/Role/{}",
                encode_segment(&params.role_name)
            ))
            .await?;
        Ok(ToolResult::json(role))
    }
}

pub struct CreateRoleTool {
    api: Arc<CervantesClient>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateRoleParams {
    name: String,
    description: Option<String>,
    #[serde(default)]
    permissions: Vec<String>,
}

#[async_trait]
impl Tool for CreateRoleTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new("create_role", "Create a new role")
            .with_category("roles")
            .with_schema(json!({
                "type": "object",
                "properties": {
                    "name": { "type": "string", "description": "Role name" },
                    "description": { "type": "string", "description": "Role description" },
                    "permissions": {
                        "type": "array",
                        "items": { "type": "string" },
                        "description": "List of permission names"
                    }
                },
                "required": ["name"]
            }))
    }

    async fn execute(&self, args: Value) -> McpServerResult<ToolResult> {
        let params: CreateRoleParams = parse_args(args)?;
        let payload = RolePayload {
            name: params.name,
            description: params.description,
            permissions: params.permissions,
        };
        let role = self.api.post::<_, Role>("api/User/Role", &payload).await?;
        Ok(ToolResult::json(role))
    }
}

pub struct UpdateRoleTool {
    api: Arc<CervantesClient>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdateRoleParams {
    role_name: String,
    description: Option<String>,
    #[serde(default)]
    permissions: Vec<String>,
}

#[async_trait]
impl Tool for UpdateRoleTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new("update_role", "Update an existing role")
            .with_category("roles")
            .with_schema(json!({
                "type": "object",
                "properties": {
                    "roleName": { "type": "string", "description": "Role name" },
                    "description": { "type": "string", "description": "Role description" },
                    "permissions": {
                        "type": "array",
                        "items": { "type": "string" },
                        "description": "List of permission names"
                    }
                },
                "required": ["roleName"]
            }))
    }

    async fn execute(&self, args: Value) -> McpServerResult<ToolResult> {
        let params: UpdateRoleParams = parse_args(args)?;
        let payload = RolePayload {
            name: params.role_name,
            description: params.description,
            permissions: params.permissions,
        };
        let role = self.api.put::<_, Role>("api/User/Role", &payload).await?;
        Ok(ToolResult::json(role))
    }
}

pub struct DeleteRoleTool {
    api: Arc<CervantesClient>,
}

#[async_trait]
impl Tool for DeleteRoleTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new("delete_role", "Delete a role")
            .with_category("roles")
            .with_schema(json!({
                "type": "object",
                "properties": {
                    "roleName": { "type": "string", "description": "Role name" }
                },
                "required": ["roleName"]
            }))
    }

    async fn execute(&self, args: Value) -> McpServerResult<ToolResult> {
        let params: RoleNameParams = parse_args(args)?;
        let deleted = self
            .api
            .delete(&format!(
                "api/User/Role/{}",
                encode_segment(&params.role_name)
            ))
            .await?;
        Ok(ToolResult::json(deleted))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CervantesConfig;
    use crate::server::McpServerError;

    fn api() -> Arc<CervantesClient> {
        Arc::new(CervantesClient::new(CervantesConfig::default()))
    }

    #[test]
    fn test_role_tools_registered() {
        let tools = role_tools(api());
        assert_eq!(tools.len(), 6);
        for tool in &tools {
            assert_eq!(tool.definition().category.as_deref(), Some("roles"));
        }
    }

    #[tokio::test]
    async fn test_create_role_requires_name() {
        let tool = CreateRoleTool { api: api() };
        let result = tool.execute(json!({ "permissions": ["projects.view"] })).await;
        assert!(matches!(result, Err(McpServerError::InvalidParams(_))));
    }
}
