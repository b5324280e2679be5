//! Vault (per-project secret store) tools.
//!
//! Vault entries are only listed per project; there is no global listing.

use super::{enum_param, parse_args};
use crate::client::CervantesClient;
use crate::models::{Vault, VaultCreate, VaultUpdate};
use crate::server::{McpServerResult, Tool};
use crate::types::{ToolDefinition, ToolResult};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use uuid::Uuid;

/// All vault tools bound to the shared API client.
pub fn vault_tools(api: Arc<CervantesClient>) -> Vec<Arc<dyn Tool>> {
    vec![
        Arc::new(GetVaultByProjectTool { api: api.clone() }),
        Arc::new(CreateVaultEntryTool { api: api.clone() }),
        Arc::new(UpdateVaultEntryTool { api: api.clone() }),
        Arc::new(DeleteVaultEntryTool { api }),
    ]
}

pub struct GetVaultByProjectTool {
    api: Arc<CervantesClient>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProjectKeyParams {
    project_id: Uuid,
}

#[async_trait]
impl Tool for GetVaultByProjectTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new(
            "get_vault_by_project",
            "Get vault entries for a specific project",
        )
        .with_category("vaults")
        .with_schema(json!({
            "type": "object",
            "properties": {
                "projectId": { "type": "string", "description": "Project ID" }
            },
            "required": ["projectId"]
        }))
    }

    async fn execute(&self, args: Value) -> McpServerResult<ToolResult> {
        let params: ProjectKeyParams = parse_args(args)?;
        let vaults = self
            .api
            .get::<Vec<Vault>>(&format!("api/Vault/Project/{}", params.project_id))
            .await?
            .unwrap_or_default();
        Ok(ToolResult::json(vaults))
    }
}

pub struct CreateVaultEntryTool {
    api: Arc<CervantesClient>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateVaultParams {
    name: String,
    project_id: Uuid,
    #[serde(rename = "type")]
    vault_type: i32,
    value: String,
    description: Option<String>,
}

#[async_trait]
impl Tool for CreateVaultEntryTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new("create_vault_entry", "Create a new vault entry")
            .with_category("vaults")
            .with_schema(json!({
                "type": "object",
                "properties": {
                    "name": { "type": "string", "description": "Name of the vault entry" },
                    "projectId": { "type": "string", "description": "Project ID" },
                    "type": { "type": "integer", "description": "Vault type (0=Credential, 1=Note, 2=Identity, 3=Card, 4=SecureNote, 5=Other)" },
                    "value": { "type": "string", "description": "Value/content of the vault entry" },
                    "description": { "type": "string", "description": "Description of the vault entry" }
                },
                "required": ["name", "projectId", "type", "value"]
            }))
    }

    async fn execute(&self, args: Value) -> McpServerResult<ToolResult> {
        let params: CreateVaultParams = parse_args(args)?;
        let payload = VaultCreate {
            name: params.name,
            description: params.description,
            vault_type: enum_param(params.vault_type)?,
            value: params.value,
            project_id: params.project_id,
        };
        let vault = self.api.post::<_, Vault>("api/Vault", &payload).await?;
        Ok(ToolResult::json(vault))
    }
}

pub struct UpdateVaultEntryTool {
    api: Arc<CervantesClient>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdateVaultParams {
    id: Uuid,
    name: String,
    project_id: Uuid,
    #[serde(rename = "type")]
    vault_type: i32,
    value: String,
    description: Option<String>,
}

#[async_trait]
impl Tool for UpdateVaultEntryTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new("update_vault_entry", "Update an existing vault entry")
            .with_category("vaults")
            .with_schema(json!({
                "type": "object",
                "properties": {
                    "id": { "type": "string", "description": "Vault entry ID" },
                    "name": { "type": "string", "description": "Name of the vault entry" },
                    "projectId": { "type": "string", "description": "Project ID" },
                    "type": { "type": "integer", "description": "Vault type (0=Credential, 1=Note, 2=Identity, 3=Card, 4=SecureNote, 5=Other)" },
                    "value": { "type": "string", "description": "Value/content of the vault entry" },
                    "description": { "type": "string", "description": "Description of the vault entry" }
                },
                "required": ["id", "name", "projectId", "type", "value"]
            }))
    }

    async fn execute(&self, args: Value) -> McpServerResult<ToolResult> {
        let params: UpdateVaultParams = parse_args(args)?;
        let payload = VaultUpdate {
            id: params.id,
            name: params.name,
            description: params.description,
            vault_type: enum_param(params.vault_type)?,
            value: params.value,
            project_id: params.project_id,
        };
        let vault = self.api.put::<_, Vault>("api/Vault", &payload).await?;
        Ok(ToolResult::json(vault))
    }
}

pub struct DeleteVaultEntryTool {
    api: Arc<CervantesClient>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DeleteVaultParams {
    vault_id: Uuid,
}

#[async_trait]
impl Tool for DeleteVaultEntryTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new("delete_vault_entry", "Delete a vault entry")
            .with_category("vaults")
            .with_schema(json!({
                "type": "object",
                "properties": {
                    "vaultId": { "type": "string", "description": "Vault entry ID" }
                },
                "required": ["vaultId"]
            }))
    }

    async fn execute(&self, args: Value) -> McpServerResult<ToolResult> {
        let params: DeleteVaultParams = parse_args(args)?;
        let deleted = self
            .api
            .delete(&format!("api/Vault/{}", params.vault_id))
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
    fn test_vault_tools_registered() {
        let tools = vault_tools(api());
        assert_eq!(tools.len(), 4);
        for tool in &tools {
            assert_eq!(tool.definition().category.as_deref(), Some("vaults"));
        }
    }

    #[tokio::test]
    async fn test_create_vault_entry_rejects_out_of_range_type() {
        let tool = CreateVaultEntryTool { api: api() };
        let result = tool
            .execute(json!({
                "name": "ssh key",
                "projectId": Uuid::new_v4(),
                "type": 6,
                "value": "secret"
            }))
            .await;
        assert!(matches!(result, Err(McpServerError::InvalidParams(_))));
    }
}
