//! Client (customer organization) tools.

use super::{decode_file_content, encode_segment, parse_args};
use crate::client::CervantesClient;
use crate::models::{Client, ClientCreate, ClientUpdate};
use crate::server::{McpServerResult, Tool};
use crate::types::{ToolDefinition, ToolResult};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use uuid::Uuid;

/// All client tools bound to the shared API client.
pub fn client_tools(api: Arc<CervantesClient>) -> Vec<Arc<dyn Tool>> {
    vec![
        Arc::new(GetClientsTool { api: api.clone() }),
        Arc::new(GetClientByIdTool { api: api.clone() }),
        Arc::new(CreateClientTool { api: api.clone() }),
        Arc::new(UpdateClientTool { api: api.clone() }),
        Arc::new(DeleteClientTool { api: api.clone() }),
        Arc::new(SearchClientsTool { api: api.clone() }),
        Arc::new(DeleteClientAvatarTool { api }),
    ]
}

pub struct GetClientsTool {
    api: Arc<CervantesClient>,
}

#[async_trait]
impl Tool for GetClientsTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new("get_clients", "Get all clients from Cervantes").with_category("clients")
    }

    async fn execute(&self, _args: Value) -> McpServerResult<ToolResult> {
        let clients = self
            .api
            .get::<Vec<Client>>("api/Clients")
            .await?
            .unwrap_or_default();
        Ok(ToolResult::json(clients))
    }
}

pub struct GetClientByIdTool {
    api: Arc<CervantesClient>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ClientIdParams {
    id: Uuid,
}

#[async_trait]
impl Tool for GetClientByIdTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new("get_client_by_id", "Get a specific client by ID")
            .with_category("clients")
            .with_schema(json!({
                "type": "object",
                "properties": {
                    "id": { "type": "string", "description": "The client ID" }
                },
                "required": ["id"]
            }))
    }

    async fn execute(&self, args: Value) -> McpServerResult<ToolResult> {
        let params: ClientIdParams = parse_args(args)?;
        let client = self
            .api
            .get::<Client>(&format!("api/Clients/{}", params.id))
            .await?;
        Ok(ToolResult::json(client))
    }
}

pub struct CreateClientTool {
    api: Arc<CervantesClient>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateClientParams {
    name: String,
    description: Option<String>,
    url: Option<String>,
    contact_name: Option<String>,
    contact_email: Option<String>,
    contact_phone: Option<String>,
    file_name: Option<String>,
    file_content: Option<String>,
}

#[async_trait]
impl Tool for CreateClientTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new("create_client", "Create a new client")
            .with_category("clients")
            .with_schema(json!({
                "type": "object",
                "properties": {
                    "name": { "type": "string", "description": "Client name" },
                    "description": { "type": "string", "description": "Client description" },
                    "url": { "type": "string", "description": "Client website URL" },
                    "contactName": { "type": "string", "description": "Contact person name" },
                    "contactEmail": { "type": "string", "description": "Contact email" },
                    "contactPhone": { "type": "string", "description": "Contact phone" },
                    "fileName": { "type": "string", "description": "Logo file name" },
                    "fileContent": { "type": "string", "description": "Logo content, base64 encoded" }
                },
                "required": ["name"]
            }))
    }

    async fn execute(&self, args: Value) -> McpServerResult<ToolResult> {
        let params: CreateClientParams = parse_args(args)?;
        let file_content = params
            .file_content
            .as_deref()
            .map(|text| decode_file_content("fileContent", text))
            .transpose()?;

        let payload = ClientCreate {
            name: params.name,
            description: params.description,
            url: params.url,
            contact_name: params.contact_name,
            contact_email: params.contact_email,
            contact_phone: params.contact_phone,
            file_name: params.file_name,
            file_content,
        };
        let client = self.api.post::<_, Client>("api/Clients", &payload).await?;
        Ok(ToolResult::json(client))
    }
}

pub struct UpdateClientTool {
    api: Arc<CervantesClient>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdateClientParams {
    id: Uuid,
    name: String,
    description: Option<String>,
    url: Option<String>,
    contact_name: Option<String>,
    contact_email: Option<String>,
    contact_phone: Option<String>,
    file_name: Option<String>,
    file_content: Option<String>,
}

#[async_trait]
impl Tool for UpdateClientTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new("update_client", "Update an existing client")
            .with_category("clients")
            .with_schema(json!({
                "type": "object",
                "properties": {
                    "id": { "type": "string", "description": "The client ID" },
                    "name": { "type": "string", "description": "Client name" },
                    "description": { "type": "string", "description": "Client description" },
                    "url": { "type": "string", "description": "Client website URL" },
                    "contactName": { "type": "string", "description": "Contact person name" },
                    "contactEmail": { "type": "string", "description": "Contact email" },
                    "contactPhone": { "type": "string", "description": "Contact phone" },
                    "fileName": { "type": "string", "description": "Logo file name" },
                    "fileContent": { "type": "string", "description": "Logo content, base64 encoded" }
                },
                "required": ["id", "name"]
            }))
    }

    async fn execute(&self, args: Value) -> McpServerResult<ToolResult> {
        let params: UpdateClientParams = parse_args(args)?;
        let file_content = params
            .file_content
            .as_deref()
            .map(|text| decode_file_content("fileContent", text))
            .transpose()?;

        let payload = ClientUpdate {
            id: params.id,
            name: params.name,
            description: params.description,
            url: params.url,
            contact_name: params.contact_name,
            contact_email: params.contact_email,
            contact_phone: params.contact_phone,
            file_name: params.file_name,
            file_content,
        };
        let client = self.api.put::<_, Client>("api/Clients", &payload).await?;
        Ok(ToolResult::json(client))
    }
}

pub struct DeleteClientTool {
    api: Arc<CervantesClient>,
}

#[async_trait]
impl Tool for DeleteClientTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new("delete_client", "Delete a client")
            .with_category("clients")
            .with_schema(json!({
                "type": "object",
                "properties": {
                    "id": { "type": "string", "description": "The client ID" }
                },
                "required": ["id"]
            }))
    }

    async fn execute(&self, args: Value) -> McpServerResult<ToolResult> {
        let params: ClientIdParams = parse_args(args)?;
        let deleted = self.api.delete(&format!("api/Clients/{}", params.id)).await?;
        Ok(ToolResult::json(deleted))
    }
}

pub struct SearchClientsTool {
    api: Arc<CervantesClient>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchClientsParams {
    name: String,
}

#[async_trait]
impl Tool for SearchClientsTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new("search_clients", "Search clients by name")
            .with_category("clients")
            .with_schema(json!({
                "type": "object",
                "properties": {
                    "name": { "type": "string", "description": "Client name to search for" }
                },
                "required": ["name"]
            }))
    }

    async fn execute(&self, args: Value) -> McpServerResult<ToolResult> {
        let params: SearchClientsParams = parse_args(args)?;
        let clients = self
            .api
            .get::<Vec<Client>>(&format!("api/Clients/{}", encode_segment(&params.name)))
            .await?
            .unwrap_or_default();
        Ok(ToolResult::json(clients))
    }
}

pub struct DeleteClientAvatarTool {
    api: Arc<CervantesClient>,
}

#[async_trait]
impl Tool for DeleteClientAvatarTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new("delete_client_avatar", "Delete a client's avatar image")
            .with_category("clients")
            .with_schema(json!({
                "type": "object",
                "properties": {
                    "id": { "type": "string", "description": "The client ID" }
                },
                "required": ["id"]
            }))
    }

    async fn execute(&self, args: Value) -> McpServerResult<ToolResult> {
        let params: ClientIdParams = parse_args(args)?;
        let deleted = self
            .api
            .delete(&format!("api/Clients/Avatar/{}", params.id))
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
    fn test_client_tools_registered() {
        let tools = client_tools(api());
        assert_eq!(tools.len(), 7);

        let names: Vec<String> = tools.iter().map(|t| t.definition().name).collect();
        assert!(names.contains(&"get_clients".to_string()));
        assert!(names.contains(&"search_clients".to_string()));
        assert!(names.contains(&"delete_client_avatar".to_string()));
    }

    #[test]
    fn test_create_client_schema_requires_name() {
        let def = CreateClientTool { api: api() }.definition();
        assert_eq!(def.category.as_deref(), Some("clients"));
        assert_eq!(def.input_schema["required"], json!(["name"]));
    }

    #[tokio::test]
    async fn test_create_client_rejects_bad_base64_before_http() {
        let tool = CreateClientTool { api: api() };
        let result = tool
            .execute(json!({ "name": "Acme", "fileContent": "%%%" }))
            .await;
        assert!(matches!(result, Err(McpServerError::InvalidParams(_))));
    }

    #[tokio::test]
    async fn test_get_client_by_id_rejects_non_uuid() {
        let tool = GetClientByIdTool { api: api() };
        let result = tool.execute(json!({ "id": "not-a-uuid" })).await;
        assert!(matches!(result, Err(McpServerError::InvalidParams(_))));
    }
}
