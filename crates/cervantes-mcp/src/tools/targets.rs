//! Target and target service tools.

use super::{enum_param, parse_args};
use crate::client::CervantesClient;
use crate::models::{
    Target, TargetCreate, TargetImport, TargetService, TargetServiceCreate, TargetUpdate,
};
use crate::server::{McpServerResult, Tool};
use crate::types::{ToolDefinition, ToolResult};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use uuid::Uuid;

/// All target tools bound to the shared API client.
pub fn target_tools(api: Arc<CervantesClient>) -> Vec<Arc<dyn Tool>> {
    vec![
        Arc::new(GetTargetsTool { api: api.clone() }),
        Arc::new(GetTargetByIdTool { api: api.clone() }),
        Arc::new(CreateTargetTool { api: api.clone() }),
        Arc::new(UpdateTargetTool { api: api.clone() }),
        Arc::new(DeleteTargetTool { api: api.clone() }),
        Arc::new(GetTargetsByProjectTool { api: api.clone() }),
        Arc::new(GetTargetServicesTool { api: api.clone() }),
        Arc::new(AddTargetServiceTool { api: api.clone() }),
        Arc::new(DeleteTargetServiceTool { api: api.clone() }),
        Arc::new(ImportTargetsTool { api }),
    ]
}

#[derive(Deserialize)]
struct TargetIdParams {
    id: Uuid,
}

pub struct GetTargetsTool {
    api: Arc<CervantesClient>,
}

#[async_trait]
impl Tool for GetTargetsTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new("get_targets", "Get all targets").with_category("targets")
    }

    async fn execute(&self, _args: Value) -> McpServerResult<ToolResult> {
        let targets = self
            .api
            .get::<Vec<Target>>("api/Target")
            .await?
            .unwrap_or_default();
        Ok(ToolResult::json(targets))
    }
}

pub struct GetTargetByIdTool {
    api: Arc<CervantesClient>,
}

#[async_trait]
impl Tool for GetTargetByIdTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new("get_target_by_id", "Get a specific target by ID")
            .with_category("targets")
            .with_schema(json!({
                "type": "object",
                "properties": {
                    "id": { "type": "string", "description": "Target ID" }
                },
                "required": ["id"]
            }))
    }

    async fn execute(&self, args: Value) -> McpServerResult<ToolResult> {
        let params: TargetIdParams = parse_args(args)?;
        let target = self
            .api
            .get::<Target>(&format!("api/Target/{}", params.id))
            .await?;
        Ok(ToolResult::json(target))
    }
}

pub struct CreateTargetTool {
    api: Arc<CervantesClient>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateTargetParams {
    name: String,
    project_id: Uuid,
    #[serde(rename = "type")]
    target_type: i32,
    description: Option<String>,
    user_id: Option<String>,
}

#[async_trait]
impl Tool for CreateTargetTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new("create_target", "Create a new target")
            .with_category("targets")
            .with_schema(json!({
                "type": "object",
                "properties": {
                    "name": { "type": "string", "description": "Target name" },
                    "projectId": { "type": "string", "description": "Project ID" },
                    "type": { "type": "integer", "description": "Target type (0=Domain, 1=Ip, 2=Binary, 3=CIDR, 4=Hostname)" },
                    "description": { "type": "string", "description": "Target description" },
                    "userId": { "type": "string", "description": "User ID" }
                },
                "required": ["name", "projectId", "type"]
            }))
    }

    async fn execute(&self, args: Value) -> McpServerResult<ToolResult> {
        let params: CreateTargetParams = parse_args(args)?;
        let payload = TargetCreate {
            name: params.name,
            description: params.description,
            target_type: enum_param(params.target_type)?,
            project_id: params.project_id,
            user_id: params.user_id,
        };
        let target = self.api.post::<_, Target>("api/Target", &payload).await?;
        Ok(ToolResult::json(target))
    }
}

pub struct UpdateTargetTool {
    api: Arc<CervantesClient>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdateTargetParams {
    id: Uuid,
    name: Option<String>,
    description: Option<String>,
    #[serde(rename = "type", default)]
    target_type: i32,
    user_id: Option<String>,
    project_id: Option<Uuid>,
}

#[async_trait]
impl Tool for UpdateTargetTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new("update_target", "Update an existing target")
            .with_category("targets")
            .with_schema(json!({
                "type": "object",
                "properties": {
                    "id": { "type": "string", "description": "Target ID" },
                    "name": { "type": "string", "description": "Target name" },
                    "description": { "type": "string", "description": "Target description" },
                    "type": { "type": "integer", "description": "Target type (0=Domain, 1=Ip, 2=Binary, 3=CIDR, 4=Hostname)" },
                    "userId": { "type": "string", "description": "User ID" },
                    "projectId": { "type": "string", "description": "Project ID" }
                },
                "required": ["id"]
            }))
    }

    async fn execute(&self, args: Value) -> McpServerResult<ToolResult> {
        let params: UpdateTargetParams = parse_args(args)?;
        let payload = TargetUpdate {
            id: params.id,
            name: params.name,
            description: params.description,
            target_type: enum_param(params.target_type)?,
            project_id: params.project_id,
            user_id: params.user_id,
        };
        let target = self.api.put::<_, Target>("api/Target", &payload).await?;
        Ok(ToolResult::json(target))
    }
}

pub struct DeleteTargetTool {
    api: Arc<CervantesClient>,
}

#[async_trait]
impl Tool for DeleteTargetTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new("delete_target", "Delete a target")
            .with_category("targets")
            .with_schema(json!({
                "type": "object",
                "properties": {
                    "id": { "type": "string", "description": "Target ID" }
                },
                "required": ["id"]
            }))
    }

    async fn execute(&self, args: Value) -> McpServerResult<ToolResult> {
        let params: TargetIdParams = parse_args(args)?;
        let deleted = self.api.delete(&format!("api/Target/{}", params.id)).await?;
        Ok(ToolResult::json(deleted))
    }
}

pub struct GetTargetsByProjectTool {
    api: Arc<CervantesClient>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProjectKeyParams {
    project_id: Uuid,
}

#[async_trait]
impl Tool for GetTargetsByProjectTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new("get_targets_by_project", "Get targets for a specific project")
            .with_category("targets")
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
        let targets = self
            .api
            .get::<Vec<Target>>(&format!("api/Target/Project/{}", params.project_id))
            .await?
            .unwrap_or_default();
        Ok(ToolResult::json(targets))
    }
}

pub struct GetTargetServicesTool {
    api: Arc<CervantesClient>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TargetKeyParams {
    target_id: Uuid,
}

#[async_trait]
impl Tool for GetTargetServicesTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new("get_target_services", "Get services for a specific target")
            .with_category("targets")
            .with_schema(json!({
                "type": "object",
                "properties": {
                    "targetId": { "type": "string", "description": "Target ID" }
                },
                "required": ["targetId"]
            }))
    }

    async fn execute(&self, args: Value) -> McpServerResult<ToolResult> {
        let params: TargetKeyParams = parse_args(args)?;
        let services = self
            .api
            .get::<Vec<TargetService>>(&format!("api/Target/{}/Services", params.target_id))
            .await?
            .unwrap_or_default();
        Ok(ToolResult::json(services))
    }
}

pub struct AddTargetServiceTool {
    api: Arc<CervantesClient>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AddTargetServiceParams {
    target_id: Uuid,
    name: String,
    port: i32,
    version: Option<String>,
    note: Option<String>,
}

#[async_trait]
impl Tool for AddTargetServiceTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new("add_target_service", "Add a service to a target")
            .with_category("targets")
            .with_schema(json!({
                "type": "object",
                "properties": {
                    "targetId": { "type": "string", "description": "Target ID" },
                    "name": { "type": "string", "description": "Service name" },
                    "port": { "type": "integer", "description": "Service port" },
                    "version": { "type": "string", "description": "Service version" },
                    "note": { "type": "string", "description": "Service note" }
                },
                "required": ["targetId", "name", "port"]
            }))
    }

    async fn execute(&self, args: Value) -> McpServerResult<ToolResult> {
        let params: AddTargetServiceParams = parse_args(args)?;
        let path = format!("api/Target/{}/Services", params.target_id);
        let payload = TargetServiceCreate {
            target_id: params.target_id,
            name: params.name,
            port: params.port,
            version: params.version,
            note: params.note,
        };
        let service = self.api.post::<_, TargetService>(&path, &payload).await?;
        Ok(ToolResult::json(service))
    }
}

pub struct DeleteTargetServiceTool {
    api: Arc<CervantesClient>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DeleteTargetServiceParams {
    target_id: Uuid,
    service_id: Uuid,
}

#[async_trait]
impl Tool for DeleteTargetServiceTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new("delete_target_service", "Delete a service from a target")
            .with_category("targets")
            .with_schema(json!({
                "type": "object",
                "properties": {
                    "targetId": { "type": "string", "description": "Target ID" },
                    "serviceId": { "type": "string", "description": "Service ID" }
                },
                "required": ["targetId", "serviceId"]
            }))
    }

    async fn execute(&self, args: Value) -> McpServerResult<ToolResult> {
        let params: DeleteTargetServiceParams = parse_args(args)?;
        let deleted = self
            .api
            .delete(&format!(
                "api/Target/{}/Services/{}",
                params.target_id, params.service_id
            ))
            .await?;
        Ok(ToolResult::json(deleted))
    }
}

pub struct ImportTargetsTool {
    api: Arc<CervantesClient>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ImportTargetsParams {
    project_id: Uuid,
    import_data: String,
}

#[async_trait]
impl Tool for ImportTargetsTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new("import_targets", "Import targets from external source")
            .with_category("targets")
            .with_schema(json!({
                "type": "object",
                "properties": {
                    "projectId": { "type": "string", "description": "Project ID" },
                    "importData": { "type": "string", "description": "Import data as JSON string" }
                },
                "required": ["projectId", "importData"]
            }))
    }

    async fn execute(&self, args: Value) -> McpServerResult<ToolResult> {
        let params: ImportTargetsParams = parse_args(args)?;
        let payload = TargetImport {
            project_id: params.project_id,
            import_data: params.import_data,
        };
        let ok = self.api.post_ok("api/Target/Import", &payload).await?;
        Ok(ToolResult::json(ok))
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
    fn test_target_tools_registered() {
        let tools = target_tools(api());
        assert_eq!(tools.len(), 10);
        for tool in &tools {
            assert_eq!(tool.definition().category.as_deref(), Some("targets"));
        }
    }

    #[test]
    fn test_create_target_uses_wire_type_name() {
        let def = CreateTargetTool { api: api() }.definition();
        assert!(def.input_schema["properties"].get("type").is_some());
        assert!(def.input_schema["properties"].get("targetType").is_none());
    }

    #[tokio::test]
    async fn test_create_target_rejects_out_of_range_type() {
        let tool = CreateTargetTool { api: api() };
        let result = tool
            .execute(json!({
                "name": "10.0.0.0/24",
                "projectId": Uuid::new_v4(),
                "type": 9
            }))
            .await;
        assert!(matches!(result, Err(McpServerError::InvalidParams(_))));
    }
}
