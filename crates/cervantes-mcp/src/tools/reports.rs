//! Report, template, and component tools.
//!
//! Reports, templates, components, and parts have no stable documented wire
//! shape, so responses pass through as opaque JSON. The download tool
//! returns the generated file as a base64 string, the wire encoding of the
//! byte payload.

use super::{enum_param, parse_args};
use crate::client::CervantesClient;
use crate::models::{
    ReportCreate, ReportDownload, ReportImport, ReportTemplateCreate, ReportTemplateUpdate,
    ReportUpdate,
};
use crate::server::{McpServerResult, Tool};
use crate::types::{ToolDefinition, ToolResult};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use uuid::Uuid;

/// All report tools bound to the shared API client.
pub fn report_tools(api: Arc<CervantesClient>) -> Vec<Arc<dyn Tool>> {
    vec![
        Arc::new(GetReportsTool { api: api.clone() }),
        Arc::new(UpdateReportTool { api: api.clone() }),
        Arc::new(GetReportsByProjectTool { api: api.clone() }),
        Arc::new(GenerateReportTool { api: api.clone() }),
        Arc::new(DeleteReportTool { api: api.clone() }),
        Arc::new(GetReportTemplatesTool { api: api.clone() }),
        Arc::new(CreateReportTemplateTool { api: api.clone() }),
        Arc::new(UpdateReportTemplateTool { api: api.clone() }),
        Arc::new(DeleteReportTemplateTool { api: api.clone() }),
        Arc::new(GetReportComponentsTool { api: api.clone() }),
        Arc::new(GetReportPartsTool { api: api.clone() }),
        Arc::new(DeleteReportComponentTool { api: api.clone() }),
        Arc::new(DownloadReportTool { api: api.clone() }),
        Arc::new(ImportReportTool { api }),
    ]
}

pub struct GetReportsTool {
    api: Arc<CervantesClient>,
}

#[async_trait]
impl Tool for GetReportsTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new("get_reports", "Get all reports").with_category("reports")
    }

    async fn execute(&self, _args: Value) -> McpServerResult<ToolResult> {
        let reports = self
            .api
            .get::<Vec<Value>>("api/Report")
            .await?
            .unwrap_or_default();
        Ok(ToolResult::json(reports))
    }
}

pub struct UpdateReportTool {
    api: Arc<CervantesClient>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdateReportParams {
    id: Uuid,
    name: String,
    description: Option<String>,
    #[serde(default)]
    language: i32,
}

#[async_trait]
impl Tool for UpdateReportTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new("update_report", "Update an existing report")
            .with_category("reports")
            .with_schema(json!({
                "type": "object",
                "properties": {
                    "id": { "type": "string", "description": "Report ID" },
                    "name": { "type": "string", "description": "Report name" },
                    "description": { "type": "string", "description": "Report description" },
                    "language": { "type": "integer", "description": "Report language (0=English, 1=Spanish)" }
                },
                "required": ["id", "name"]
            }))
    }

    async fn execute(&self, args: Value) -> McpServerResult<ToolResult> {
        let params: UpdateReportParams = parse_args(args)?;
        let payload = ReportUpdate {
            id: params.id,
            name: params.name,
            description: params.description,
            language: enum_param(params.language)?,
        };
        let report = self.api.put::<_, Value>("api/Report", &payload).await?;
        Ok(ToolResult::json(report))
    }
}

pub struct GetReportsByProjectTool {
    api: Arc<CervantesClient>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProjectKeyParams {
    project_id: Uuid,
}

#[async_trait]
impl Tool for GetReportsByProjectTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new(
            "get_reports_by_project",
            "Get all reports for a specific project",
        )
        .with_category("reports")
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
        let reports = self
            .api
            .get::<Vec<Value>>(&format!("api/Report/Project/{}", params.project_id))
            .await?
            .unwrap_or_default();
        Ok(ToolResult::json(reports))
    }
}

pub struct GenerateReportTool {
    api: Arc<CervantesClient>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateReportParams {
    name: String,
    project_id: Uuid,
    description: Option<String>,
    #[serde(default)]
    language: i32,
}

#[async_trait]
impl Tool for GenerateReportTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new("generate_report", "Generate a new report")
            .with_category("reports")
            .with_schema(json!({
                "type": "object",
                "properties": {
                    "name": { "type": "string", "description": "Report name" },
                    "projectId": { "type": "string", "description": "Project ID" },
                    "description": { "type": "string", "description": "Report description" },
                    "language": { "type": "integer", "description": "Report language (0=English, 1=Spanish)" }
                },
                "required": ["name", "projectId"]
            }))
    }

    async fn execute(&self, args: Value) -> McpServerResult<ToolResult> {
        let params: GenerateReportParams = parse_args(args)?;
        let payload = ReportCreate {
            name: params.name,
            description: params.description,
            language: enum_param(params.language)?,
            project_id: params.project_id,
        };
        let report = self
            .api
            .post::<_, Value>("api/Report/GenerateNewReport", &payload)
            .await?;
        Ok(ToolResult::json(report))
    }
}

pub struct DeleteReportTool {
    api: Arc<CervantesClient>,
}

#[derive(Deserialize)]
struct ReportIdParams {
    id: Uuid,
}

#[async_trait]
impl Tool for DeleteReportTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new("delete_report", "Delete a report")
            .with_category("reports")
            .with_schema(json!({
                "type": "object",
                "properties": {
                    "id": { "type": "string", "description": "Report ID" }
                },
                "required": ["id"]
            }))
    }

    async fn execute(&self, args: Value) -> McpServerResult<ToolResult> {
        let params: ReportIdParams = parse_args(args)?;
        let deleted = self.api.delete(&format!("api/Report/{}", params.id)).await?;
        Ok(ToolResult::json(deleted))
    }
}

pub struct GetReportTemplatesTool {
    api: Arc<CervantesClient>,
}

#[async_trait]
impl Tool for GetReportTemplatesTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new("get_report_templates", "Get all report templates")
            .with_category("reports")
    }

    async fn execute(&self, _args: Value) -> McpServerResult<ToolResult> {
        let templates = self
            .api
            .get::<Vec<Value>>("api/Report/Templates")
            .await?
            .unwrap_or_default();
        Ok(ToolResult::json(templates))
    }
}

pub struct CreateReportTemplateTool {
    api: Arc<CervantesClient>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateTemplateParams {
    name: String,
    description: Option<String>,
    #[serde(default)]
    language: i32,
}

#[async_trait]
impl Tool for CreateReportTemplateTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new("create_report_template", "Create a new report template")
            .with_category("reports")
            .with_schema(json!({
                "type": "object",
                "properties": {
                    "name": { "type": "string", "description": "Template name" },
                    "description": { "type": "string", "description": "Template description" },
                    "language": { "type": "integer", "description": "Template language (0=English, 1=Spanish)" }
                },
                "required": ["name"]
            }))
    }

    async fn execute(&self, args: Value) -> McpServerResult<ToolResult> {
        let params: CreateTemplateParams = parse_args(args)?;
        let payload = ReportTemplateCreate {
            name: params.name,
            description: params.description,
            language: enum_param(params.language)?,
        };
        let template = self
            .api
            .post::<_, Value>("api/Report/Template", &payload)
            .await?;
        Ok(ToolResult::json(template))
    }
}

pub struct UpdateReportTemplateTool {
    api: Arc<CervantesClient>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdateTemplateParams {
    id: Uuid,
    name: String,
    description: Option<String>,
    #[serde(default)]
    language: i32,
}

#[async_trait]
impl Tool for UpdateReportTemplateTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new("update_report_template", "Update an existing report template")
            .with_category("reports")
            .with_schema(json!({
                "type": "object",
                "properties": {
                    "id": { "type": "string", "description": "Template ID" },
                    "name": { "type": "string", "description": "Template name" },
                    "description": { "type": "string", "description": "Template description" },
                    "language": { "type": "integer", "description": "Template language (0=English, 1=Spanish)" }
                },
                "required": ["id", "name"]
            }))
    }

    async fn execute(&self, args: Value) -> McpServerResult<ToolResult> {
        let params: UpdateTemplateParams = parse_args(args)?;
        let payload = ReportTemplateUpdate {
            id: params.id,
            name: params.name,
            description: params.description,
            language: enum_param(params.language)?,
        };
        let template = self
            .api
            .put::<_, Value>("api/Report/Template", &payload)
            .await?;
        Ok(ToolResult::json(template))
    }
}

pub struct DeleteReportTemplateTool {
    api: Arc<CervantesClient>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TemplateIdParams {
    template_id: Uuid,
}

#[async_trait]
impl Tool for DeleteReportTemplateTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new("delete_report_template", "Delete a report template")
            .with_category("reports")
            .with_schema(json!({
                "type": "object",
                "properties": {
                    "templateId": { "type": "string", "description": "Template ID" }
                },
                "required": ["templateId"]
            }))
    }

    async fn execute(&self, args: Value) -> McpServerResult<ToolResult> {
        let params: TemplateIdParams = parse_args(args)?;
        let deleted = self
            .api
            .delete(&format!("api/Report/Template/{}", params.template_id))
            .await?;
        Ok(ToolResult::json(deleted))
    }
}

pub struct GetReportComponentsTool {
    api: Arc<CervantesClient>,
}

#[async_trait]
impl Tool for GetReportComponentsTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new("get_report_components", "Get report components")
            .with_category("reports")
    }

    async fn execute(&self, _args: Value) -> McpServerResult<ToolResult> {
        let components = self
            .api
            .get::<Vec<Value>>("api/Report/Components")
            .await?
            .unwrap_or_default();
        Ok(ToolResult::json(components))
    }
}

pub struct GetReportPartsTool {
    api: Arc<CervantesClient>,
}

#[async_trait]
impl Tool for GetReportPartsTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new("get_report_parts", "Get report parts for a specific template")
            .with_category("reports")
            .with_schema(json!({
                "type": "object",
                "properties": {
                    "templateId": { "type": "string", "description": "Template ID" }
                },
                "required": ["templateId"]
            }))
    }

    async fn execute(&self, args: Value) -> McpServerResult<ToolResult> {
        let params: TemplateIdParams = parse_args(args)?;
        let parts = self
            .api
            .get::<Vec<Value>>(&format!("api/Report/Parts/{}", params.template_id))
            .await?
            .unwrap_or_default();
        Ok(ToolResult::json(parts))
    }
}

pub struct DeleteReportComponentTool {
    api: Arc<CervantesClient>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ComponentIdParams {
    component_id: Uuid,
}

#[async_trait]
impl Tool for DeleteReportComponentTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new("delete_report_component", "Delete a report component")
            .with_category("reports")
            .with_schema(json!({
                "type": "object",
                "properties": {
                    "componentId": { "type": "string", "description": "Component ID" }
                },
                "required": ["componentId"]
            }))
    }

    async fn execute(&self, args: Value) -> McpServerResult<ToolResult> {
        let params: ComponentIdParams = parse_args(args)?;
        let deleted = self
            .api
            .delete(&format!("api/Report/Components/{}", params.component_id))
            .await?;
        Ok(ToolResult::json(deleted))
    }
}

pub struct DownloadReportTool {
    api: Arc<CervantesClient>,
}

fn default_format() -> String {
    "pdf".to_string()
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DownloadReportParams {
    report_id: Uuid,
    #[serde(default = "default_format")]
    format: String,
}

#[async_trait]
impl Tool for DownloadReportTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new("download_report", "Download a generated report")
            .with_category("reports")
            .with_schema(json!({
                "type": "object",
                "properties": {
                    "reportId": { "type": "string", "description": "Report ID" },
                    "format": { "type": "string", "description": "Report format (pdf, docx, html)" }
                },
                "required": ["reportId"]
            }))
    }

    async fn execute(&self, args: Value) -> McpServerResult<ToolResult> {
        let params: DownloadReportParams = parse_args(args)?;
        let payload = ReportDownload {
            report_id: params.report_id,
            format: params.format,
        };
        // The file comes back as a base64 JSON string; it is handed to the
        // caller still encoded.
        let content = self
            .api
            .post::<_, String>("api/Report/Download", &payload)
            .await?;
        Ok(ToolResult::json(content))
    }
}

pub struct ImportReportTool {
    api: Arc<CervantesClient>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ImportReportParams {
    project_id: Uuid,
    import_data: String,
}

#[async_trait]
impl Tool for ImportReportTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new("import_report", "Import a report from external source")
            .with_category("reports")
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
        let params: ImportReportParams = parse_args(args)?;
        let payload = ReportImport {
            project_id: params.project_id,
            import_data: params.import_data,
        };
        let ok = self.api.post_ok("api/Report/Import", &payload).await?;
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
    fn test_report_tools_registered() {
        let tools = report_tools(api());
        assert_eq!(tools.len(), 14);
        for tool in &tools {
            assert_eq!(tool.definition().category.as_deref(), Some("reports"));
        }
    }

    #[tokio::test]
    async fn test_generate_report_rejects_out_of_range_language() {
        let tool = GenerateReportTool { api: api() };
        let result = tool
            .execute(json!({
                "name": "Q3 pentest",
                "projectId": Uuid::new_v4(),
                "language": 2
            }))
            .await;
        assert!(matches!(result, Err(McpServerError::InvalidParams(_))));
    }

    #[test]
    fn test_download_report_defaults_to_pdf() {
        let params: DownloadReportParams =
            serde_json::from_value(json!({ "reportId": Uuid::new_v4() })).unwrap();
        assert_eq!(params.format, "pdf");
    }
}
