//! Project (engagement) tools.
//!
//! Besides CRUD this family covers membership, project notes, attachments,
//! and the executive summary generator. Member, note, and attachment lists
//! come back with no documented shape and are passed through opaquely.

use super::{decode_file_content, encode_segment, enum_param, parse_args, parse_date};
use crate::client::CervantesClient;
use crate::models::{
    ExecutiveSummaryRequest, Project, ProjectAttachmentAttach, ProjectCreate, ProjectMemberAttach,
    ProjectNoteAttach, ProjectUpdate,
};
use crate::server::{McpServerResult, Tool};
use crate::types::{ToolDefinition, ToolResult};
use async_trait::async_trait;
use chrono::Utc;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use uuid::Uuid;

/// All project tools bound to the shared API client.
pub fn project_tools(api: Arc<CervantesClient>) -> Vec<Arc<dyn Tool>> {
    vec![
        Arc::new(GetProjectsTool { api: api.clone() }),
        Arc::new(GetProjectByIdTool { api: api.clone() }),
        Arc::new(CreateProjectTool { api: api.clone() }),
        Arc::new(UpdateProjectTool { api: api.clone() }),
        Arc::new(DeleteProjectTool { api: api.clone() }),
        Arc::new(GetProjectsByNameTool { api: api.clone() }),
        Arc::new(GetProjectsByClientTool { api: api.clone() }),
        Arc::new(GetProjectsByClientNameTool { api: api.clone() }),
        Arc::new(GenerateExecutiveSummaryTool { api: api.clone() }),
        Arc::new(VerifyUserAccessTool { api: api.clone() }),
        Arc::new(GetProjectMembersTool { api: api.clone() }),
        Arc::new(AddProjectMemberTool { api: api.clone() }),
        Arc::new(RemoveProjectMemberTool { api: api.clone() }),
        Arc::new(GetProjectNotesTool { api: api.clone() }),
        Arc::new(AddProjectNoteTool { api: api.clone() }),
        Arc::new(DeleteProjectNoteTool { api: api.clone() }),
        Arc::new(GetProjectAttachmentsTool { api: api.clone() }),
        Arc::new(AddProjectAttachmentTool { api: api.clone() }),
        Arc::new(DeleteProjectAttachmentTool { api }),
    ]
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProjectIdParams {
    #[serde(alias = "projectId")]
    id: Uuid,
}

fn default_status() -> i32 {
    1
}

fn default_project_type() -> i32 {
    1
}

/// Shared scalar fields of the create and update tools.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProjectFieldsParams {
    name: String,
    client_id: Uuid,
    description: Option<String>,
    start_date: Option<String>,
    end_date: Option<String>,
    #[serde(default)]
    template: bool,
    #[serde(default = "default_status")]
    status: i32,
    #[serde(default = "default_project_type")]
    project_type: i32,
    #[serde(default)]
    language: i32,
    #[serde(default)]
    score: i32,
    findings_id: Option<String>,
    #[serde(default)]
    business_impact: i32,
}

impl ProjectFieldsParams {
    fn into_create(self) -> McpServerResult<ProjectCreate> {
        Ok(ProjectCreate {
            name: self.name,
            description: self.description,
            start_date: parse_date("startDate", self.start_date.as_deref())?
                .unwrap_or_else(Utc::now),
            end_date: parse_date("endDate", self.end_date.as_deref())?,
            template: self.template,
            status: enum_param(self.status)?,
            project_type: enum_param(self.project_type)?,
            language: enum_param(self.language)?,
            client_id: self.client_id,
            score: enum_param(self.score)?,
            findings_id: self.findings_id,
            business_impact: self.business_impact,
        })
    }
}

fn project_fields_schema(extra: &[(&str, Value)], required: &[&str]) -> Value {
    let mut properties = json!({
        "name": { "type": "string", "description": "Project name" },
        "clientId": { "type": "string", "description": "Client ID" },
        "description": { "type": "string", "description": "Project description" },
        "startDate": { "type": "string", "description": "Project start date (ISO 8601)" },
        "endDate": { "type": "string", "description": "Project end date (ISO 8601)" },
        "template": { "type": "boolean", "description": "Is template project" },
        "status": { "type": "integer", "description": "Project status (0=Archived, 1=Active, 2=Waiting)" },
        "projectType": { "type": "integer", "description": "Project type (0=Internal, 1=External)" },
        "language": { "type": "integer", "description": "Project language (0=English, 1=Spanish)" },
        "score": { "type": "integer", "description": "Project score (0=Low, 1=High)" },
        "findingsId": { "type": "string", "description": "Findings ID" },
        "businessImpact": { "type": "integer", "description": "Business impact" }
    });
    for (key, value) in extra {
        properties[key] = value.clone();
    }
    json!({
        "type": "object",
        "properties": properties,
        "required": required
    })
}

pub struct GetProjectsTool {
    api: Arc<CervantesClient>,
}

#[async_trait]
impl Tool for GetProjectsTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new("get_projects", "Get all projects from Cervantes")
            .with_category("projects")
    }

    async fn execute(&self, _args: Value) -> McpServerResult<ToolResult> {
        let projects = self
            .api
            .get::<Vec<Project>>("api/Project")
            .await?
            .unwrap_or_default();
        Ok(ToolResult::json(projects))
    }
}

pub struct GetProjectByIdTool {
    api: Arc<CervantesClient>,
}

#[async_trait]
impl Tool for GetProjectByIdTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new("get_project_by_id", "Get a specific project by ID")
            .with_category("projects")
            .with_schema(json!({
                "type": "object",
                "properties": {
                    "id": { "type": "string", "description": "The project ID" }
                },
                "required": ["id"]
            }))
    }

    async fn execute(&self, args: Value) -> McpServerResult<ToolResult> {
        let params: ProjectIdParams = parse_args(args)?;
        let project = self
            .api
            .get::<Project>(&format!("api/Project/{}", params.id))
            .await?;
        Ok(ToolResult::json(project))
    }
}

pub struct CreateProjectTool {
    api: Arc<CervantesClient>,
}

#[async_trait]
impl Tool for CreateProjectTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new("create_project", "Create a new project")
            .with_category("projects")
            .with_schema(project_fields_schema(&[], &["name", "clientId"]))
    }

    async fn execute(&self, args: Value) -> McpServerResult<ToolResult> {
        let params: ProjectFieldsParams = parse_args(args)?;
        let payload = params.into_create()?;
        let project = self.api.post::<_, Project>("api/Project", &payload).await?;
        Ok(ToolResult::json(project))
    }
}

pub struct UpdateProjectTool {
    api: Arc<CervantesClient>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdateProjectParams {
    id: Uuid,
    executive_summary: Option<String>,
    #[serde(flatten)]
    fields: ProjectFieldsParams,
}

#[async_trait]
impl Tool for UpdateProjectTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new("update_project", "Update an existing project")
            .with_category("projects")
            .with_schema(project_fields_schema(
                &[
                    ("id", json!({ "type": "string", "description": "Project ID" })),
                    (
                        "executiveSummary",
                        json!({ "type": "string", "description": "Executive summary" }),
                    ),
                ],
                &["id", "name", "clientId"],
            ))
    }

    async fn execute(&self, args: Value) -> McpServerResult<ToolResult> {
        let params: UpdateProjectParams = parse_args(args)?;
        let id = params.id;
        let executive_summary = params.executive_summary;
        let create = params.fields.into_create()?;
        let payload = ProjectUpdate {
            id,
            name: create.name,
            description: create.description,
            start_date: create.start_date,
            end_date: create.end_date,
            template: create.template,
            status: create.status,
            project_type: create.project_type,
            language: create.language,
            client_id: create.client_id,
            score: create.score,
            findings_id: create.findings_id,
            business_impact: create.business_impact,
            executive_summary,
        };
        let project = self.api.put::<_, Project>("api/Project", &payload).await?;
        Ok(ToolResult::json(project))
    }
}

pub struct DeleteProjectTool {
    api: Arc<CervantesClient>,
}

#[async_trait]
impl Tool for DeleteProjectTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new("delete_project", "Delete a project")
            .with_category("projects")
            .with_schema(json!({
                "type": "object",
                "properties": {
                    "id": { "type": "string", "description": "The project ID" }
                },
                "required": ["id"]
            }))
    }

    async fn execute(&self, args: Value) -> McpServerResult<ToolResult> {
        let params: ProjectIdParams = parse_args(args)?;
        let deleted = self.api.delete(&format!("api/Project/{}", params.id)).await?;
        Ok(ToolResult::json(deleted))
    }
}

pub struct GetProjectsByNameTool {
    api: Arc<CervantesClient>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProjectNameParams {
    project_name: String,
}

#[async_trait]
impl Tool for GetProjectsByNameTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new("get_projects_by_name", "Get projects by name")
            .with_category("projects")
            .with_schema(json!({
                "type": "object",
                "properties": {
                    "projectName": { "type": "string", "description": "Project name to search for" }
                },
                "required": ["projectName"]
            }))
    }

    async fn execute(&self, args: Value) -> McpServerResult<ToolResult> {
        let params: ProjectNameParams = parse_args(args)?;
        let projects = self
            .api
            .get::<Vec<Project>>(&format!(
                "api/Project/{}",
                encode_segment(&params.project_name)
            ))
            .await?
            .unwrap_or_default();
        Ok(ToolResult::json(projects))
    }
}

pub struct GetProjectsByClientTool {
    api: Arc<CervantesClient>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ClientIdParams {
    client_id: Uuid,
}

#[async_trait]
impl Tool for GetProjectsByClientTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new(
            "get_projects_by_client",
            "Get all projects for a specific client",
        )
        .with_category("projects")
        .with_schema(json!({
            "type": "object",
            "properties": {
                "clientId": { "type": "string", "description": "Client ID" }
            },
            "required": ["clientId"]
        }))
    }

    async fn execute(&self, args: Value) -> McpServerResult<ToolResult> {
        let params: ClientIdParams = parse_args(args)?;
        let projects = self
            .api
            .get::<Vec<Project>>(&format!("api/Project/Client/{}", params.client_id))
            .await?
            .unwrap_or_default();
        Ok(ToolResult::json(projects))
    }
}

pub struct GetProjectsByClientNameTool {
    api: Arc<CervantesClient>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ClientNameParams {
    client_name: String,
}

#[async_trait]
impl Tool for GetProjectsByClientNameTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new(
            "get_projects_by_client_name",
            "Get all projects for a specific client by name",
        )
        .with_category("projects")
        .with_schema(json!({
            "type": "object",
            "properties": {
                "clientName": { "type": "string", "description": "Client name" }
            },
            "required": ["clientName"]
        }))
    }

    async fn execute(&self, args: Value) -> McpServerResult<ToolResult> {
        let params: ClientNameParams = parse_args(args)?;
        let projects = self
            .api
            .get::<Vec<Project>>(&format!(
                "api/Project/Client/{}",
                encode_segment(&params.client_name)
            ))
            .await?
            .unwrap_or_default();
        Ok(ToolResult::json(projects))
    }
}

pub struct GenerateExecutiveSummaryTool {
    api: Arc<CervantesClient>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExecutiveSummaryParams {
    project_id: Uuid,
}

#[async_trait]
impl Tool for GenerateExecutiveSummaryTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new(
            "generate_executive_summary",
            "Generate executive summary for project",
        )
        .with_category("projects")
        .with_schema(json!({
            "type": "object",
            "properties": {
                "projectId": { "type": "string", "description": "Project ID" }
            },
            "required": ["projectId"]
        }))
    }

    async fn execute(&self, args: Value) -> McpServerResult<ToolResult> {
        let params: ExecutiveSummaryParams = parse_args(args)?;
        let payload = ExecutiveSummaryRequest {
            project_id: params.project_id,
        };
        let ok = self
            .api
            .post_ok("api/Project/ExecutiveSummary", &payload)
            .await?;
        Ok(ToolResult::json(ok))
    }
}

pub struct VerifyUserAccessTool {
    api: Arc<CervantesClient>,
}

#[async_trait]
impl Tool for VerifyUserAccessTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new("verify_user_access", "Verify user access to project")
            .with_category("projects")
            .with_schema(json!({
                "type": "object",
                "properties": {
                    "projectId": { "type": "string", "description": "Project ID" }
                },
                "required": ["projectId"]
            }))
    }

    async fn execute(&self, args: Value) -> McpServerResult<ToolResult> {
        let params: ExecutiveSummaryParams = parse_args(args)?;
        // The access check answers in the body, not just the status.
        let allowed = self
            .api
            .get::<bool>(&format!("api/Project/VerifyUser/{}", params.project_id))
            .await?
            .unwrap_or(false);
        Ok(ToolResult::json(allowed))
    }
}

pub struct GetProjectMembersTool {
    api: Arc<CervantesClient>,
}

#[async_trait]
impl Tool for GetProjectMembersTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new("get_project_members", "Get all members of a project")
            .with_category("projects")
            .with_schema(json!({
                "type": "object",
                "properties": {
                    "projectId": { "type": "string", "description": "Project ID" }
                },
                "required": ["projectId"]
            }))
    }

    async fn execute(&self, args: Value) -> McpServerResult<ToolResult> {
        let params: ExecutiveSummaryParams = parse_args(args)?;
        let members = self
            .api
            .get::<Vec<Value>>(&format!("api/Project/Members/{}", params.project_id))
            .await?
            .unwrap_or_default();
        Ok(ToolResult::json(members))
    }
}

pub struct AddProjectMemberTool {
    api: Arc<CervantesClient>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AddMemberParams {
    project_id: Uuid,
    user_id: String,
}

#[async_trait]
impl Tool for AddProjectMemberTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new("add_project_member", "Add a member to a project")
            .with_category("projects")
            .with_schema(json!({
                "type": "object",
                "properties": {
                    "projectId": { "type": "string", "description": "Project ID" },
                    "userId": { "type": "string", "description": "User ID to add as member" }
                },
                "required": ["projectId", "userId"]
            }))
    }

    async fn execute(&self, args: Value) -> McpServerResult<ToolResult> {
        let params: AddMemberParams = parse_args(args)?;
        let payload = ProjectMemberAttach {
            project_id: params.project_id,
            user_id: params.user_id,
        };
        let ok = self.api.post_ok("api/Project/Member", &payload).await?;
        Ok(ToolResult::json(ok))
    }
}

pub struct RemoveProjectMemberTool {
    api: Arc<CervantesClient>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct MemberIdParams {
    member_id: Uuid,
}

#[async_trait]
impl Tool for RemoveProjectMemberTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new("remove_project_member", "Remove a member from a project")
            .with_category("projects")
            .with_schema(json!({
                "type": "object",
                "properties": {
                    "memberId": { "type": "string", "description": "Member ID to remove" }
                },
                "required": ["memberId"]
            }))
    }

    async fn execute(&self, args: Value) -> McpServerResult<ToolResult> {
        let params: MemberIdParams = parse_args(args)?;
        let removed = self
            .api
            .delete(&format!("api/Project/Member/{}", params.member_id))
            .await?;
        Ok(ToolResult::json(removed))
    }
}

pub struct GetProjectNotesTool {
    api: Arc<CervantesClient>,
}

#[async_trait]
impl Tool for GetProjectNotesTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new("get_project_notes", "Get all notes for a project")
            .with_category("projects")
            .with_schema(json!({
                "type": "object",
                "properties": {
                    "projectId": { "type": "string", "description": "Project ID" }
                },
                "required": ["projectId"]
            }))
    }

    async fn execute(&self, args: Value) -> McpServerResult<ToolResult> {
        let params: ExecutiveSummaryParams = parse_args(args)?;
        let notes = self
            .api
            .get::<Vec<Value>>(&format!("api/Project/Note/{}", params.project_id))
            .await?
            .unwrap_or_default();
        Ok(ToolResult::json(notes))
    }
}

pub struct AddProjectNoteTool {
    api: Arc<CervantesClient>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AddProjectNoteParams {
    project_id: Uuid,
    name: String,
    description: String,
    #[serde(default)]
    visibility: i32,
}

#[async_trait]
impl Tool for AddProjectNoteTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new("add_project_note", "Add a note to a project")
            .with_category("projects")
            .with_schema(json!({
                "type": "object",
                "properties": {
                    "projectId": { "type": "string", "description": "Project ID" },
                    "name": { "type": "string", "description": "Note name" },
                    "description": { "type": "string", "description": "Note content" },
                    "visibility": { "type": "integer", "description": "Visibility (0=Private, 1=Public)" }
                },
                "required": ["projectId", "name", "description"]
            }))
    }

    async fn execute(&self, args: Value) -> McpServerResult<ToolResult> {
        let params: AddProjectNoteParams = parse_args(args)?;
        let payload = ProjectNoteAttach {
            project_id: params.project_id,
            name: params.name,
            description: params.description,
            visibility: enum_param(params.visibility)?,
        };
        let ok = self.api.post_ok("api/Project/Note", &payload).await?;
        Ok(ToolResult::json(ok))
    }
}

pub struct DeleteProjectNoteTool {
    api: Arc<CervantesClient>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct NoteIdParams {
    note_id: Uuid,
}

#[async_trait]
impl Tool for DeleteProjectNoteTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new("delete_project_note", "Delete a note from a project")
            .with_category("projects")
            .with_schema(json!({
                "type": "object",
                "properties": {
                    "noteId": { "type": "string", "description": "Note ID to delete" }
                },
                "required": ["noteId"]
            }))
    }

    async fn execute(&self, args: Value) -> McpServerResult<ToolResult> {
        let params: NoteIdParams = parse_args(args)?;
        let deleted = self
            .api
            .delete(&format!("api/Project/Note/{}", params.note_id))
            .await?;
        Ok(ToolResult::json(deleted))
    }
}

pub struct GetProjectAttachmentsTool {
    api: Arc<CervantesClient>,
}

#[async_trait]
impl Tool for GetProjectAttachmentsTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new("get_project_attachments", "Get all attachments for a project")
            .with_category("projects")
            .with_schema(json!({
                "type": "object",
                "properties": {
                    "projectId": { "type": "string", "description": "Project ID" }
                },
                "required": ["projectId"]
            }))
    }

    async fn execute(&self, args: Value) -> McpServerResult<ToolResult> {
        let params: ExecutiveSummaryParams = parse_args(args)?;
        let attachments = self
            .api
            .get::<Vec<Value>>(&format!("api/Project/Attachment/{}", params.project_id))
            .await?
            .unwrap_or_default();
        Ok(ToolResult::json(attachments))
    }
}

pub struct AddProjectAttachmentTool {
    api: Arc<CervantesClient>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AddProjectAttachmentParams {
    project_id: Uuid,
    file_name: String,
    file_content: String,
}

#[async_trait]
impl Tool for AddProjectAttachmentTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new("add_project_attachment", "Add an attachment to a project")
            .with_category("projects")
            .with_schema(json!({
                "type": "object",
                "properties": {
                    "projectId": { "type": "string", "description": "Project ID" },
                    "fileName": { "type": "string", "description": "Attachment file name" },
                    "fileContent": { "type": "string", "description": "Attachment content, base64 encoded" }
                },
                "required": ["projectId", "fileName", "fileContent"]
            }))
    }

    async fn execute(&self, args: Value) -> McpServerResult<ToolResult> {
        let params: AddProjectAttachmentParams = parse_args(args)?;
        let file_content = Some(decode_file_content("fileContent", &params.file_content)?);
        let payload = ProjectAttachmentAttach {
            project_id: params.project_id,
            file_name: params.file_name,
            file_content,
        };
        let ok = self.api.post_ok("api/Project/Attachment", &payload).await?;
        Ok(ToolResult::json(ok))
    }
}

pub struct DeleteProjectAttachmentTool {
    api: Arc<CervantesClient>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AttachmentIdParams {
    attachment_id: Uuid,
}

#[async_trait]
impl Tool for DeleteProjectAttachmentTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new(
            "delete_project_attachment",
            "Delete an attachment from a project",
        )
        .with_category("projects")
        .with_schema(json!({
            "type": "object",
            "properties": {
                "attachmentId": { "type": "string", "description": "Attachment ID to delete" }
            },
            "required": ["attachmentId"]
        }))
    }

    async fn execute(&self, args: Value) -> McpServerResult<ToolResult> {
        let params: AttachmentIdParams = parse_args(args)?;
        let deleted = self
            .api
            .delete(&format!("api/Project/Attachment/{}", params.attachment_id))
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
    fn test_project_tools_registered() {
        let tools = project_tools(api());
        assert_eq!(tools.len(), 19);
        for tool in &tools {
            assert_eq!(tool.definition().category.as_deref(), Some("projects"));
        }
    }

    #[test]
    fn test_create_project_schema_defaults_documented() {
        let def = CreateProjectTool { api: api() }.definition();
        assert_eq!(def.input_schema["required"], json!(["name", "clientId"]));
        assert!(def.input_schema["properties"]["status"]["description"]
            .as_str()
            .unwrap()
            .contains("1=Active"));
    }

    #[tokio::test]
    async fn test_create_project_rejects_out_of_range_status() {
        let tool = CreateProjectTool { api: api() };
        let result = tool
            .execute(json!({
                "name": "Audit",
                "clientId": Uuid::new_v4(),
                "status": 7
            }))
            .await;
        assert!(matches!(result, Err(McpServerError::InvalidParams(_))));
    }

    #[tokio::test]
    async fn test_create_project_rejects_bad_date() {
        let tool = CreateProjectTool { api: api() };
        let result = tool
            .execute(json!({
                "name": "Audit",
                "clientId": Uuid::new_v4(),
                "startDate": "next tuesday"
            }))
            .await;
        assert!(matches!(result, Err(McpServerError::InvalidParams(_))));
    }

    #[tokio::test]
    async fn test_add_project_attachment_rejects_bad_base64() {
        let tool = AddProjectAttachmentTool { api: api() };
        let result = tool
            .execute(json!({
                "projectId": Uuid::new_v4(),
                "fileName": "scope.pdf",
                "fileContent": "!!!"
            }))
            .await;
        assert!(matches!(result, Err(McpServerError::InvalidParams(_))));
    }
}
