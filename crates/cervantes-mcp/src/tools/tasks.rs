//! Task tools.
//!
//! Two distinct update paths mirror the remote API: `update_task_status`
//! posts a status-only change to `api/Task/Update`, while `edit_task` puts
//! the full task to `api/Task`.

use super::{decode_file_content, enum_param, parse_args, parse_date};
use crate::client::CervantesClient;
use crate::models::{
    Task, TaskAttachmentAttach, TaskCreate, TaskNoteAttach, TaskStatusUpdate, TaskTargetAttach,
    TaskUpdate,
};
use crate::server::{McpServerResult, Tool};
use crate::types::{ToolDefinition, ToolResult};
use async_trait::async_trait;
use chrono::Utc;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use uuid::Uuid;

/// All task tools bound to the shared API client.
pub fn task_tools(api: Arc<CervantesClient>) -> Vec<Arc<dyn Tool>> {
    vec![
        Arc::new(GetTasksTool { api: api.clone() }),
        Arc::new(GetTaskByIdTool { api: api.clone() }),
        Arc::new(CreateTaskTool { api: api.clone() }),
        Arc::new(DeleteTaskTool { api: api.clone() }),
        Arc::new(GetTasksByProjectTool { api: api.clone() }),
        Arc::new(GetTasksByClientTool { api: api.clone() }),
        Arc::new(GetTasksByProjectUserTool { api: api.clone() }),
        Arc::new(UpdateTaskStatusTool { api: api.clone() }),
        Arc::new(EditTaskTool { api: api.clone() }),
        Arc::new(GetTaskNotesTool { api: api.clone() }),
        Arc::new(AddTaskNoteTool { api: api.clone() }),
        Arc::new(GetTaskTargetsTool { api: api.clone() }),
        Arc::new(AddTaskTargetTool { api: api.clone() }),
        Arc::new(RemoveTaskTargetTool { api: api.clone() }),
        Arc::new(GetTaskAttachmentsTool { api: api.clone() }),
        Arc::new(AddTaskAttachmentTool { api }),
    ]
}

#[derive(Deserialize)]
struct TaskIdParams {
    id: Uuid,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TaskKeyParams {
    task_id: Uuid,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProjectKeyParams {
    project_id: Uuid,
}

/// Shared scalar fields of the create and edit tools.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TaskFieldsParams {
    name: Option<String>,
    description: Option<String>,
    start_date: Option<String>,
    end_date: Option<String>,
    #[serde(default)]
    status: i32,
    #[serde(default)]
    template: bool,
    assigned_user_id: Option<String>,
    project_id: Option<Uuid>,
    client_id: Option<Uuid>,
}

impl TaskFieldsParams {
    fn into_create(self) -> McpServerResult<TaskCreate> {
        Ok(TaskCreate {
            name: self.name,
            description: self.description,
            start_date: parse_date("startDate", self.start_date.as_deref())?
                .unwrap_or_else(Utc::now),
            end_date: parse_date("endDate", self.end_date.as_deref())?,
            status: enum_param(self.status)?,
            template: self.template,
            assigned_user_id: self.assigned_user_id,
            project_id: self.project_id,
            client_id: self.client_id,
        })
    }
}

fn task_fields_schema(extra: &[(&str, Value)], required: &[&str]) -> Value {
    let mut properties = json!({
        "name": { "type": "string", "description": "Task name" },
        "description": { "type": "string", "description": "Task description" },
        "startDate": { "type": "string", "description": "Start date (ISO 8601)" },
        "endDate": { "type": "string", "description": "End date (ISO 8601)" },
        "status": { "type": "integer", "description": "Status (0=Waiting, 1=InProgress, 2=Blocked, 3=Ready, 4=Completed)" },
        "template": { "type": "boolean", "description": "Is template task" },
        "assignedUserId": { "type": "string", "description": "Assigned user ID" },
        "projectId": { "type": "string", "description": "Project ID" },
        "clientId": { "type": "string", "description": "Client ID" }
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

pub struct GetTasksTool {
    api: Arc<CervantesClient>,
}

#[async_trait]
impl Tool for GetTasksTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new("get_tasks", "Get all tasks").with_category("tasks")
    }

    async fn execute(&self, _args: Value) -> McpServerResult<ToolResult> {
        let tasks = self
            .api
            .get::<Vec<Task>>("api/Task")
            .await?
            .unwrap_or_default();
        Ok(ToolResult::json(tasks))
    }
}

pub struct GetTaskByIdTool {
    api: Arc<CervantesClient>,
}

#[async_trait]
impl Tool for GetTaskByIdTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new("get_task_by_id", "Get a specific task by ID")
            .with_category("tasks")
            .with_schema(json!({
                "type": "object",
                "properties": {
                    "id": { "type": "string", "description": "Task ID" }
                },
                "required": ["id"]
            }))
    }

    async fn execute(&self, args: Value) -> McpServerResult<ToolResult> {
        let params: TaskIdParams = parse_args(args)?;
        let task = self
            .api
            .get::<Task>(&format!("api/Task/{}", params.id))
            .await?;
        Ok(ToolResult::json(task))
    }
}

pub struct CreateTaskTool {
    api: Arc<CervantesClient>,
}

#[async_trait]
impl Tool for CreateTaskTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new("create_task", "Create a new task")
            .with_category("tasks")
            .with_schema(task_fields_schema(&[], &[]))
    }

    async fn execute(&self, args: Value) -> McpServerResult<ToolResult> {
        let params: TaskFieldsParams = parse_args(args)?;
        let payload = params.into_create()?;
        let task = self.api.post::<_, Task>("api/Task", &payload).await?;
        Ok(ToolResult::json(task))
    }
}

pub struct DeleteTaskTool {
    api: Arc<CervantesClient>,
}

#[async_trait]
impl Tool for DeleteTaskTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new("delete_task", "Delete a task")
            .with_category("tasks")
            .with_schema(json!({
                "type": "object",
                "properties": {
                    "id": { "type": "string", "description": "Task ID" }
                },
                "required": ["id"]
            }))
    }

    async fn execute(&self, args: Value) -> McpServerResult<ToolResult> {
        let params: TaskIdParams = parse_args(args)?;
        let deleted = self.api.delete(&format!("api/Task/{}", params.id)).await?;
        Ok(ToolResult::json(deleted))
    }
}

pub struct GetTasksByProjectTool {
    api: Arc<CervantesClient>,
}

#[async_trait]
impl Tool for GetTasksByProjectTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new("get_tasks_by_project", "Get tasks for a specific project")
            .with_category("tasks")
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
        let tasks = self
            .api
            .get::<Vec<Task>>(&format!("api/Task/Project/{}", params.project_id))
            .await?
            .unwrap_or_default();
        Ok(ToolResult::json(tasks))
    }
}

pub struct GetTasksByClientTool {
    api: Arc<CervantesClient>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ClientKeyParams {
    client_id: Uuid,
}

#[async_trait]
impl Tool for GetTasksByClientTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new("get_tasks_by_client", "Get tasks for a specific client")
            .with_category("tasks")
            .with_schema(json!({
                "type": "object",
                "properties": {
                    "clientId": { "type": "string", "description": "Client ID" }
                },
                "required": ["clientId"]
            }))
    }

    async fn execute(&self, args: Value) -> McpServerResult<ToolResult> {
        let params: ClientKeyParams = parse_args(args)?;
        let tasks = self
            .api
            .get::<Vec<Task>>(&format!("api/Task/Client/{}", params.client_id))
            .await?
            .unwrap_or_default();
        Ok(ToolResult::json(tasks))
    }
}

pub struct GetTasksByProjectUserTool {
    api: Arc<CervantesClient>,
}

#[async_trait]
impl Tool for GetTasksByProjectUserTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new(
            "get_tasks_by_project_user",
            "Get tasks for a project assigned to the current user",
        )
        .with_category("tasks")
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
        let tasks = self
            .api
            .get::<Vec<Task>>(&format!("api/Task/Project/{}/User", params.project_id))
            .await?
            .unwrap_or_default();
        Ok(ToolResult::json(tasks))
    }
}

pub struct UpdateTaskStatusTool {
    api: Arc<CervantesClient>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdateTaskStatusParams {
    id: Uuid,
    #[serde(default)]
    status: i32,
}

#[async_trait]
impl Tool for UpdateTaskStatusTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new("update_task_status", "Update an existing task status")
            .with_category("tasks")
            .with_schema(json!({
                "type": "object",
                "properties": {
                    "id": { "type": "string", "description": "Task ID" },
                    "status": { "type": "integer", "description": "Status (0=Waiting, 1=InProgress, 2=Blocked, 3=Ready, 4=Completed)" }
                },
                "required": ["id", "status"]
            }))
    }

    async fn execute(&self, args: Value) -> McpServerResult<ToolResult> {
        let params: UpdateTaskStatusParams = parse_args(args)?;
        let payload = TaskStatusUpdate {
            id: params.id,
            status: enum_param(params.status)?,
        };
        let task = self.api.post::<_, Task>("api/Task/Update", &payload).await?;
        Ok(ToolResult::json(task))
    }
}

pub struct EditTaskTool {
    api: Arc<CervantesClient>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct EditTaskParams {
    id: Uuid,
    #[serde(flatten)]
    fields: TaskFieldsParams,
}

#[async_trait]
impl Tool for EditTaskTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new("edit_task", "Edit a task with full details")
            .with_category("tasks")
            .with_schema(task_fields_schema(
                &[("id", json!({ "type": "string", "description": "Task ID" }))],
                &["id"],
            ))
    }

    async fn execute(&self, args: Value) -> McpServerResult<ToolResult> {
        let params: EditTaskParams = parse_args(args)?;
        let id = params.id;
        let create = params.fields.into_create()?;
        let payload = TaskUpdate {
            id,
            name: create.name,
            description: create.description,
            start_date: create.start_date,
            end_date: create.end_date,
            status: create.status,
            template: create.template,
            assigned_user_id: create.assigned_user_id,
            project_id: create.project_id,
            client_id: create.client_id,
        };
        let task = self.api.put::<_, Task>("api/Task", &payload).await?;
        Ok(ToolResult::json(task))
    }
}

pub struct GetTaskNotesTool {
    api: Arc<CervantesClient>,
}

#[async_trait]
impl Tool for GetTaskNotesTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new("get_task_notes", "Get all notes for a task")
            .with_category("tasks")
            .with_schema(json!({
                "type": "object",
                "properties": {
                    "taskId": { "type": "string", "description": "Task ID" }
                },
                "required": ["taskId"]
            }))
    }

    async fn execute(&self, args: Value) -> McpServerResult<ToolResult> {
        let params: TaskKeyParams = parse_args(args)?;
        let notes = self
            .api
            .get::<Vec<Value>>(&format!("api/Task/Notes/{}", params.task_id))
            .await?
            .unwrap_or_default();
        Ok(ToolResult::json(notes))
    }
}

pub struct AddTaskNoteTool {
    api: Arc<CervantesClient>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AddTaskNoteParams {
    task_id: Uuid,
    name: String,
    description: String,
    #[serde(default)]
    visibility: i32,
}

#[async_trait]
impl Tool for AddTaskNoteTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new("add_task_note", "Add a note to a task")
            .with_category("tasks")
            .with_schema(json!({
                "type": "object",
                "properties": {
                    "taskId": { "type": "string", "description": "Task ID" },
                    "name": { "type": "string", "description": "Note name" },
                    "description": { "type": "string", "description": "Note description" },
                    "visibility": { "type": "integer", "description": "Note visibility (0=Private, 1=Public)" }
                },
                "required": ["taskId", "name", "description"]
            }))
    }

    async fn execute(&self, args: Value) -> McpServerResult<ToolResult> {
        let params: AddTaskNoteParams = parse_args(args)?;
        let payload = TaskNoteAttach {
            task_id: params.task_id,
            name: params.name,
            description: params.description,
            visibility: enum_param(params.visibility)?,
        };
        let ok = self.api.post_ok("api/Task/Notes", &payload).await?;
        Ok(ToolResult::json(ok))
    }
}

pub struct GetTaskTargetsTool {
    api: Arc<CervantesClient>,
}

#[async_trait]
impl Tool for GetTaskTargetsTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new("get_task_targets", "Get all targets for a task")
            .with_category("tasks")
            .with_schema(json!({
                "type": "object",
                "properties": {
                    "taskId": { "type": "string", "description": "Task ID" }
                },
                "required": ["taskId"]
            }))
    }

    async fn execute(&self, args: Value) -> McpServerResult<ToolResult> {
        let params: TaskKeyParams = parse_args(args)?;
        let targets = self
            .api
            .get::<Vec<Value>>(&format!("api/Task/Targets/{}", params.task_id))
            .await?
            .unwrap_or_default();
        Ok(ToolResult::json(targets))
    }
}

pub struct AddTaskTargetTool {
    api: Arc<CervantesClient>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AddTaskTargetParams {
    task_id: Uuid,
    target_id: Uuid,
}

#[async_trait]
impl Tool for AddTaskTargetTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new("add_task_target", "Add a target to a task")
            .with_category("tasks")
            .with_schema(json!({
                "type": "object",
                "properties": {
                    "taskId": { "type": "string", "description": "Task ID" },
                    "targetId": { "type": "string", "description": "Target ID" }
                },
                "required": ["taskId", "targetId"]
            }))
    }

    async fn execute(&self, args: Value) -> McpServerResult<ToolResult> {
        let params: AddTaskTargetParams = parse_args(args)?;
        let payload = TaskTargetAttach {
            task_id: params.task_id,
            target_id: params.target_id,
        };
        let ok = self.api.post_ok("api/Task/Target", &payload).await?;
        Ok(ToolResult::json(ok))
    }
}

pub struct RemoveTaskTargetTool {
    api: Arc<CervantesClient>,
}

#[async_trait]
impl Tool for RemoveTaskTargetTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new("remove_task_target", "Remove a target from a task")
            .with_category("tasks")
            .with_schema(json!({
                "type": "object",
                "properties": {
                    "id": { "type": "string", "description": "Task target link ID" }
                },
                "required": ["id"]
            }))
    }

    async fn execute(&self, args: Value) -> McpServerResult<ToolResult> {
        let params: TaskIdParams = parse_args(args)?;
        let removed = self
            .api
            .delete(&format!("api/Task/Target/{}", params.id))
            .await?;
        Ok(ToolResult::json(removed))
    }
}

pub struct GetTaskAttachmentsTool {
    api: Arc<CervantesClient>,
}

#[async_trait]
impl Tool for GetTaskAttachmentsTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new("get_task_attachments", "Get all attachments for a task")
            .with_category("tasks")
            .with_schema(json!({
                "type": "object",
                "properties": {
                    "taskId": { "type": "string", "description": "Task ID" }
                },
                "required": ["taskId"]
            }))
    }

    async fn execute(&self, args: Value) -> McpServerResult<ToolResult> {
        let params: TaskKeyParams = parse_args(args)?;
        let attachments = self
            .api
            .get::<Vec<Value>>(&format!("api/Task/Attachments/{}", params.task_id))
            .await?
            .unwrap_or_default();
        Ok(ToolResult::json(attachments))
    }
}

pub struct AddTaskAttachmentTool {
    api: Arc<CervantesClient>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AddTaskAttachmentParams {
    task_id: Uuid,
    name: String,
    file_name: Option<String>,
    file_content: Option<String>,
}

#[async_trait]
impl Tool for AddTaskAttachmentTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new("add_task_attachment", "Add an attachment to a task")
            .with_category("tasks")
            .with_schema(json!({
                "type": "object",
                "properties": {
                    "taskId": { "type": "string", "description": "Task ID" },
                    "name": { "type": "string", "description": "Attachment name" },
                    "fileName": { "type": "string", "description": "File name" },
                    "fileContent": { "type": "string", "description": "File content, base64 encoded" }
                },
                "required": ["taskId", "name"]
            }))
    }

    async fn execute(&self, args: Value) -> McpServerResult<ToolResult> {
        let params: AddTaskAttachmentParams = parse_args(args)?;
        let file_content = params
            .file_content
            .as_deref()
            .map(|text| decode_file_content("fileContent", text))
            .transpose()?;
        let payload = TaskAttachmentAttach {
            task_id: params.task_id,
            name: params.name,
            file_name: params.file_name,
            file_content,
        };
        let ok = self.api.post_ok("api/Task/Attachments", &payload).await?;
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
    fn test_task_tools_registered() {
        let tools = task_tools(api());
        assert_eq!(tools.len(), 16);
        for tool in &tools {
            assert_eq!(tool.definition().category.as_deref(), Some("tasks"));
        }
    }

    #[tokio::test]
    async fn test_update_task_status_rejects_out_of_range() {
        let tool = UpdateTaskStatusTool { api: api() };
        let result = tool
            .execute(json!({ "id": Uuid::new_v4(), "status": 5 }))
            .await;
        assert!(matches!(result, Err(McpServerError::InvalidParams(_))));
    }

    #[tokio::test]
    async fn test_add_task_attachment_rejects_bad_base64() {
        let tool = AddTaskAttachmentTool { api: api() };
        let result = tool
            .execute(json!({
                "taskId": Uuid::new_v4(),
                "name": "scan output",
                "fileContent": "***"
            }))
            .await;
        assert!(matches!(result, Err(McpServerError::InvalidParams(_))));
    }

    #[tokio::test]
    async fn test_add_task_note_requires_description() {
        let tool = AddTaskNoteTool { api: api() };
        let result = tool
            .execute(json!({ "taskId": Uuid::new_v4(), "name": "note" }))
            .await;
        assert!(matches!(result, Err(McpServerError::InvalidParams(_))));
    }
}
