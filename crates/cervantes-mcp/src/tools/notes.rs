//! Personal note tools.

use super::parse_args;
use crate::client::CervantesClient;
use crate::models::{Note, NoteCreate, NoteUpdate};
use crate::server::{McpServerResult, Tool};
use crate::types::{ToolDefinition, ToolResult};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use uuid::Uuid;

/// All note tools bound to the shared API client.
pub fn note_tools(api: Arc<CervantesClient>) -> Vec<Arc<dyn Tool>> {
    vec![
        Arc::new(GetNotesTool { api: api.clone() }),
        Arc::new(CreateNoteTool { api: api.clone() }),
        Arc::new(UpdateNoteTool { api: api.clone() }),
        Arc::new(DeleteNoteTool { api }),
    ]
}

pub struct GetNotesTool {
    api: Arc<CervantesClient>,
}

#[async_trait]
impl Tool for GetNotesTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new("get_notes", "Get all notes").with_category("notes")
    }

    async fn execute(&self, _args: Value) -> McpServerResult<ToolResult> {
        let notes = self
            .api
            .get::<Vec<Note>>("api/Note")
            .await?
            .unwrap_or_default();
        Ok(ToolResult::json(notes))
    }
}

pub struct CreateNoteTool {
    api: Arc<CervantesClient>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateNoteParams {
    name: String,
    description: Option<String>,
}

#[async_trait]
impl Tool for CreateNoteTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new("create_note", "Create a new note")
            .with_category("notes")
            .with_schema(json!({
                "type": "object",
                "properties": {
                    "name": { "type": "string", "description": "Name of the note" },
                    "description": { "type": "string", "description": "Description/content of the note" }
                },
                "required": ["name"]
            }))
    }

    async fn execute(&self, args: Value) -> McpServerResult<ToolResult> {
        let params: CreateNoteParams = parse_args(args)?;
        let payload = NoteCreate {
            name: Some(params.name),
            description: params.description,
        };
        let note = self.api.post::<_, Note>("api/Note", &payload).await?;
        Ok(ToolResult::json(note))
    }
}

pub struct UpdateNoteTool {
    api: Arc<CervantesClient>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdateNoteParams {
    id: Uuid,
    name: String,
    description: Option<String>,
}

#[async_trait]
impl Tool for UpdateNoteTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new("update_note", "Update an existing note")
            .with_category("notes")
            .with_schema(json!({
                "type": "object",
                "properties": {
                    "id": { "type": "string", "description": "Note ID" },
                    "name": { "type": "string", "description": "Name of the note" },
                    "description": { "type": "string", "description": "Description/content of the note" }
                },
                "required": ["id", "name"]
            }))
    }

    async fn execute(&self, args: Value) -> McpServerResult<ToolResult> {
        let params: UpdateNoteParams = parse_args(args)?;
        let payload = NoteUpdate {
            id: params.id,
            name: Some(params.name),
            description: params.description,
        };
        let note = self.api.put::<_, Note>("api/Note", &payload).await?;
        Ok(ToolResult::json(note))
    }
}

pub struct DeleteNoteTool {
    api: Arc<CervantesClient>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DeleteNoteParams {
    note_id: Uuid,
}

#[async_trait]
impl Tool for DeleteNoteTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new("delete_note", "Delete a note")
            .with_category("notes")
            .with_schema(json!({
                "type": "object",
                "properties": {
                    "noteId": { "type": "string", "description": "Note ID" }
                },
                "required": ["noteId"]
            }))
    }

    async fn execute(&self, args: Value) -> McpServerResult<ToolResult> {
        let params: DeleteNoteParams = parse_args(args)?;
        let deleted = self.api.delete(&format!("api/Note/{}", params.note_id)).await?;
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
    fn test_note_tools_registered() {
        let tools = note_tools(api());
        assert_eq!(tools.len(), 4);
        for tool in &tools {
            assert_eq!(tool.definition().category.as_deref(), Some("notes"));
        }
    }

    #[tokio::test]
    async fn test_create_note_requires_name() {
        let tool = CreateNoteTool { api: api() };
        let result = tool.execute(json!({ "description": "body only" })).await;
        assert!(matches!(result, Err(McpServerError::InvalidParams(_))));
    }
}
