//! Document tools.

use super::{decode_file_content, parse_args};
use crate::client::CervantesClient;
use crate::models::{Document, DocumentCreate, DocumentUpdate};
use crate::server::{McpServerResult, Tool};
use crate::types::{ToolDefinition, ToolResult};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use uuid::Uuid;

/// All document tools bound to the shared API client.
pub fn document_tools(api: Arc<CervantesClient>) -> Vec<Arc<dyn Tool>> {
    vec![
        Arc::new(GetDocumentsTool { api: api.clone() }),
        Arc::new(CreateDocumentTool { api: api.clone() }),
        Arc::new(UpdateDocumentTool { api: api.clone() }),
        Arc::new(DeleteDocumentTool { api }),
    ]
}

pub struct GetDocumentsTool {
    api: Arc<CervantesClient>,
}

#[async_trait]
impl Tool for GetDocumentsTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new("get_documents", "Get all documents").with_category("documents")
    }

    async fn execute(&self, _args: Value) -> McpServerResult<ToolResult> {
        let documents = self
            .api
            .get::<Vec<Document>>("api/Document")
            .await?
            .unwrap_or_default();
        Ok(ToolResult::json(documents))
    }
}

pub struct CreateDocumentTool {
    api: Arc<CervantesClient>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateDocumentParams {
    name: String,
    description: Option<String>,
    file_name: Option<String>,
    file_content: Option<String>,
}

#[async_trait]
impl Tool for CreateDocumentTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new("create_document", "Create a new document")
            .with_category("documents")
            .with_schema(json!({
                "type": "object",
                "properties": {
                    "name": { "type": "string", "description": "Name of the document" },
                    "description": { "type": "string", "description": "Description of the document" },
                    "fileName": { "type": "string", "description": "File name" },
                    "fileContent": { "type": "string", "description": "File content, base64 encoded" }
                },
                "required": ["name"]
            }))
    }

    async fn execute(&self, args: Value) -> McpServerResult<ToolResult> {
        let params: CreateDocumentParams = parse_args(args)?;
        let file_content = params
            .file_content
            .as_deref()
            .map(|text| decode_file_content("fileContent", text))
            .transpose()?;
        let payload = DocumentCreate {
            name: Some(params.name),
            description: params.description,
            file_name: params.file_name,
            file_content,
        };
        let document = self.api.post::<_, Document>("api/Document", &payload).await?;
        Ok(ToolResult::json(document))
    }
}

pub struct UpdateDocumentTool {
    api: Arc<CervantesClient>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdateDocumentParams {
    id: Uuid,
    name: String,
    description: Option<String>,
}

#[async_trait]
impl Tool for UpdateDocumentTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new("update_document", "Update an existing document")
            .with_category("documents")
            .with_schema(json!({
                "type": "object",
                "properties": {
                    "id": { "type": "string", "description": "Document ID" },
                    "name": { "type": "string", "description": "Name of the document" },
                    "description": { "type": "string", "description": "Description of the document" }
                },
                "required": ["id", "name"]
            }))
    }

    async fn execute(&self, args: Value) -> McpServerResult<ToolResult> {
        let params: UpdateDocumentParams = parse_args(args)?;
        let payload = DocumentUpdate {
            id: params.id,
            name: Some(params.name),
            description: params.description,
        };
        let document = self.api.put::<_, Document>("api/Document", &payload).await?;
        Ok(ToolResult::json(document))
    }
}

pub struct DeleteDocumentTool {
    api: Arc<CervantesClient>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DeleteDocumentParams {
    doc_id: Uuid,
}

#[async_trait]
impl Tool for DeleteDocumentTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new("delete_document", "Delete a document")
            .with_category("documents")
            .with_schema(json!({
                "type": "object",
                "properties": {
                    "docId": { "type": "string", "description": "Document ID" }
                },
                "required": ["docId"]
            }))
    }

    async fn execute(&self, args: Value) -> McpServerResult<ToolResult> {
        let params: DeleteDocumentParams = parse_args(args)?;
        let deleted = self
            .api
            .delete(&format!("api/Document/{}", params.doc_id))
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
    fn test_document_tools_registered() {
        let tools = document_tools(api());
        assert_eq!(tools.len(), 4);
        for tool in &tools {
            assert_eq!(tool.definition().category.as_deref(), Some("documents"));
        }
    }

    #[tokio::test]
    async fn test_create_document_rejects_bad_base64() {
        let tool = CreateDocumentTool { api: api() };
        let result = tool
            .execute(json!({ "name": "report", "fileContent": "@@@" }))
            .await;
        assert!(matches!(result, Err(McpServerError::InvalidParams(_))));
    }
}
