//! Knowledge base tools (pages and categories).

use super::parse_args;
use crate::client::CervantesClient;
use crate::models::{
    KnowledgeCategory, KnowledgeCategoryCreate, KnowledgeCategoryUpdate, KnowledgePage,
    KnowledgePageCreate, KnowledgePageUpdate,
};
use crate::server::{McpServerResult, Tool};
use crate::types::{ToolDefinition, ToolResult};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use uuid::Uuid;

/// All knowledge base tools bound to the shared API client.
pub fn knowledge_tools(api: Arc<CervantesClient>) -> Vec<Arc<dyn Tool>> {
    vec![
        Arc::new(GetKnowledgePagesTool { api: api.clone() }),
        Arc::new(CreateKnowledgePageTool { api: api.clone() }),
        Arc::new(UpdateKnowledgePageTool { api: api.clone() }),
        Arc::new(DeleteKnowledgePageTool { api: api.clone() }),
        Arc::new(GetKnowledgeCategoriesTool { api: api.clone() }),
        Arc::new(CreateKnowledgeCategoryTool { api: api.clone() }),
        Arc::new(UpdateKnowledgeCategoryTool { api: api.clone() }),
        Arc::new(DeleteKnowledgeCategoryTool { api }),
    ]
}

pub struct GetKnowledgePagesTool {
    api: Arc<CervantesClient>,
}

#[async_trait]
impl Tool for GetKnowledgePagesTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new("get_knowledge_pages", "Get all knowledge base pages")
            .with_category("knowledge")
    }

    async fn execute(&self, _args: Value) -> McpServerResult<ToolResult> {
        let pages = self
            .api
            .get::<Vec<KnowledgePage>>("api/KnowledgeBase/Page")
            .await?
            .unwrap_or_default();
        Ok(ToolResult::json(pages))
    }
}

pub struct CreateKnowledgePageTool {
    api: Arc<CervantesClient>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreatePageParams {
    title: String,
    content: String,
    category_id: Uuid,
    #[serde(default)]
    order: i32,
}

#[async_trait]
impl Tool for CreateKnowledgePageTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new("create_knowledge_page", "Create a new knowledge base page")
            .with_category("knowledge")
            .with_schema(json!({
                "type": "object",
                "properties": {
                    "title": { "type": "string", "description": "Title of the page" },
                    "content": { "type": "string", "description": "Content of the page" },
                    "categoryId": { "type": "string", "description": "Category ID" },
                    "order": { "type": "integer", "description": "Display order" }
                },
                "required": ["title", "content", "categoryId"]
            }))
    }

    async fn execute(&self, args: Value) -> McpServerResult<ToolResult> {
        let params: CreatePageParams = parse_args(args)?;
        let payload = KnowledgePageCreate {
            title: params.title,
            content: params.content,
            order: params.order,
            category_id: params.category_id,
        };
        let page = self
            .api
            .post::<_, KnowledgePage>("api/KnowledgeBase/Page", &payload)
            .await?;
        Ok(ToolResult::json(page))
    }
}

pub struct UpdateKnowledgePageTool {
    api: Arc<CervantesClient>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdatePageParams {
    id: Uuid,
    title: String,
    content: String,
    category_id: Uuid,
    #[serde(default)]
    order: i32,
}

#[async_trait]
impl Tool for UpdateKnowledgePageTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new(
            "update_knowledge_page",
            "Update an existing knowledge base page",
        )
        .with_category("knowledge")
        .with_schema(json!({
            "type": "object",
            "properties": {
                "id": { "type": "string", "description": "Page ID" },
                "title": { "type": "string", "description": "Title of the page" },
                "content": { "type": "string", "description": "Content of the page" },
                "categoryId": { "type": "string", "description": "Category ID" },
                "order": { "type": "integer", "description": "Display order" }
            },
            "required": ["id", "title", "content", "categoryId"]
        }))
    }

    async fn execute(&self, args: Value) -> McpServerResult<ToolResult> {
        let params: UpdatePageParams = parse_args(args)?;
        let payload = KnowledgePageUpdate {
            id: params.id,
            title: params.title,
            content: params.content,
            order: params.order,
            category_id: params.category_id,
        };
        let page = self
            .api
            .put::<_, KnowledgePage>("api/KnowledgeBase/Page", &payload)
            .await?;
        Ok(ToolResult::json(page))
    }
}

pub struct DeleteKnowledgePageTool {
    api: Arc<CervantesClient>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PageIdParams {
    page_id: Uuid,
}

#[async_trait]
impl Tool for DeleteKnowledgePageTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new("delete_knowledge_page", "Delete a knowledge base page")
            .with_category("knowledge")
            .with_schema(json!({
                "type": "object",
                "properties": {
                    "pageId": { "type": "string", "description": "Page ID" }
                },
                "required": ["pageId"]
            }))
    }

    async fn execute(&self, args: Value) -> McpServerResult<ToolResult> {
        let params: PageIdParams = parse_args(args)?;
        let deleted = self
            .api
            .delete(&format!("api/KnowledgeBase/Page/{}", params.page_id))
            .await?;
        Ok(ToolResult::json(deleted))
    }
}

pub struct GetKnowledgeCategoriesTool {
    api: Arc<CervantesClient>,
}

#[async_trait]
impl Tool for GetKnowledgeCategoriesTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new(
            "get_knowledge_categories",
            "Get all knowledge base categories",
        )
        .with_category("knowledge")
    }

    async fn execute(&self, _args: Value) -> McpServerResult<ToolResult> {
        let categories = self
            .api
            .get::<Vec<KnowledgeCategory>>("api/KnowledgeBase/Category")
            .await?
            .unwrap_or_default();
        Ok(ToolResult::json(categories))
    }
}

pub struct CreateKnowledgeCategoryTool {
    api: Arc<CervantesClient>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateCategoryParams {
    name: String,
    description: Option<String>,
    icon: Option<String>,
    #[serde(default)]
    order: i32,
}

#[async_trait]
impl Tool for CreateKnowledgeCategoryTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new(
            "create_knowledge_category",
            "Create a new knowledge base category",
        )
        .with_category("knowledge")
        .with_schema(json!({
            "type": "object",
            "properties": {
                "name": { "type": "string", "description": "Name of the category" },
                "description": { "type": "string", "description": "Description of the category" },
                "icon": { "type": "string", "description": "Icon for the category" },
                "order": { "type": "integer", "description": "Display order" }
            },
            "required": ["name"]
        }))
    }

    async fn execute(&self, args: Value) -> McpServerResult<ToolResult> {
        let params: CreateCategoryParams = parse_args(args)?;
        let payload = KnowledgeCategoryCreate {
            name: params.name,
            description: params.description,
            icon: params.icon,
            order: params.order,
        };
        let category = self
            .api
            .post::<_, KnowledgeCategory>("api/KnowledgeBase/Category", &payload)
            .await?;
        Ok(ToolResult::json(category))
    }
}

pub struct UpdateKnowledgeCategoryTool {
    api: Arc<CervantesClient>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdateCategoryParams {
    id: Uuid,
    name: String,
    description: Option<String>,
    icon: Option<String>,
    #[serde(default)]
    order: i32,
}

#[async_trait]
impl Tool for UpdateKnowledgeCategoryTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new(
            "update_knowledge_category",
            "Update an existing knowledge base category",
        )
        .with_category("knowledge")
        .with_schema(json!({
            "type": "object",
            "properties": {
                "id": { "type": "string", "description": "Category ID" },
                "name": { "type": "string", "description": "Name of the category" },
                "description": { "type": "string", "description": "Description of the category" },
                "icon": { "type": "string", "description": "Icon for the category" },
                "order": { "type": "integer", "description": "Display order" }
            },
            "required": ["id", "name"]
        }))
    }

    async fn execute(&self, args: Value) -> McpServerResult<ToolResult> {
        let params: UpdateCategoryParams = parse_args(args)?;
        let payload = KnowledgeCategoryUpdate {
            id: params.id,
            name: params.name,
            description: params.description,
            icon: params.icon,
            order: params.order,
        };
        let category = self
            .api
            .put::<_, KnowledgeCategory>("api/KnowledgeBase/Category", &payload)
            .await?;
        Ok(ToolResult::json(category))
    }
}

pub struct DeleteKnowledgeCategoryTool {
    api: Arc<CervantesClient>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CategoryIdParams {
    category_id: Uuid,
}

#[async_trait]
impl Tool for DeleteKnowledgeCategoryTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new(
            "delete_knowledge_category",
            "Delete a knowledge base category",
        )
        .with_category("knowledge")
        .with_schema(json!({
            "type": "object",
            "properties": {
                "categoryId": { "type": "string", "description": "Category ID" }
            },
            "required": ["categoryId"]
        }))
    }

    async fn execute(&self, args: Value) -> McpServerResult<ToolResult> {
        let params: CategoryIdParams = parse_args(args)?;
        let deleted = self
            .api
            .delete(&format!("api/KnowledgeBase/Category/{}", params.category_id))
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
    fn test_knowledge_tools_registered() {
        let tools = knowledge_tools(api());
        assert_eq!(tools.len(), 8);
        for tool in &tools {
            assert_eq!(tool.definition().category.as_deref(), Some("knowledge"));
        }
    }

    #[tokio::test]
    async fn test_create_page_requires_category() {
        let tool = CreateKnowledgePageTool { api: api() };
        let result = tool
            .execute(json!({ "title": "Recon", "content": "..." }))
            .await;
        assert!(matches!(result, Err(McpServerError::InvalidParams(_))));
    }
}
