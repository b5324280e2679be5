//! MCP server implementation
//!
//! This module provides the MCP server that exposes the Cervantes tool
//! catalog over JSON-RPC. The tool registry is built once at construction
//! and never mutated afterwards.

use crate::client::ApiError;
use crate::types::*;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

/// MCP server error types.
#[derive(Debug, Error)]
pub enum McpServerError {
    /// Tool not found
    #[error("Tool not found: {0}")]
    ToolNotFound(String),

    /// Invalid parameters
    #[error("Invalid parameters: {0}")]
    InvalidParams(String),

    /// Transport or API failure from the Cervantes backend
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type for MCP server operations.
pub type McpServerResult<T> = Result<T, McpServerError>;

/// Trait for tool implementations.
///
/// Each tool holds its own handle to the shared [`crate::CervantesClient`];
/// execution receives only the caller-supplied arguments. Cancelling an
/// invocation is done by dropping the returned future, which aborts the
/// in-flight HTTP call.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Get the tool definition.
    fn definition(&self) -> ToolDefinition;

    /// Execute the tool with given arguments.
    async fn execute(&self, args: serde_json::Value) -> McpServerResult<ToolResult>;
}

/// MCP server with a fixed tool catalog.
///
/// The registry is assembled from the tool list passed to [`McpServer::new`]
/// and is immutable for the lifetime of the server, so concurrent dispatch
/// needs no locking.
pub struct McpServer {
    /// Server info
    info: ServerInfo,

    /// Server capabilities
    capabilities: ServerCapabilities,

    /// Registered tools, keyed by name
    tools: HashMap<String, Arc<dyn Tool>>,
}

impl McpServer {
    /// Create a new MCP server with the given tool catalog.
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        tools: Vec<Arc<dyn Tool>>,
    ) -> Self {
        let tools = tools
            .into_iter()
            .map(|t| (t.definition().name, t))
            .collect();

        Self {
            info: ServerInfo {
                name: name.into(),
                version: version.into(),
            },
            capabilities: ServerCapabilities {
                tools: Some(ToolCapabilities {
                    list_changed: false,
                }),
                experimental: HashMap::new(),
            },
            tools,
        }
    }

    /// Get all tool definitions.
    pub fn list_tools(&self) -> Vec<ToolDefinition> {
        self.tools.values().map(|t| t.definition()).collect()
    }

    /// Get tools by category.
    pub fn list_tools_by_category(&self, category: &str) -> Vec<ToolDefinition> {
        self.tools
            .values()
            .map(|t| t.definition())
            .filter(|d| d.category.as_deref() == Some(category))
            .collect()
    }

    /// Execute a tool.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> McpServerResult<ToolResult> {
        let tool = self
            .tools
            .get(name)
            .ok_or_else(|| McpServerError::ToolNotFound(name.to_string()))?;

        tool.execute(arguments).await
    }

    /// Handle an MCP request.
    pub async fn handle_request(&self, request: McpRequest) -> McpResponse {
        match request.method.as_str() {
            "initialize" => self.handle_initialize(request.id),
            "tools/list" => self.handle_tools_list(request.id),
            "tools/call" => self.handle_tools_call(request.id, request.params).await,
            _ => McpResponse::error(request.id, McpError::method_not_found(&request.method)),
        }
    }

    fn handle_initialize(&self, id: RequestId) -> McpResponse {
        McpResponse::success(
            id,
            serde_json::json!({
                "protocolVersion": "2024-11-05",
                "capabilities": self.capabilities,
                "serverInfo": self.info
            }),
        )
    }

    fn handle_tools_list(&self, id: RequestId) -> McpResponse {
        let tools = self.list_tools();
        McpResponse::success(id, serde_json::json!({ "tools": tools }))
    }

    async fn handle_tools_call(
        &self,
        id: RequestId,
        params: Option<serde_json::Value>,
    ) -> McpResponse {
        let params = match params {
            Some(p) => p,
            None => return McpResponse::error(id, McpError::invalid_params("Missing params")),
        };

        let call: ToolCall = match serde_json::from_value(params) {
            Ok(c) => c,
            Err(e) => return McpResponse::error(id, McpError::invalid_params(e.to_string())),
        };

        match self.call_tool(&call.name, call.arguments).await {
            Ok(result) => match serde_json::to_value(result) {
                Ok(v) => McpResponse::success(id, v),
                Err(e) => McpResponse::error(id, McpError::internal_error(e.to_string())),
            },
            Err(McpServerError::InvalidParams(m)) => {
                McpResponse::error(id, McpError::invalid_params(m))
            }
            Err(McpServerError::ToolNotFound(name)) => McpResponse::error(
                id,
                McpError::method_not_found(&format!("tools/call: {}", name)),
            ),
            Err(e) => McpResponse::error(id, McpError::internal_error(e.to_string())),
        }
    }

    /// Get server info.
    pub fn info(&self) -> &ServerInfo {
        &self.info
    }

    /// Get server capabilities.
    pub fn capabilities(&self) -> &ServerCapabilities {
        &self.capabilities
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestTool;

    #[async_trait]
    impl Tool for TestTool {
        fn definition(&self) -> ToolDefinition {
            ToolDefinition::new("test_tool", "A test tool").with_category("test")
        }

        async fn execute(&self, _args: serde_json::Value) -> McpServerResult<ToolResult> {
            Ok(ToolResult::text("Test result"))
        }
    }

    fn test_server() -> McpServer {
        McpServer::new("cervantes-mcp-test", "0.0.0", vec![Arc::new(TestTool)])
    }

    #[tokio::test]
    async fn test_server_creation() {
        let server = test_server();
        assert_eq!(server.info().name, "cervantes-mcp-test");
        assert_eq!(server.list_tools().len(), 1);
    }

    #[tokio::test]
    async fn test_call_tool() {
        let server = test_server();

        let result = server.call_tool("test_tool", serde_json::json!({})).await;
        assert!(result.is_ok());
        assert!(!result.unwrap().is_error);
    }

    #[tokio::test]
    async fn test_call_unknown_tool() {
        let server = test_server();

        let result = server.call_tool("nope", serde_json::json!({})).await;
        assert!(matches!(result, Err(McpServerError::ToolNotFound(_))));
    }

    #[tokio::test]
    async fn test_list_by_category() {
        let server = test_server();
        assert_eq!(server.list_tools_by_category("test").len(), 1);
        assert_eq!(server.list_tools_by_category("clients").len(), 0);
    }

    #[tokio::test]
    async fn test_handle_request() {
        let server = test_server();

        let req = McpRequest::new("1", "initialize");
        let resp = server.handle_request(req).await;

        assert!(resp.result.is_some());
        assert!(resp.error.is_none());
    }

    #[tokio::test]
    async fn test_handle_unknown_method() {
        let server = test_server();

        let req = McpRequest::new("1", "resources/list");
        let resp = server.handle_request(req).await;

        assert_eq!(resp.error.unwrap().code, McpError::METHOD_NOT_FOUND);
    }
}
