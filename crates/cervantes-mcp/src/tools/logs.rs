//! System log tools (read-only).

use crate::client::CervantesClient;
use crate::models::LogEntry;
use crate::server::{McpServerResult, Tool};
use crate::types::{ToolDefinition, ToolResult};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

/// All log tools bound to the shared API client.
pub fn log_tools(api: Arc<CervantesClient>) -> Vec<Arc<dyn Tool>> {
    vec![Arc::new(GetLogsTool { api })]
}

pub struct GetLogsTool {
    api: Arc<CervantesClient>,
}

#[async_trait]
impl Tool for GetLogsTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new("get_logs", "Get all system logs").with_category("logs")
    }

    async fn execute(&self, _args: Value) -> McpServerResult<ToolResult> {
        let logs = self
            .api
            .get::<Vec<LogEntry>>("api/Log")
            .await?
            .unwrap_or_default();
        Ok(ToolResult::json(logs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CervantesConfig;

    #[test]
    fn test_log_tools_registered() {
        let api = Arc::new(CervantesClient::new(CervantesConfig::default()));
        let tools = log_tools(api);
        assert_eq!(tools.len(), 1);
        assert_eq!(tools[0].definition().name, "get_logs");
    }
}
