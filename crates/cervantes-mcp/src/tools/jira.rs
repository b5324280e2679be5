//! Jira integration tools.
//!
//! Issues are keyed by the vulnerability they track; comments by the Jira
//! issue id. The update endpoint refreshes the issue from Jira and takes no
//! payload.

use super::parse_args;
use crate::client::CervantesClient;
use crate::models::{JiraComment, JiraCommentCreate, JiraIssue, JiraIssueCreate};
use crate::server::{McpServerResult, Tool};
use crate::types::{ToolDefinition, ToolResult};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use uuid::Uuid;

/// All Jira tools bound to the shared API client.
pub fn jira_tools(api: Arc<CervantesClient>) -> Vec<Arc<dyn Tool>> {
    vec![
        Arc::new(GetJiraIssuesTool { api: api.clone() }),
        Arc::new(GetJiraIssueByVulnTool { api: api.clone() }),
        Arc::new(CreateJiraIssueTool { api: api.clone() }),
        Arc::new(UpdateJiraIssueTool { api: api.clone() }),
        Arc::new(DeleteJiraIssueTool { api: api.clone() }),
        Arc::new(GetJiraCommentsTool { api: api.clone() }),
        Arc::new(AddJiraCommentTool { api }),
    ]
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct VulnIdParams {
    vuln_id: Uuid,
}

pub struct GetJiraIssuesTool {
    api: Arc<CervantesClient>,
}

#[async_trait]
impl Tool for GetJiraIssuesTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new("get_jira_issues", "Get all Jira issues").with_category("jira")
    }

    async fn execute(&self, _args: Value) -> McpServerResult<ToolResult> {
        let issues = self
            .api
            .get::<Vec<JiraIssue>>("api/Jira")
            .await?
            .unwrap_or_default();
        Ok(ToolResult::json(issues))
    }
}

pub struct GetJiraIssueByVulnTool {
    api: Arc<CervantesClient>,
}

#[async_trait]
impl Tool for GetJiraIssueByVulnTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new(
            "get_jira_issue_by_vuln",
            "Get the Jira issue for a specific vulnerability",
        )
        .with_category("jira")
        .with_schema(json!({
            "type": "object",
            "properties": {
                "vulnId": { "type": "string", "description": "Vulnerability ID" }
            },
            "required": ["vulnId"]
        }))
    }

    async fn execute(&self, args: Value) -> McpServerResult<ToolResult> {
        let params: VulnIdParams = parse_args(args)?;
        let issue = self
            .api
            .get::<JiraIssue>(&format!("api/Jira/{}", params.vuln_id))
            .await?;
        Ok(ToolResult::json(issue))
    }
}

pub struct CreateJiraIssueTool {
    api: Arc<CervantesClient>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateJiraIssueParams {
    vuln_id: Uuid,
    name: String,
    reporter: Option<String>,
    assignee: Option<String>,
    jira_type: Option<String>,
    label: Option<String>,
}

#[async_trait]
impl Tool for CreateJiraIssueTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new("create_jira_issue", "Create a Jira issue for a vulnerability")
            .with_category("jira")
            .with_schema(json!({
                "type": "object",
                "properties": {
                    "vulnId": { "type": "string", "description": "Vulnerability ID" },
                    "name": { "type": "string", "description": "Jira issue name/summary" },
                    "reporter": { "type": "string", "description": "Jira reporter" },
                    "assignee": { "type": "string", "description": "Jira assignee" },
                    "jiraType": { "type": "string", "description": "Jira issue type" },
                    "label": { "type": "string", "description": "Jira labels" }
                },
                "required": ["vulnId", "name"]
            }))
    }

    async fn execute(&self, args: Value) -> McpServerResult<ToolResult> {
        let params: CreateJiraIssueParams = parse_args(args)?;
        let path = format!("api/Jira/{}", params.vuln_id);
        let payload = JiraIssueCreate {
            vuln_id: params.vuln_id,
            name: params.name,
            reporter: params.reporter,
            assignee: params.assignee,
            jira_type: params.jira_type,
            label: params.label,
        };
        let issue = self.api.post::<_, JiraIssue>(&path, &payload).await?;
        Ok(ToolResult::json(issue))
    }
}

pub struct UpdateJiraIssueTool {
    api: Arc<CervantesClient>,
}

#[async_trait]
impl Tool for UpdateJiraIssueTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new(
            "update_jira_issue",
            "Refresh the Jira issue for a vulnerability",
        )
        .with_category("jira")
        .with_schema(json!({
            "type": "object",
            "properties": {
                "vulnId": { "type": "string", "description": "Vulnerability ID" }
            },
            "required": ["vulnId"]
        }))
    }

    async fn execute(&self, args: Value) -> McpServerResult<ToolResult> {
        let params: VulnIdParams = parse_args(args)?;
        let ok = self
            .api
            .post_ok(
                &format!("api/Jira/UpdateIssue/{}", params.vuln_id),
                &json!({}),
            )
            .await?;
        Ok(ToolResult::json(ok))
    }
}

pub struct DeleteJiraIssueTool {
    api: Arc<CervantesClient>,
}

#[async_trait]
impl Tool for DeleteJiraIssueTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new("delete_jira_issue", "Delete the Jira issue for a vulnerability")
            .with_category("jira")
            .with_schema(json!({
                "type": "object",
                "properties": {
                    "vulnId": { "type": "string", "description": "Vulnerability ID" }
                },
                "required": ["vulnId"]
            }))
    }

    async fn execute(&self, args: Value) -> McpServerResult<ToolResult> {
        let params: VulnIdParams = parse_args(args)?;
        let deleted = self
            .api
            .delete(&format!("api/Jira?vulnId={}", params.vuln_id))
            .await?;
        Ok(ToolResult::json(deleted))
    }
}

pub struct GetJiraCommentsTool {
    api: Arc<CervantesClient>,
}

#[async_trait]
impl Tool for GetJiraCommentsTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new("get_jira_comments", "Get Jira comments for a vulnerability")
            .with_category("jira")
            .with_schema(json!({
                "type": "object",
                "properties": {
                    "vulnId": { "type": "string", "description": "Vulnerability ID" }
                },
                "required": ["vulnId"]
            }))
    }

    async fn execute(&self, args: Value) -> McpServerResult<ToolResult> {
        let params: VulnIdParams = parse_args(args)?;
        let comments = self
            .api
            .get::<Vec<JiraComment>>(&format!("api/Jira/Comments/{}", params.vuln_id))
            .await?
            .unwrap_or_default();
        Ok(ToolResult::json(comments))
    }
}

pub struct AddJiraCommentTool {
    api: Arc<CervantesClient>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AddJiraCommentParams {
    jira_id: Uuid,
    body: String,
    jira_id_comment: Option<String>,
    author: Option<String>,
    group_level: Option<String>,
    role_level: Option<String>,
}

#[async_trait]
impl Tool for AddJiraCommentTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new("add_jira_comment", "Add a comment to a Jira issue")
            .with_category("jira")
            .with_schema(json!({
                "type": "object",
                "properties": {
                    "jiraId": { "type": "string", "description": "Jira issue ID" },
                    "body": { "type": "string", "description": "Comment body" },
                    "jiraIdComment": { "type": "string", "description": "Jira comment ID" },
                    "author": { "type": "string", "description": "Comment author" },
                    "groupLevel": { "type": "string", "description": "Group level restriction" },
                    "roleLevel": { "type": "string", "description": "Role level restriction" }
                },
                "required": ["jiraId", "body"]
            }))
    }

    async fn execute(&self, args: Value) -> McpServerResult<ToolResult> {
        let params: AddJiraCommentParams = parse_args(args)?;
        let payload = JiraCommentCreate {
            jira_id: params.jira_id,
            jira_id_comment: params.jira_id_comment,
            author: params.author,
            body: params.body,
            group_level: params.group_level,
            role_level: params.role_level,
        };
        let comment = self
            .api
            .post::<_, JiraComment>("api/Jira/Comment", &payload)
            .await?;
        Ok(ToolResult::json(comment))
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
    fn test_jira_tools_registered() {
        let tools = jira_tools(api());
        assert_eq!(tools.len(), 7);
        for tool in &tools {
            assert_eq!(tool.definition().category.as_deref(), Some("jira"));
        }
    }

    #[tokio::test]
    async fn test_add_jira_comment_requires_body() {
        let tool = AddJiraCommentTool { api: api() };
        let result = tool.execute(json!({ "jiraId": Uuid::new_v4() })).await;
        assert!(matches!(result, Err(McpServerError::InvalidParams(_))));
    }
}
