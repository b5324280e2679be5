//! Jira integration wire models.
//!
//! Jira issues are keyed by the vulnerability they track on most endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A tracked Jira issue.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JiraIssue {
    pub id: Uuid,
    pub vuln_id: Option<Uuid>,
    pub user_id: Option<String>,
    pub created_date: Option<DateTime<Utc>>,
    pub jira_identifier: Option<String>,
    pub jira_key: Option<String>,
    pub name: Option<String>,
    pub reporter: Option<String>,
    pub assignee: Option<String>,
    pub jira_type: Option<String>,
    pub label: Option<String>,
    pub votes: Option<i64>,
}

/// A comment on a Jira issue.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JiraComment {
    pub id: Uuid,
    pub jira_id: Option<Uuid>,
    pub jira_id_comment: Option<String>,
    pub author: Option<String>,
    pub body: Option<String>,
    pub group_level: Option<String>,
    pub role_level: Option<String>,
    pub created_date: Option<DateTime<Utc>>,
    pub update_author: Option<String>,
    pub updated_date: Option<DateTime<Utc>>,
}

/// Payload for `POST /api/Jira/{vulnId}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JiraIssueCreate {
    pub vuln_id: Uuid,
    pub name: String,
    pub reporter: Option<String>,
    pub assignee: Option<String>,
    pub jira_type: Option<String>,
    pub label: Option<String>,
}

/// Payload for `POST /api/Jira/Comment`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JiraCommentCreate {
    pub jira_id: Uuid,
    pub jira_id_comment: Option<String>,
    pub author: Option<String>,
    pub body: String,
    pub group_level: Option<String>,
    pub role_level: Option<String>,
}
