//! Cervantes MCP tools
//!
//! One module per resource family of the Cervantes API. Every tool follows
//! the same contract: arguments arrive as JSON, are shaped into a named
//! request payload or an interpolated path, and go through the shared
//! [`CervantesClient`]. List operations coalesce an empty or null upstream
//! body into an empty collection; boolean operations report failure through
//! the error path, never as `false`.

pub mod clients;
pub mod documents;
pub mod jira;
pub mod knowledge;
pub mod logs;
pub mod notes;
pub mod projects;
pub mod reports;
pub mod roles;
pub mod targets;
pub mod tasks;
pub mod users;
pub mod vaults;

pub use clients::client_tools;
pub use documents::document_tools;
pub use jira::jira_tools;
pub use knowledge::knowledge_tools;
pub use logs::log_tools;
pub use notes::note_tools;
pub use projects::project_tools;
pub use reports::report_tools;
pub use roles::role_tools;
pub use targets::target_tools;
pub use tasks::task_tools;
pub use users::user_tools;
pub use vaults::vault_tools;

use crate::client::CervantesClient;
use crate::server::{McpServerError, McpServerResult, Tool};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use chrono::{DateTime, Utc};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Get all available Cervantes tools, bound to the shared API client.
pub fn all_tools(api: Arc<CervantesClient>) -> Vec<Arc<dyn Tool>> {
    let mut tools = Vec::new();

    tools.extend(client_tools(api.clone()));
    tools.extend(project_tools(api.clone()));
    tools.extend(task_tools(api.clone()));
    tools.extend(target_tools(api.clone()));
    tools.extend(document_tools(api.clone()));
    tools.extend(vault_tools(api.clone()));
    tools.extend(note_tools(api.clone()));
    tools.extend(user_tools(api.clone()));
    tools.extend(role_tools(api.clone()));
    tools.extend(knowledge_tools(api.clone()));
    tools.extend(jira_tools(api.clone()));
    tools.extend(report_tools(api.clone()));
    tools.extend(log_tools(api));

    tools
}

/// Deserialize tool arguments into a typed params struct.
pub(crate) fn parse_args<T: DeserializeOwned>(args: serde_json::Value) -> McpServerResult<T> {
    serde_json::from_value(args).map_err(|e| McpServerError::InvalidParams(e.to_string()))
}

/// Characters escaped when a search term is interpolated into a path
/// segment: everything outside the RFC 3986 unreserved set.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Percent-encode a caller-supplied value for use as a path segment.
pub(crate) fn encode_segment(value: &str) -> String {
    utf8_percent_encode(value, PATH_SEGMENT).to_string()
}

/// Decode caller-supplied base64 file content before any network call.
///
/// Malformed input is an argument error, not a transport error.
pub(crate) fn decode_file_content(field: &str, text: &str) -> McpServerResult<Vec<u8>> {
    BASE64
        .decode(text)
        .map_err(|e| McpServerError::InvalidParams(format!("Invalid base64 in {}: {}", field, e)))
}

/// Parse an optional ISO 8601 date argument.
pub(crate) fn parse_date(field: &str, value: Option<&str>) -> McpServerResult<Option<DateTime<Utc>>> {
    match value {
        None => Ok(None),
        Some(s) if s.is_empty() => Ok(None),
        Some(s) => DateTime::parse_from_rfc3339(s)
            .map(|dt| Some(dt.with_timezone(&Utc)))
            .map_err(|e| McpServerError::InvalidParams(format!("Invalid {}: {}", field, e))),
    }
}

/// Convert an integer enum code supplied by the caller, rejecting values
/// outside the documented range.
pub(crate) fn enum_param<T>(code: i32) -> McpServerResult<T>
where
    T: TryFrom<i32, Error = String>,
{
    T::try_from(code).map_err(McpServerError::InvalidParams)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CervantesConfig;
    use crate::models::TaskStatus;
    use std::collections::HashSet;

    fn api() -> Arc<CervantesClient> {
        Arc::new(CervantesClient::new(CervantesConfig::default()))
    }

    #[test]
    fn test_all_tools_count() {
        // 7 clients + 19 projects + 16 tasks + 10 targets + 4 documents
        // + 4 vaults + 4 notes + 7 users + 6 roles + 8 knowledge + 7 jira
        // + 14 reports + 1 logs = 107 tools
        assert_eq!(all_tools(api()).len(), 107);
    }

    #[test]
    fn test_all_tools_unique_names() {
        let mut names = HashSet::new();
        for tool in all_tools(api()) {
            let def = tool.definition();
            assert!(names.insert(def.name.clone()), "Duplicate tool name: {}", def.name);
        }
    }

    #[test]
    fn test_all_tools_categorized() {
        for tool in all_tools(api()) {
            let def = tool.definition();
            assert!(def.category.is_some(), "Tool {} has no category", def.name);
            assert!(!def.description.is_empty());
        }
    }

    #[test]
    fn test_encode_segment() {
        assert_eq!(encode_segment("Acme Corp"), "Acme%20Corp");
        assert_eq!(encode_segment("a/b?c"), "a%2Fb%3Fc");
        assert_eq!(encode_segment("plain-name_1.0~x"), "plain-name_1.0~x");
    }

    #[test]
    fn test_decode_file_content() {
        assert_eq!(decode_file_content("fileContent", "aGk=").unwrap(), b"hi");
        assert!(matches!(
            decode_file_content("fileContent", "not-base64!"),
            Err(McpServerError::InvalidParams(_))
        ));
    }

    #[test]
    fn test_parse_date() {
        assert!(parse_date("startDate", None).unwrap().is_none());
        assert!(parse_date("startDate", Some("")).unwrap().is_none());
        assert!(parse_date("startDate", Some("2024-03-01T10:00:00Z"))
            .unwrap()
            .is_some());
        assert!(parse_date("startDate", Some("yesterday")).is_err());
    }

    #[test]
    fn test_enum_param() {
        assert_eq!(enum_param::<TaskStatus>(4).unwrap(), TaskStatus::Completed);
        assert!(matches!(
            enum_param::<TaskStatus>(9),
            Err(McpServerError::InvalidParams(_))
        ));
    }
}
