//! End-to-end tests for the Cervantes MCP tools.
//!
//! These tests run real tool invocations against a wiremock stand-in for the
//! Cervantes REST API and verify the full path: JSON-RPC dispatch, argument
//! parsing, payload shaping, authentication headers, and response rendering.

use cervantes_mcp::tools;
use cervantes_mcp::{
    ApiError, AuthMethod, CervantesClient, CervantesConfig, ContentBlock, McpError, McpRequest,
    McpServer, McpServerError, ToolResult,
};
use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{body_json, header, header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Test fixture providing a mock Cervantes instance.
struct TestFixture {
    /// Mock Cervantes server.
    server: MockServer,
}

impl TestFixture {
    /// Create a new test fixture with a mock server.
    async fn new() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// An API client with Basic credentials, pointed at the mock server.
    fn api(&self) -> Arc<CervantesClient> {
        Arc::new(CervantesClient::new(CervantesConfig {
            base_url: self.server.uri(),
            username: "admin".to_string(),
            password: "secret".to_string(),
            auth_method: AuthMethod::BasicAuth,
        }))
    }

    /// An API client without credentials.
    fn anonymous_api(&self) -> Arc<CervantesClient> {
        Arc::new(CervantesClient::new(CervantesConfig {
            base_url: self.server.uri(),
            ..Default::default()
        }))
    }

    /// A full MCP server wired to the mock Cervantes instance.
    fn mcp_server(&self) -> McpServer {
        McpServer::new("cervantes-mcp-test", "0.0.0", tools::all_tools(self.api()))
    }
}

/// Extract the text payload of a tool result.
fn result_text(result: &ToolResult) -> &str {
    match &result.content[0] {
        ContentBlock::Text { text } => text,
        other => panic!("unexpected content block: {:?}", other),
    }
}

#[tokio::test]
async fn test_create_client_round_trip() {
    let fixture = TestFixture::new().await;

    // Optional fields go over the wire as explicit nulls, not omissions.
    Mock::given(method("POST"))
        .and(path("/api/Clients"))
        .and(body_json(json!({
            "name": "Acme Corp",
            "description": null,
            "url": null,
            "contactName": null,
            "contactEmail": null,
            "contactPhone": null,
            "fileName": null,
            "fileContent": null
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "6f3f2a74-9b72-4c3e-9f39-0f6a0a3cf7af",
            "name": "Acme Corp",
            "description": null,
            "url": null,
            "contactName": null,
            "contactEmail": null,
            "contactPhone": null,
            "imagePath": null,
            "createdDate": "2024-03-01T10:00:00Z",
            "userId": null
        })))
        .expect(1)
        .mount(&fixture.server)
        .await;

    let server = fixture.mcp_server();
    let result = server
        .call_tool("create_client", json!({ "name": "Acme Corp" }))
        .await
        .unwrap();

    assert!(!result.is_error);
    let text = result_text(&result);
    assert!(text.contains("6f3f2a74-9b72-4c3e-9f39-0f6a0a3cf7af"));
    assert!(text.contains("Acme Corp"));
}

#[tokio::test]
async fn test_delete_task_reports_true() {
    let fixture = TestFixture::new().await;
    let task_id = "0a3e1c0e-9f1d-4a86-8a0e-2b3f6f1f9d40";

    Mock::given(method("DELETE"))
        .and(path(format!("/api/Task/{}", task_id)))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&fixture.server)
        .await;

    let server = fixture.mcp_server();
    let result = server
        .call_tool("delete_task", json!({ "id": task_id }))
        .await
        .unwrap();

    assert_eq!(result_text(&result), "true");
}

#[tokio::test]
async fn test_get_targets_by_project_empty_list() {
    let fixture = TestFixture::new().await;
    let project_id = "9a1de1a5-3a38-4c06-86a3-54d7cbf3c5a2";

    Mock::given(method("GET"))
        .and(path(format!("/api/Target/Project/{}", project_id)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&fixture.server)
        .await;

    let server = fixture.mcp_server();
    let result = server
        .call_tool("get_targets_by_project", json!({ "projectId": project_id }))
        .await
        .unwrap();

    assert_eq!(result_text(&result), "[]");
}

#[tokio::test]
async fn test_update_task_status_returns_updated_task() {
    let fixture = TestFixture::new().await;
    let task_id = "4b1fb0de-52b9-4a57-8c5e-09f6b7f5e561";

    Mock::given(method("POST"))
        .and(path("/api/Task/Update"))
        .and(body_json(json!({ "id": task_id, "status": 4 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": task_id,
            "name": "Port scan",
            "description": null,
            "startDate": null,
            "endDate": null,
            "status": 4,
            "projectId": null,
            "asignedUserId": null,
            "createdUserId": null,
            "template": false
        })))
        .expect(1)
        .mount(&fixture.server)
        .await;

    let server = fixture.mcp_server();
    let result = server
        .call_tool("update_task_status", json!({ "id": task_id, "status": 4 }))
        .await
        .unwrap();

    let text = result_text(&result);
    assert!(text.contains("Port scan"));
    assert!(text.contains("\"status\": 4"));
}

#[tokio::test]
async fn test_bad_attachment_base64_never_hits_api() {
    let fixture = TestFixture::new().await;

    // No HTTP call may be issued when the arguments are rejected.
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&fixture.server)
        .await;

    let server = fixture.mcp_server();
    let request = McpRequest::new("1", "tools/call").with_params(json!({
        "name": "create_client",
        "arguments": { "name": "Acme", "fileContent": "%%%not-base64%%%" }
    }));

    let response = server.handle_request(request).await;
    let error = response.error.unwrap();
    assert_eq!(error.code, McpError::INVALID_PARAMS);
}

#[tokio::test]
async fn test_api_failure_surfaces_as_error() {
    let fixture = TestFixture::new().await;
    let client_id = "6f3f2a74-9b72-4c3e-9f39-0f6a0a3cf7af";

    Mock::given(method("DELETE"))
        .and(path(format!("/api/Clients/{}", client_id)))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(1)
        .mount(&fixture.server)
        .await;

    let server = fixture.mcp_server();
    let result = server.call_tool("delete_client", json!({ "id": client_id })).await;

    // Boolean operations never report failure as `false`.
    match result {
        Err(McpServerError::Api(ApiError::Status { status, body })) => {
            assert_eq!(status, 500);
            assert_eq!(body, "boom");
        }
        other => panic!("expected status error, got: {:?}", other),
    }
}

#[tokio::test]
async fn test_basic_auth_header_attached() {
    let fixture = TestFixture::new().await;

    // base64("admin:secret")
    Mock::given(method("GET"))
        .and(path("/api/Clients"))
        .and(header("authorization", "Basic YWRtaW46c2VjcmV0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&fixture.server)
        .await;

    let server = fixture.mcp_server();
    let result = server.call_tool("get_clients", json!({})).await.unwrap();
    assert!(!result.is_error);
}

#[tokio::test]
async fn test_anonymous_client_sends_no_auth_header() {
    let fixture = TestFixture::new().await;

    Mock::given(method("GET"))
        .and(header_exists("authorization"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&fixture.server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/Clients"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&fixture.server)
        .await;

    let server = McpServer::new(
        "cervantes-mcp-test",
        "0.0.0",
        tools::all_tools(fixture.anonymous_api()),
    );
    let result = server.call_tool("get_clients", json!({})).await.unwrap();
    assert_eq!(result_text(&result), "[]");
}

#[tokio::test]
async fn test_json_rpc_round_trip() {
    let fixture = TestFixture::new().await;
    let client_id = "6f3f2a74-9b72-4c3e-9f39-0f6a0a3cf7af";

    Mock::given(method("GET"))
        .and(path(format!("/api/Clients/{}", client_id)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": client_id,
            "name": "Acme Corp"
        })))
        .mount(&fixture.server)
        .await;

    let server = fixture.mcp_server();

    let init = server.handle_request(McpRequest::new(1, "initialize")).await;
    let init_result = init.result.unwrap();
    assert_eq!(init_result["protocolVersion"], "2024-11-05");
    assert_eq!(init_result["serverInfo"]["name"], "cervantes-mcp-test");

    let list = server.handle_request(McpRequest::new(2, "tools/list")).await;
    let tools = list.result.unwrap()["tools"].as_array().unwrap().len();
    assert_eq!(tools, 107);

    let call = McpRequest::new(3, "tools/call").with_params(json!({
        "name": "get_client_by_id",
        "arguments": { "id": client_id }
    }));
    let resp = server.handle_request(call).await;
    let result = resp.result.unwrap();
    assert_eq!(result["isError"], json!(false));
    assert!(result["content"][0]["text"]
        .as_str()
        .unwrap()
        .contains("Acme Corp"));

    let unknown = server
        .handle_request(McpRequest::new(4, "resources/list"))
        .await;
    assert_eq!(unknown.error.unwrap().code, McpError::METHOD_NOT_FOUND);
}

#[tokio::test]
async fn test_unknown_tool_maps_to_method_not_found() {
    let fixture = TestFixture::new().await;
    let server = fixture.mcp_server();

    let call = McpRequest::new(5, "tools/call").with_params(json!({
        "name": "get_everything",
        "arguments": {}
    }));
    let resp = server.handle_request(call).await;

    let error = resp.error.unwrap();
    assert_eq!(error.code, McpError::METHOD_NOT_FOUND);
    assert!(error.message.contains("get_everything"));
}
