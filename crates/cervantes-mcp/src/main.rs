//! Cervantes MCP server binary.
//!
//! Speaks line-delimited JSON-RPC on stdin/stdout. All logging goes to
//! stderr: stdout carries only protocol frames.

use cervantes_mcp::{tools, CervantesClient, CervantesConfig, McpError, McpRequest, McpResponse};
use cervantes_mcp::{McpServer, RequestId};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let config = CervantesConfig::from_env();
    info!("Connecting to Cervantes at {}", config.base_url);

    let api = Arc::new(CervantesClient::new(config));
    let server = McpServer::new(
        "cervantes-mcp",
        env!("CARGO_PKG_VERSION"),
        tools::all_tools(api),
    );
    info!("Registered {} tools", server.list_tools().len());

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();
    let mut lines = stdin.lines();

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let response = match serde_json::from_str::<McpRequest>(line) {
            Ok(request) => {
                debug!("Handling {}", request.method);
                server.handle_request(request).await
            }
            Err(e) => {
                error!("Failed to parse request: {}", e);
                McpResponse::error(RequestId::Null, McpError::parse_error())
            }
        };

        let mut frame = match serde_json::to_vec(&response) {
            Ok(frame) => frame,
            Err(e) => {
                // Responses are built from serializable parts; this only
                // fires if a tool smuggled a non-JSON value through.
                error!("Failed to serialize response: {}", e);
                continue;
            }
        };
        frame.push(b'\n');
        stdout.write_all(&frame).await?;
        stdout.flush().await?;
    }

    info!("stdin closed, shutting down");
    Ok(())
}
