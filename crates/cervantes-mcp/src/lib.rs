//! # Cervantes MCP
//!
//! MCP (Model Context Protocol) server bridging AI assistants to a
//! [Cervantes](https://github.com/CervantesSec) pentest management
//! instance. Every tool maps one-to-one onto an authenticated call against
//! the Cervantes REST API; the bridge holds no state of its own.
//!
//! ## Overview
//!
//! - **Protocol** ([`types`], [`server`]): JSON-RPC 2.0 types and the
//!   dispatch loop. The tool registry is fixed at construction.
//! - **Transport** ([`config`], [`client`]): one [`CervantesClient`] shared
//!   by every tool, carrying the base URL and an optional precomputed Basic
//!   Authorization header.
//! - **Models** ([`models`]): typed camelCase wire structs, integer-coded
//!   enums, base64-encoded binary content.
//! - **Tools** ([`tools`]): one module per Cervantes resource family.
//!
//! ## MCP Protocol
//!
//! Supported methods:
//! - `initialize`: initialize the MCP session
//! - `tools/list`: list available tools
//! - `tools/call`: execute a tool
//!
//! ## Tool Families
//!
//! clients, projects, tasks, targets, documents, vaults, notes, users,
//! roles, knowledge, jira, reports, logs. See [`tools::all_tools`] for the
//! full catalog.
//!
//! ## Example
//!
//! ```no_run
//! use cervantes_mcp::{tools, CervantesClient, CervantesConfig, McpServer};
//! use std::sync::Arc;
//!
//! let config = CervantesConfig::from_env();
//! let api = Arc::new(CervantesClient::new(config));
//! let server = McpServer::new("cervantes-mcp", env!("CARGO_PKG_VERSION"), tools::all_tools(api));
//! assert!(!server.list_tools().is_empty());
//! ```

pub mod client;
pub mod config;
pub mod models;
pub mod server;
pub mod tools;
pub mod types;

pub use client::{ApiError, CervantesClient};
pub use config::{AuthMethod, CervantesConfig};
pub use server::{McpServer, McpServerError, McpServerResult, Tool};
pub use types::{
    ContentBlock, McpError, McpRequest, McpResponse, RequestId, ServerCapabilities, ServerInfo,
    ToolCall, ToolDefinition, ToolResult,
};
