//! Model Context Protocol (MCP) server implementation
//!
//! This module provides the MCP server over stdio or Streamable HTTP.
//! The server exposes ClickUp tools for any number of configured workspaces.
//!
//! # Architecture
//!
//! - **server**: `McpServer`, the composed and filtered tool router
//! - **tools**: one `#[tool_router]` block per ClickUp feature
//! - **envelope**: uniform success/error tool results
//! - **visibility**: enabled/disabled tool policy, applied once at startup
//! - **service**: transport wiring

pub mod envelope;
pub mod server;
mod service;
pub mod tools;
pub mod visibility;

#[cfg(test)]
pub(crate) mod test_support;

#[cfg(test)]
mod protocol_test;
#[cfg(test)]
mod service_test;

pub use server::{DOCUMENT_TOOLS, McpServer};
pub use service::{create_mcp_service, serve_stdio};
pub use visibility::ToolVisibility;
