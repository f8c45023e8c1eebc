//! Shared helpers for MCP tests.

use std::sync::Arc;

use rmcp::model::{CallToolResult, RawContent};
use serde_json::{Value, json};

use super::{McpServer, ToolVisibility};
use crate::clickup::HttpBundleFactory;
use crate::config::{CredentialSource, WorkspacesBlob, credentials};
use crate::workspace::{Dispatcher, WorkspaceRegistry};

/// Two workspaces: `main` (default, token `pk_main`, team 111) and
/// `client` (token `pk_client`, team 222).
pub(crate) fn two_workspace_server(
    base_url: &str,
    visibility: &ToolVisibility,
    document_support: bool,
) -> McpServer {
    let config = credentials::load(&CredentialSource {
        api_key: None,
        team_id: None,
        workspaces: Some(WorkspacesBlob::Structured(json!({
            "default": "main",
            "workspaces": {
                "main": { "token": "pk_main", "teamId": "111", "description": "Company" },
                "client": { "token": "pk_client", "teamId": "222" }
            }
        }))),
    })
    .expect("test workspaces should load");

    let factory = HttpBundleFactory::new(base_url).expect("Failed to build HTTP client");
    let registry = Arc::new(WorkspaceRegistry::new(config, Box::new(factory)));
    McpServer::new(Dispatcher::new(registry), visibility, document_support)
}

/// Server against the mock API with every tool visible.
pub(crate) fn server(base_url: &str) -> McpServer {
    two_workspace_server(base_url, &ToolVisibility::all(), true)
}

pub(crate) fn text(result: &CallToolResult) -> &str {
    match &result.content[0].raw {
        RawContent::Text(text) => text.text.as_str(),
        _ => panic!("Expected text content"),
    }
}

/// Parse the envelope text as JSON.
pub(crate) fn body(result: &CallToolResult) -> Value {
    serde_json::from_str(text(result)).expect("Response should be valid JSON")
}

pub(crate) fn is_error(result: &CallToolResult) -> bool {
    result.is_error == Some(true)
}
