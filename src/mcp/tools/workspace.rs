//! MCP tools for workspace discovery.

use rmcp::{
    ErrorData as McpError, handler::server::wrapper::Parameters, model::CallToolResult, tool,
    tool_router,
};
use serde::Serialize;
use serde_json::Value;

use super::{ScopeOnlyParams, bundle_or_return};
use crate::clickup::workspace::render_tree;
use crate::config::CredentialMode;
use crate::mcp::McpServer;
use crate::mcp::envelope;
use crate::workspace::WorkspaceDescriptor;

#[derive(Debug, Serialize)]
struct WorkspaceListing {
    default: String,
    mode: &'static str,
    workspaces: Vec<WorkspaceDescriptor>,
}

#[tool_router(router = workspace_tools_router, vis = "pub")]
impl McpServer {
    #[tool(
        description = "List the configured ClickUp workspaces with their keys and team IDs. Pass a key as `workspace` to any other tool to target that workspace."
    )]
    pub async fn list_workspaces(&self) -> Result<CallToolResult, McpError> {
        let registry = self.dispatcher().registry();
        let mode = match registry.config().mode() {
            CredentialMode::Legacy => "single",
            CredentialMode::Multi => "multi",
        };

        Ok(envelope::ok_json(&WorkspaceListing {
            default: registry.default_key().to_string(),
            mode,
            workspaces: registry.describe(),
        }))
    }

    #[tool(
        description = "Get the space, folder and list tree of a workspace as text, with IDs. Use it to find IDs before calling other tools."
    )]
    pub async fn get_workspace_hierarchy(
        &self,
        Parameters(params): Parameters<ScopeOnlyParams>,
    ) -> Result<CallToolResult, McpError> {
        let bundle = bundle_or_return!(self, &params.scope);

        let nodes = match bundle.workspace.hierarchy().await {
            Ok(nodes) => nodes,
            Err(e) => return Ok(envelope::api_failure(&e)),
        };

        let label = format!(
            "Workspace {} (team: {})",
            bundle.workspace_key(),
            bundle.team_id()
        );
        Ok(envelope::ok(&Value::String(render_tree(&label, &nodes))))
    }

    #[tool(description = "List the members of a workspace.")]
    pub async fn get_workspace_members(
        &self,
        Parameters(params): Parameters<ScopeOnlyParams>,
    ) -> Result<CallToolResult, McpError> {
        let bundle = bundle_or_return!(self, &params.scope);
        Ok(envelope::respond(bundle.workspace.members().await))
    }
}

#[cfg(test)]
#[path = "workspace_test.rs"]
mod workspace_test;
