//! MCP server implementation
//!
//! One `McpServer` owns the composed tool router and a [`Dispatcher`]. Each
//! feature module under `tools` contributes a `#[tool_router]` block; they are
//! summed here, gated by document support, then filtered by the visibility
//! policy. What is left is exactly what clients can list and call.

use std::fmt;
use std::sync::Arc;

use rmcp::{
    ServerHandler,
    handler::server::router::tool::ToolRouter,
    model::{CallToolResult, ServerCapabilities, ServerInfo},
    tool_handler,
};
use tracing::debug;

use super::envelope;
use super::visibility::ToolVisibility;
use crate::clickup::ServiceBundle;
use crate::workspace::{Dispatcher, WorkspaceScope};

/// Tools backed by the v3 docs API, only registered with document support on.
pub const DOCUMENT_TOOLS: [&str; 7] = [
    "list_documents",
    "get_document",
    "create_document",
    "list_document_pages",
    "get_document_page",
    "create_document_page",
    "update_document_page",
];

/// Main MCP server coordinator.
///
/// Cheap to clone: clones share the dispatcher's registry, so every HTTP
/// session resolves workspaces against the same bundle cache.
#[derive(Clone)]
pub struct McpServer {
    dispatcher: Dispatcher,
    tool_router: ToolRouter<McpServer>,
}

impl McpServer {
    pub fn new(
        dispatcher: Dispatcher,
        visibility: &ToolVisibility,
        document_support: bool,
    ) -> Self {
        let mut tool_router = Self::workspace_tools_router()
            + Self::task_tools_router()
            + Self::list_tools_router()
            + Self::space_tools_router()
            + Self::goal_tools_router()
            + Self::checklist_tools_router()
            + Self::document_tools_router()
            + Self::time_tracking_tools_router();

        if !document_support {
            for name in DOCUMENT_TOOLS {
                tool_router.map.remove(name);
            }
            debug!("Document support disabled, document tools will not be registered");
        }

        visibility.apply(&mut tool_router);

        Self {
            dispatcher,
            tool_router,
        }
    }

    /// Names of the registered tools, sorted.
    pub fn tool_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .tool_router
            .map
            .keys()
            .map(|name| name.to_string())
            .collect();
        names.sort();
        names
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Bundle for the call's workspace, or the error envelope to return.
    pub(crate) fn bundle(&self, scope: &WorkspaceScope) -> Result<Arc<ServiceBundle>, CallToolResult> {
        self.dispatcher
            .for_call(scope)
            .map_err(|e| envelope::dispatch_failure(&e))
    }
}

impl fmt::Debug for McpServer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("McpServer")
            .field("workspaces", &self.dispatcher.registry().list_keys())
            .field("tools", &self.tool_router.map.len())
            .finish()
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        let registry = self.dispatcher.registry();
        let workspaces = registry.list_keys().join(", ");

        let mut info = ServerInfo::default();
        info.capabilities = ServerCapabilities::builder().enable_tools().build();
        info.server_info.name = env!("CARGO_PKG_NAME").to_string();
        info.server_info.version = env!("CARGO_PKG_VERSION").to_string();
        info.instructions = Some(format!(
            "ClickUp MCP server. Configured workspaces: {}. Default: {}. \
             Every tool except list_workspaces takes an optional `workspace` key; \
             omit it to use the default. Call list_workspaces to discover keys, \
             then get_workspace_hierarchy to find space, folder and list IDs.",
            workspaces,
            registry.default_key()
        ));
        info
    }
}
