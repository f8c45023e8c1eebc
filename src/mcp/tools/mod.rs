//! MCP tool implementations
//!
//! One module per ClickUp feature. Each contributes a `#[tool_router]` block
//! on [`McpServer`](super::McpServer); the server sums them into one router.
//!
//! Every parameter struct flattens [`WorkspaceScope`], so every tool except
//! `list_workspaces` accepts an optional `workspace` key.

mod checklists;
mod documents;
mod goals;
mod lists;
mod spaces;
mod tasks;
mod time_tracking;
mod workspace;

use rmcp::{schemars, schemars::JsonSchema};
use serde::{Deserialize, Serialize};

use crate::workspace::WorkspaceScope;

pub use checklists::*;
pub use documents::*;
pub use goals::*;
pub use lists::*;
pub use spaces::*;
pub use tasks::*;
pub use time_tracking::*;

/// Parameters for tools that need nothing but the workspace.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct ScopeOnlyParams {
    #[serde(flatten)]
    pub scope: WorkspaceScope,
}

/// Unwrap a bundle lookup inside a tool, returning the error envelope early.
macro_rules! bundle_or_return {
    ($server:expr, $scope:expr) => {
        match $server.bundle($scope) {
            Ok(bundle) => bundle,
            Err(failure) => return Ok(failure),
        }
    };
}

/// Unwrap a request-building step, returning the error envelope early.
macro_rules! try_or_return {
    ($result:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => return Ok($crate::mcp::envelope::api_failure(&e)),
        }
    };
}

pub(crate) use bundle_or_return;
pub(crate) use try_or_return;
