//! Per-call workspace dispatch.
//!
//! Every tool call goes through [`Dispatcher::for_call`] with the call's
//! [`WorkspaceScope`] to get the service bundle it should run against.

use std::sync::Arc;

use miette::Diagnostic;
use rmcp::schemars::{self, JsonSchema};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use super::registry::{WorkspaceError, WorkspaceRegistry};
use crate::clickup::ServiceBundle;

/// Workspace selector carried by every workspace-scoped tool call.
///
/// Flattened into each tool's parameters, so it shows up as a top-level
/// optional `workspace` field in every tool schema.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct WorkspaceScope {
    #[schemars(
        description = "Workspace key to run against (see list_workspaces). Omit to use the default workspace."
    )]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace: Option<String>,
}

impl WorkspaceScope {
    pub fn new(workspace: Option<&str>) -> Self {
        Self {
            workspace: workspace.map(str::to_string),
        }
    }

    pub fn default_workspace() -> Self {
        Self::default()
    }

    /// Requested key, with blank input treated as "use the default".
    pub fn key(&self) -> Option<&str> {
        self.workspace
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }
}

/// Dispatch failures. The wrapped [`WorkspaceError`] keeps the failure kind;
/// the message adds the workspaces the caller can pick from.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    #[error("{source}. Available workspaces: {}", .available.join(", "))]
    #[diagnostic(
        code(clickup_mcp::workspace::dispatch),
        help("Pass one of the available keys as `workspace`, or omit it for the default.")
    )]
    UnknownWorkspace {
        #[source]
        source: WorkspaceError,
        available: Vec<String>,
    },
}

impl DispatchError {
    /// Workspace key the caller asked for.
    pub fn requested(&self) -> &str {
        match self {
            DispatchError::UnknownWorkspace {
                source: WorkspaceError::UnknownWorkspace { key, .. },
                ..
            } => key,
        }
    }

    pub fn available(&self) -> &[String] {
        match self {
            DispatchError::UnknownWorkspace { available, .. } => available,
        }
    }
}

#[derive(Clone)]
pub struct Dispatcher {
    registry: Arc<WorkspaceRegistry>,
}

impl Dispatcher {
    pub fn new(registry: Arc<WorkspaceRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &WorkspaceRegistry {
        &self.registry
    }

    /// Service bundle for the workspace named by `scope`.
    pub fn for_call(&self, scope: &WorkspaceScope) -> Result<Arc<ServiceBundle>, DispatchError> {
        match self.registry.resolve(scope.key()) {
            Ok(bundle) => {
                debug!(workspace = bundle.workspace_key(), "Dispatching tool call");
                Ok(bundle)
            }
            Err(source @ WorkspaceError::UnknownWorkspace { .. }) => {
                let available = self.registry.list_keys();
                warn!(
                    workspace = scope.key().unwrap_or_default(),
                    "Tool call for unknown workspace"
                );
                Err(DispatchError::UnknownWorkspace { source, available })
            }
        }
    }
}

#[cfg(test)]
#[path = "dispatch_test.rs"]
mod dispatch_test;
