//! MCP tools for spaces and tags.

use rmcp::{
    ErrorData as McpError, handler::server::wrapper::Parameters, model::CallToolResult, schemars,
    schemars::JsonSchema, tool, tool_router,
};
use serde::{Deserialize, Serialize};

use super::bundle_or_return;
use crate::mcp::McpServer;
use crate::mcp::envelope;
use crate::workspace::WorkspaceScope;

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct GetSpacesParams {
    #[serde(flatten)]
    pub scope: WorkspaceScope,
    #[schemars(description = "Include archived spaces (default: false)")]
    pub archived: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct SpaceIdParams {
    #[serde(flatten)]
    pub scope: WorkspaceScope,
    #[schemars(description = "Space ID")]
    pub space_id: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct TaskTagParams {
    #[serde(flatten)]
    pub scope: WorkspaceScope,
    #[schemars(description = "Task ID")]
    pub task_id: String,
    #[schemars(description = "Tag name. The tag must already exist in the task's space.")]
    pub tag_name: String,
}

#[tool_router(router = space_tools_router, vis = "pub")]
impl McpServer {
    #[tool(description = "List the spaces of a workspace.")]
    pub async fn get_spaces(
        &self,
        Parameters(params): Parameters<GetSpacesParams>,
    ) -> Result<CallToolResult, McpError> {
        let bundle = bundle_or_return!(self, &params.scope);
        Ok(envelope::respond(
            bundle.spaces.list(params.archived.unwrap_or(false)).await,
        ))
    }

    #[tool(description = "Get a space by ID, including its statuses and features.")]
    pub async fn get_space(
        &self,
        Parameters(params): Parameters<SpaceIdParams>,
    ) -> Result<CallToolResult, McpError> {
        let bundle = bundle_or_return!(self, &params.scope);
        Ok(envelope::respond(bundle.spaces.get(&params.space_id).await))
    }

    #[tool(description = "List the tags defined in a space.")]
    pub async fn get_space_tags(
        &self,
        Parameters(params): Parameters<SpaceIdParams>,
    ) -> Result<CallToolResult, McpError> {
        let bundle = bundle_or_return!(self, &params.scope);
        Ok(envelope::respond(bundle.spaces.tags(&params.space_id).await))
    }

    #[tool(description = "Add an existing space tag to a task.")]
    pub async fn add_tag_to_task(
        &self,
        Parameters(params): Parameters<TaskTagParams>,
    ) -> Result<CallToolResult, McpError> {
        let bundle = bundle_or_return!(self, &params.scope);
        Ok(envelope::respond(
            bundle
                .tasks
                .add_tag(&params.task_id, &params.tag_name)
                .await,
        ))
    }

    #[tool(description = "Remove a tag from a task. The tag stays defined in the space.")]
    pub async fn remove_tag_from_task(
        &self,
        Parameters(params): Parameters<TaskTagParams>,
    ) -> Result<CallToolResult, McpError> {
        let bundle = bundle_or_return!(self, &params.scope);
        Ok(envelope::respond(
            bundle
                .tasks
                .remove_tag(&params.task_id, &params.tag_name)
                .await,
        ))
    }
}

#[cfg(test)]
#[path = "spaces_test.rs"]
mod spaces_test;
