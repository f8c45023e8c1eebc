//! MCP tools for task checklists.

use rmcp::{
    ErrorData as McpError, handler::server::wrapper::Parameters, model::CallToolResult, schemars,
    schemars::JsonSchema, tool, tool_router,
};
use serde::{Deserialize, Serialize};

use super::bundle_or_return;
use crate::clickup::checklists::ChecklistItemFields;
use crate::mcp::McpServer;
use crate::mcp::envelope;
use crate::workspace::WorkspaceScope;

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CreateChecklistParams {
    #[serde(flatten)]
    pub scope: WorkspaceScope,
    #[schemars(description = "Task ID to add the checklist to")]
    pub task_id: String,
    #[schemars(description = "Checklist name")]
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ChecklistIdParams {
    #[serde(flatten)]
    pub scope: WorkspaceScope,
    #[schemars(description = "Checklist ID")]
    pub checklist_id: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CreateChecklistItemParams {
    #[serde(flatten)]
    pub scope: WorkspaceScope,
    #[schemars(description = "Checklist ID")]
    pub checklist_id: String,
    #[schemars(description = "Item text")]
    pub name: String,
    #[schemars(description = "User ID to assign the item to")]
    pub assignee: Option<u64>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct UpdateChecklistItemParams {
    #[serde(flatten)]
    pub scope: WorkspaceScope,
    #[schemars(description = "Checklist ID")]
    pub checklist_id: String,
    #[schemars(description = "Checklist item ID")]
    pub checklist_item_id: String,
    #[schemars(description = "New item text (optional)")]
    pub name: Option<String>,
    #[schemars(description = "New assignee user ID (optional)")]
    pub assignee: Option<u64>,
    #[schemars(description = "Mark the item done (true) or open (false)")]
    pub resolved: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ChecklistItemIdParams {
    #[serde(flatten)]
    pub scope: WorkspaceScope,
    #[schemars(description = "Checklist ID")]
    pub checklist_id: String,
    #[schemars(description = "Checklist item ID")]
    pub checklist_item_id: String,
}

#[tool_router(router = checklist_tools_router, vis = "pub")]
impl McpServer {
    #[tool(description = "Add a checklist to a task.")]
    pub async fn create_checklist(
        &self,
        Parameters(params): Parameters<CreateChecklistParams>,
    ) -> Result<CallToolResult, McpError> {
        let bundle = bundle_or_return!(self, &params.scope);
        Ok(envelope::respond(
            bundle
                .checklists
                .create(&params.task_id, &params.name)
                .await,
        ))
    }

    #[tool(description = "Delete a checklist and its items.")]
    pub async fn delete_checklist(
        &self,
        Parameters(params): Parameters<ChecklistIdParams>,
    ) -> Result<CallToolResult, McpError> {
        let bundle = bundle_or_return!(self, &params.scope);
        Ok(envelope::respond(
            bundle.checklists.delete(&params.checklist_id).await,
        ))
    }

    #[tool(description = "Add an item to a checklist.")]
    pub async fn create_checklist_item(
        &self,
        Parameters(params): Parameters<CreateChecklistItemParams>,
    ) -> Result<CallToolResult, McpError> {
        let bundle = bundle_or_return!(self, &params.scope);
        let fields = ChecklistItemFields {
            name: Some(params.name),
            assignee: params.assignee,
            resolved: None,
        };
        Ok(envelope::respond(
            bundle
                .checklists
                .create_item(&params.checklist_id, &fields)
                .await,
        ))
    }

    #[tool(description = "Rename, reassign or resolve a checklist item.")]
    pub async fn update_checklist_item(
        &self,
        Parameters(params): Parameters<UpdateChecklistItemParams>,
    ) -> Result<CallToolResult, McpError> {
        let bundle = bundle_or_return!(self, &params.scope);
        let fields = ChecklistItemFields {
            name: params.name,
            assignee: params.assignee,
            resolved: params.resolved,
        };
        Ok(envelope::respond(
            bundle
                .checklists
                .update_item(&params.checklist_id, &params.checklist_item_id, &fields)
                .await,
        ))
    }

    #[tool(description = "Delete a checklist item.")]
    pub async fn delete_checklist_item(
        &self,
        Parameters(params): Parameters<ChecklistItemIdParams>,
    ) -> Result<CallToolResult, McpError> {
        let bundle = bundle_or_return!(self, &params.scope);
        Ok(envelope::respond(
            bundle
                .checklists
                .delete_item(&params.checklist_id, &params.checklist_item_id)
                .await,
        ))
    }
}

#[cfg(test)]
#[path = "checklists_test.rs"]
mod checklists_test;
