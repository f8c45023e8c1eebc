//! MCP tools for lists and folders.

use rmcp::{
    ErrorData as McpError, handler::server::wrapper::Parameters, model::CallToolResult, schemars,
    schemars::JsonSchema, tool, tool_router,
};
use serde::{Deserialize, Serialize};

use super::{bundle_or_return, try_or_return};
use crate::clickup::dates::opt_millis;
use crate::clickup::lists::ListFields;
use crate::mcp::McpServer;
use crate::mcp::envelope;
use crate::workspace::WorkspaceScope;

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CreateListParams {
    #[serde(flatten)]
    pub scope: WorkspaceScope,
    #[schemars(description = "ID of the space to create the list in (outside any folder)")]
    pub space_id: String,
    #[schemars(description = "List name")]
    pub name: String,
    #[schemars(description = "List description in markdown")]
    pub content: Option<String>,
    #[schemars(description = "List status (color label)")]
    pub status: Option<String>,
    #[schemars(description = "Priority: 1 (urgent) to 4 (low)")]
    pub priority: Option<u8>,
    #[schemars(description = "Due date: RFC 3339, YYYY-MM-DD or epoch milliseconds")]
    pub due_date: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CreateListInFolderParams {
    #[serde(flatten)]
    pub scope: WorkspaceScope,
    #[schemars(description = "ID of the folder to create the list in")]
    pub folder_id: String,
    #[schemars(description = "List name")]
    pub name: String,
    #[schemars(description = "List description in markdown")]
    pub content: Option<String>,
    #[schemars(description = "List status (color label)")]
    pub status: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ListIdParams {
    #[serde(flatten)]
    pub scope: WorkspaceScope,
    #[schemars(description = "List ID")]
    pub list_id: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct UpdateListParams {
    #[serde(flatten)]
    pub scope: WorkspaceScope,
    #[schemars(description = "List ID to update")]
    pub list_id: String,
    #[schemars(description = "New name (optional)")]
    pub name: Option<String>,
    #[schemars(description = "New description in markdown (optional)")]
    pub content: Option<String>,
    #[schemars(description = "New status (optional)")]
    pub status: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CreateFolderParams {
    #[serde(flatten)]
    pub scope: WorkspaceScope,
    #[schemars(description = "ID of the space to create the folder in")]
    pub space_id: String,
    #[schemars(description = "Folder name")]
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct FolderIdParams {
    #[serde(flatten)]
    pub scope: WorkspaceScope,
    #[schemars(description = "Folder ID")]
    pub folder_id: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct UpdateFolderParams {
    #[serde(flatten)]
    pub scope: WorkspaceScope,
    #[schemars(description = "Folder ID to rename")]
    pub folder_id: String,
    #[schemars(description = "New folder name")]
    pub name: String,
}

#[tool_router(router = list_tools_router, vis = "pub")]
impl McpServer {
    #[tool(description = "Create a list directly in a space, outside any folder.")]
    pub async fn create_list(
        &self,
        Parameters(params): Parameters<CreateListParams>,
    ) -> Result<CallToolResult, McpError> {
        let bundle = bundle_or_return!(self, &params.scope);
        let fields = ListFields {
            name: Some(params.name),
            markdown_content: params.content,
            status: params.status,
            priority: params.priority,
            due_date: try_or_return!(opt_millis(params.due_date.as_deref())),
        };
        Ok(envelope::respond(
            bundle.lists.create_in_space(&params.space_id, &fields).await,
        ))
    }

    #[tool(description = "Create a list inside a folder.")]
    pub async fn create_list_in_folder(
        &self,
        Parameters(params): Parameters<CreateListInFolderParams>,
    ) -> Result<CallToolResult, McpError> {
        let bundle = bundle_or_return!(self, &params.scope);
        let fields = ListFields {
            name: Some(params.name),
            markdown_content: params.content,
            status: params.status,
            ..Default::default()
        };
        Ok(envelope::respond(
            bundle.lists.create_in_folder(&params.folder_id, &fields).await,
        ))
    }

    #[tool(description = "Get a list by ID.")]
    pub async fn get_list(
        &self,
        Parameters(params): Parameters<ListIdParams>,
    ) -> Result<CallToolResult, McpError> {
        let bundle = bundle_or_return!(self, &params.scope);
        Ok(envelope::respond(bundle.lists.get(&params.list_id).await))
    }

    #[tool(description = "Update a list's name, description or status.")]
    pub async fn update_list(
        &self,
        Parameters(params): Parameters<UpdateListParams>,
    ) -> Result<CallToolResult, McpError> {
        let bundle = bundle_or_return!(self, &params.scope);
        let fields = ListFields {
            name: params.name,
            markdown_content: params.content,
            status: params.status,
            ..Default::default()
        };
        Ok(envelope::respond(
            bundle.lists.update(&params.list_id, &fields).await,
        ))
    }

    #[tool(description = "Delete a list and every task in it.")]
    pub async fn delete_list(
        &self,
        Parameters(params): Parameters<ListIdParams>,
    ) -> Result<CallToolResult, McpError> {
        let bundle = bundle_or_return!(self, &params.scope);
        Ok(envelope::respond(bundle.lists.delete(&params.list_id).await))
    }

    #[tool(description = "Create a folder in a space.")]
    pub async fn create_folder(
        &self,
        Parameters(params): Parameters<CreateFolderParams>,
    ) -> Result<CallToolResult, McpError> {
        let bundle = bundle_or_return!(self, &params.scope);
        Ok(envelope::respond(
            bundle
                .lists
                .create_folder(&params.space_id, &params.name)
                .await,
        ))
    }

    #[tool(description = "Get a folder by ID, including its lists.")]
    pub async fn get_folder(
        &self,
        Parameters(params): Parameters<FolderIdParams>,
    ) -> Result<CallToolResult, McpError> {
        let bundle = bundle_or_return!(self, &params.scope);
        Ok(envelope::respond(
            bundle.lists.get_folder(&params.folder_id).await,
        ))
    }

    #[tool(description = "Rename a folder.")]
    pub async fn update_folder(
        &self,
        Parameters(params): Parameters<UpdateFolderParams>,
    ) -> Result<CallToolResult, McpError> {
        let bundle = bundle_or_return!(self, &params.scope);
        Ok(envelope::respond(
            bundle
                .lists
                .update_folder(&params.folder_id, &params.name)
                .await,
        ))
    }

    #[tool(description = "Delete a folder and every list in it.")]
    pub async fn delete_folder(
        &self,
        Parameters(params): Parameters<FolderIdParams>,
    ) -> Result<CallToolResult, McpError> {
        let bundle = bundle_or_return!(self, &params.scope);
        Ok(envelope::respond(
            bundle.lists.delete_folder(&params.folder_id).await,
        ))
    }
}

#[cfg(test)]
#[path = "lists_test.rs"]
mod lists_test;
