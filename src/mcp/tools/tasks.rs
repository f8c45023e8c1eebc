//! MCP tools for ClickUp tasks and task comments.

use rmcp::{
    ErrorData as McpError, handler::server::wrapper::Parameters, model::CallToolResult, schemars,
    schemars::JsonSchema, tool, tool_router,
};
use serde::{Deserialize, Serialize};

use super::{bundle_or_return, try_or_return};
use crate::clickup::ApiResult;
use crate::clickup::dates::opt_millis;
use crate::clickup::tasks::{ListTasksFilter, TaskFields, WorkspaceTasksFilter};
use crate::mcp::McpServer;
use crate::mcp::envelope;
use crate::workspace::WorkspaceScope;

// =============================================================================
// Parameter Structs
// =============================================================================

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CreateTaskParams {
    #[serde(flatten)]
    pub scope: WorkspaceScope,
    #[schemars(description = "ID of the list to create the task in")]
    pub list_id: String,
    #[schemars(description = "Task name")]
    pub name: String,
    #[schemars(description = "Task description in markdown")]
    pub description: Option<String>,
    #[schemars(description = "Status name, must exist in the list (e.g. 'to do')")]
    pub status: Option<String>,
    #[schemars(description = "Priority: 1 (urgent), 2 (high), 3 (normal), 4 (low)")]
    pub priority: Option<u8>,
    #[schemars(description = "Due date: RFC 3339, YYYY-MM-DD or epoch milliseconds")]
    pub due_date: Option<String>,
    #[schemars(description = "Start date: RFC 3339, YYYY-MM-DD or epoch milliseconds")]
    pub start_date: Option<String>,
    #[schemars(description = "Parent task ID, to create a subtask")]
    pub parent: Option<String>,
    #[schemars(description = "Tag names to apply")]
    pub tags: Option<Vec<String>>,
    #[schemars(description = "User IDs to assign")]
    pub assignees: Option<Vec<u64>>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct GetTaskParams {
    #[serde(flatten)]
    pub scope: WorkspaceScope,
    #[schemars(description = "Task ID")]
    pub task_id: String,
    #[schemars(description = "Include subtasks (default: false)")]
    pub include_subtasks: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct UpdateTaskParams {
    #[serde(flatten)]
    pub scope: WorkspaceScope,
    #[schemars(description = "Task ID to update")]
    pub task_id: String,
    #[schemars(description = "New name (optional)")]
    pub name: Option<String>,
    #[schemars(description = "New description in markdown (optional)")]
    pub description: Option<String>,
    #[schemars(description = "New status name (optional)")]
    pub status: Option<String>,
    #[schemars(description = "Priority: 1 (urgent) to 4 (low) (optional)")]
    pub priority: Option<u8>,
    #[schemars(description = "Due date: RFC 3339, YYYY-MM-DD or epoch milliseconds (optional)")]
    pub due_date: Option<String>,
    #[schemars(description = "Start date: RFC 3339, YYYY-MM-DD or epoch milliseconds (optional)")]
    pub start_date: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct TaskIdParams {
    #[serde(flatten)]
    pub scope: WorkspaceScope,
    #[schemars(description = "Task ID")]
    pub task_id: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct GetTasksParams {
    #[serde(flatten)]
    pub scope: WorkspaceScope,
    #[schemars(description = "List ID to read tasks from")]
    pub list_id: String,
    #[schemars(description = "Page number, starting at 0 (100 tasks per page)")]
    pub page: Option<u32>,
    #[schemars(description = "Include archived tasks")]
    pub archived: Option<bool>,
    #[schemars(description = "Include closed tasks")]
    pub include_closed: Option<bool>,
    #[schemars(description = "Include subtasks")]
    pub subtasks: Option<bool>,
    #[schemars(description = "Only tasks with one of these status names")]
    pub statuses: Option<Vec<String>>,
}

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct GetWorkspaceTasksParams {
    #[serde(flatten)]
    pub scope: WorkspaceScope,
    #[schemars(description = "Page number, starting at 0")]
    pub page: Option<u32>,
    #[schemars(description = "Only tasks in these lists")]
    pub list_ids: Option<Vec<String>>,
    #[schemars(description = "Only tasks in these spaces")]
    pub space_ids: Option<Vec<String>>,
    #[schemars(description = "Only tasks with one of these tags")]
    pub tags: Option<Vec<String>>,
    #[schemars(description = "Only tasks with one of these status names")]
    pub statuses: Option<Vec<String>>,
    #[schemars(description = "Only tasks assigned to these user IDs")]
    pub assignees: Option<Vec<String>>,
    #[schemars(description = "Include closed tasks")]
    pub include_closed: Option<bool>,
    #[schemars(description = "Due after this date (RFC 3339, YYYY-MM-DD or epoch ms)")]
    pub due_date_gt: Option<String>,
    #[schemars(description = "Due before this date (RFC 3339, YYYY-MM-DD or epoch ms)")]
    pub due_date_lt: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CreateTaskCommentParams {
    #[serde(flatten)]
    pub scope: WorkspaceScope,
    #[schemars(description = "Task ID to comment on")]
    pub task_id: String,
    #[schemars(description = "Comment text")]
    pub comment_text: String,
    #[schemars(description = "Notify every task watcher (default: false)")]
    pub notify_all: Option<bool>,
}

impl CreateTaskParams {
    fn fields(&self) -> ApiResult<TaskFields> {
        Ok(TaskFields {
            name: Some(self.name.clone()),
            markdown_description: self.description.clone(),
            status: self.status.clone(),
            priority: self.priority,
            due_date: opt_millis(self.due_date.as_deref())?,
            start_date: opt_millis(self.start_date.as_deref())?,
            parent: self.parent.clone(),
            tags: self.tags.clone(),
            assignees: self.assignees.clone(),
        })
    }
}

impl UpdateTaskParams {
    fn fields(&self) -> ApiResult<TaskFields> {
        Ok(TaskFields {
            name: self.name.clone(),
            markdown_description: self.description.clone(),
            status: self.status.clone(),
            priority: self.priority,
            due_date: opt_millis(self.due_date.as_deref())?,
            start_date: opt_millis(self.start_date.as_deref())?,
            ..Default::default()
        })
    }
}

impl GetWorkspaceTasksParams {
    fn filter(&self) -> ApiResult<WorkspaceTasksFilter> {
        Ok(WorkspaceTasksFilter {
            page: self.page,
            list_ids: self.list_ids.clone().unwrap_or_default(),
            space_ids: self.space_ids.clone().unwrap_or_default(),
            tags: self.tags.clone().unwrap_or_default(),
            statuses: self.statuses.clone().unwrap_or_default(),
            assignees: self.assignees.clone().unwrap_or_default(),
            include_closed: self.include_closed,
            due_date_gt: opt_millis(self.due_date_gt.as_deref())?,
            due_date_lt: opt_millis(self.due_date_lt.as_deref())?,
        })
    }
}

// =============================================================================
// Task Tools
// =============================================================================

#[tool_router(router = task_tools_router, vis = "pub")]
impl McpServer {
    #[tool(
        description = "Create a task in a list. Use get_workspace_hierarchy to find list IDs. Dates accept RFC 3339, YYYY-MM-DD or epoch milliseconds."
    )]
    pub async fn create_task(
        &self,
        Parameters(params): Parameters<CreateTaskParams>,
    ) -> Result<CallToolResult, McpError> {
        let bundle = bundle_or_return!(self, &params.scope);
        let fields = try_or_return!(params.fields());
        Ok(envelope::respond(
            bundle.tasks.create(&params.list_id, &fields).await,
        ))
    }

    #[tool(description = "Get a task by ID with its full details.")]
    pub async fn get_task(
        &self,
        Parameters(params): Parameters<GetTaskParams>,
    ) -> Result<CallToolResult, McpError> {
        let bundle = bundle_or_return!(self, &params.scope);
        Ok(envelope::respond(
            bundle
                .tasks
                .get(&params.task_id, params.include_subtasks.unwrap_or(false))
                .await,
        ))
    }

    #[tool(description = "Update a task's name, description, status, priority or dates. Unset fields are left unchanged.")]
    pub async fn update_task(
        &self,
        Parameters(params): Parameters<UpdateTaskParams>,
    ) -> Result<CallToolResult, McpError> {
        let bundle = bundle_or_return!(self, &params.scope);
        let fields = try_or_return!(params.fields());
        Ok(envelope::respond(
            bundle.tasks.update(&params.task_id, &fields).await,
        ))
    }

    #[tool(description = "Delete a task permanently.")]
    pub async fn delete_task(
        &self,
        Parameters(params): Parameters<TaskIdParams>,
    ) -> Result<CallToolResult, McpError> {
        let bundle = bundle_or_return!(self, &params.scope);
        Ok(envelope::respond(bundle.tasks.delete(&params.task_id).await))
    }

    #[tool(description = "List the tasks of a list, optionally filtered by status.")]
    pub async fn get_tasks(
        &self,
        Parameters(params): Parameters<GetTasksParams>,
    ) -> Result<CallToolResult, McpError> {
        let bundle = bundle_or_return!(self, &params.scope);
        let filter = ListTasksFilter {
            page: params.page,
            archived: params.archived,
            include_closed: params.include_closed,
            subtasks: params.subtasks,
            statuses: params.statuses.unwrap_or_default(),
        };
        Ok(envelope::respond(
            bundle.tasks.list(&params.list_id, &filter).await,
        ))
    }

    #[tool(
        description = "Search tasks across the whole workspace by list, space, tag, status, assignee or due date."
    )]
    pub async fn get_workspace_tasks(
        &self,
        Parameters(params): Parameters<GetWorkspaceTasksParams>,
    ) -> Result<CallToolResult, McpError> {
        let bundle = bundle_or_return!(self, &params.scope);
        let filter = try_or_return!(params.filter());
        Ok(envelope::respond(bundle.tasks.search_workspace(&filter).await))
    }

    #[tool(description = "Get the comments of a task.")]
    pub async fn get_task_comments(
        &self,
        Parameters(params): Parameters<TaskIdParams>,
    ) -> Result<CallToolResult, McpError> {
        let bundle = bundle_or_return!(self, &params.scope);
        Ok(envelope::respond(bundle.tasks.comments(&params.task_id).await))
    }

    #[tool(description = "Add a comment to a task.")]
    pub async fn create_task_comment(
        &self,
        Parameters(params): Parameters<CreateTaskCommentParams>,
    ) -> Result<CallToolResult, McpError> {
        let bundle = bundle_or_return!(self, &params.scope);
        Ok(envelope::respond(
            bundle
                .tasks
                .add_comment(
                    &params.task_id,
                    &params.comment_text,
                    params.notify_all.unwrap_or(false),
                )
                .await,
        ))
    }
}

#[cfg(test)]
#[path = "tasks_test.rs"]
mod tasks_test;
