//! MCP tools for time tracking.

use rmcp::{
    ErrorData as McpError, handler::server::wrapper::Parameters, model::CallToolResult, schemars,
    schemars::JsonSchema, tool, tool_router,
};
use serde::{Deserialize, Serialize};

use super::{ScopeOnlyParams, bundle_or_return, try_or_return};
use crate::clickup::dates::{opt_millis, to_millis};
use crate::clickup::time_tracking::{NewTimeEntry, StartTimer, TimeEntryTag};
use crate::mcp::McpServer;
use crate::mcp::envelope;
use crate::workspace::WorkspaceScope;

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct GetTaskTimeEntriesParams {
    #[serde(flatten)]
    pub scope: WorkspaceScope,
    #[schemars(description = "Task ID")]
    pub task_id: String,
    #[schemars(description = "Only entries after this date (RFC 3339, YYYY-MM-DD or epoch ms)")]
    pub start_date: Option<String>,
    #[schemars(description = "Only entries before this date (RFC 3339, YYYY-MM-DD or epoch ms)")]
    pub end_date: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct StartTimeTrackingParams {
    #[serde(flatten)]
    pub scope: WorkspaceScope,
    #[schemars(description = "Task ID to track time on")]
    pub task_id: String,
    #[schemars(description = "What is being worked on")]
    pub description: Option<String>,
    #[schemars(description = "Mark the entry billable")]
    pub billable: Option<bool>,
    #[schemars(description = "Time entry tag names")]
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct AddTimeEntryParams {
    #[serde(flatten)]
    pub scope: WorkspaceScope,
    #[schemars(description = "Task ID the time was spent on")]
    pub task_id: String,
    #[schemars(description = "When the work started: RFC 3339, YYYY-MM-DD or epoch milliseconds")]
    pub start: String,
    #[schemars(description = "Duration in minutes")]
    pub duration_minutes: u32,
    #[schemars(description = "What was worked on")]
    pub description: Option<String>,
    #[schemars(description = "Mark the entry billable")]
    pub billable: Option<bool>,
    #[schemars(description = "Time entry tag names")]
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct DeleteTimeEntryParams {
    #[serde(flatten)]
    pub scope: WorkspaceScope,
    #[schemars(description = "Time entry ID")]
    pub timer_id: String,
}

#[tool_router(router = time_tracking_tools_router, vis = "pub")]
impl McpServer {
    #[tool(description = "List the time entries recorded on a task.")]
    pub async fn get_task_time_entries(
        &self,
        Parameters(params): Parameters<GetTaskTimeEntriesParams>,
    ) -> Result<CallToolResult, McpError> {
        let bundle = bundle_or_return!(self, &params.scope);
        let start = try_or_return!(opt_millis(params.start_date.as_deref()));
        let end = try_or_return!(opt_millis(params.end_date.as_deref()));
        Ok(envelope::respond(
            bundle
                .time_tracking
                .for_task(&params.task_id, start, end)
                .await,
        ))
    }

    #[tool(description = "Get the running timer of the authenticated user, if any.")]
    pub async fn get_current_time_entry(
        &self,
        Parameters(params): Parameters<ScopeOnlyParams>,
    ) -> Result<CallToolResult, McpError> {
        let bundle = bundle_or_return!(self, &params.scope);
        Ok(envelope::respond(bundle.time_tracking.current().await))
    }

    #[tool(description = "Start a timer on a task. Stops any timer already running.")]
    pub async fn start_time_tracking(
        &self,
        Parameters(params): Parameters<StartTimeTrackingParams>,
    ) -> Result<CallToolResult, McpError> {
        let bundle = bundle_or_return!(self, &params.scope);
        let timer = StartTimer {
            tid: params.task_id,
            description: params.description,
            billable: params.billable,
            tags: TimeEntryTag::from_names(params.tags),
        };
        Ok(envelope::respond(bundle.time_tracking.start(&timer).await))
    }

    #[tool(description = "Stop the running timer.")]
    pub async fn stop_time_tracking(
        &self,
        Parameters(params): Parameters<ScopeOnlyParams>,
    ) -> Result<CallToolResult, McpError> {
        let bundle = bundle_or_return!(self, &params.scope);
        Ok(envelope::respond(bundle.time_tracking.stop().await))
    }

    #[tool(description = "Record a finished block of time on a task.")]
    pub async fn add_time_entry(
        &self,
        Parameters(params): Parameters<AddTimeEntryParams>,
    ) -> Result<CallToolResult, McpError> {
        let bundle = bundle_or_return!(self, &params.scope);
        let entry = NewTimeEntry {
            start: try_or_return!(to_millis(&params.start)),
            duration: i64::from(params.duration_minutes) * 60_000,
            tid: params.task_id,
            description: params.description,
            billable: params.billable,
            tags: TimeEntryTag::from_names(params.tags),
        };
        Ok(envelope::respond(bundle.time_tracking.add(&entry).await))
    }

    #[tool(description = "Delete a time entry.")]
    pub async fn delete_time_entry(
        &self,
        Parameters(params): Parameters<DeleteTimeEntryParams>,
    ) -> Result<CallToolResult, McpError> {
        let bundle = bundle_or_return!(self, &params.scope);
        Ok(envelope::respond(
            bundle.time_tracking.delete(&params.timer_id).await,
        ))
    }
}

#[cfg(test)]
#[path = "time_tracking_test.rs"]
mod time_tracking_test;
