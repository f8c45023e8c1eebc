//! MCP tools for goals and key results.

use rmcp::{
    ErrorData as McpError, handler::server::wrapper::Parameters, model::CallToolResult, schemars,
    schemars::JsonSchema, tool, tool_router,
};
use serde::{Deserialize, Serialize};

use super::{bundle_or_return, try_or_return};
use crate::clickup::dates::opt_millis;
use crate::clickup::goals::{GoalFields, KeyResultFields};
use crate::mcp::McpServer;
use crate::mcp::envelope;
use crate::workspace::WorkspaceScope;

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct GetGoalsParams {
    #[serde(flatten)]
    pub scope: WorkspaceScope,
    #[schemars(description = "Include completed goals (default: false)")]
    pub include_completed: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct GoalIdParams {
    #[serde(flatten)]
    pub scope: WorkspaceScope,
    #[schemars(description = "Goal ID")]
    pub goal_id: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CreateGoalParams {
    #[serde(flatten)]
    pub scope: WorkspaceScope,
    #[schemars(description = "Goal name")]
    pub name: String,
    #[schemars(description = "Goal description")]
    pub description: Option<String>,
    #[schemars(description = "Due date: RFC 3339, YYYY-MM-DD or epoch milliseconds")]
    pub due_date: Option<String>,
    #[schemars(description = "Hex color, e.g. '#32a852'")]
    pub color: Option<String>,
    #[schemars(description = "Allow more than one owner")]
    pub multiple_owners: Option<bool>,
    #[schemars(description = "Owner user IDs")]
    pub owners: Option<Vec<u64>>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct UpdateGoalParams {
    #[serde(flatten)]
    pub scope: WorkspaceScope,
    #[schemars(description = "Goal ID to update")]
    pub goal_id: String,
    #[schemars(description = "New name (optional)")]
    pub name: Option<String>,
    #[schemars(description = "New description (optional)")]
    pub description: Option<String>,
    #[schemars(description = "New due date (optional)")]
    pub due_date: Option<String>,
    #[schemars(description = "New hex color (optional)")]
    pub color: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CreateKeyResultParams {
    #[serde(flatten)]
    pub scope: WorkspaceScope,
    #[schemars(description = "Goal ID the key result belongs to")]
    pub goal_id: String,
    #[schemars(description = "Key result name")]
    pub name: String,
    #[schemars(
        description = "Kind of target: 'number', 'currency', 'boolean', 'percentage' or 'automatic'"
    )]
    #[serde(rename = "type")]
    pub kind: String,
    #[schemars(description = "Starting value")]
    pub steps_start: f64,
    #[schemars(description = "Target value")]
    pub steps_end: f64,
    #[schemars(description = "Unit label, e.g. 'km'")]
    pub unit: Option<String>,
    #[schemars(description = "Owner user IDs")]
    pub owners: Option<Vec<u64>>,
    #[schemars(description = "Task IDs tracked by an automatic key result")]
    pub task_ids: Option<Vec<String>>,
    #[schemars(description = "List IDs tracked by an automatic key result")]
    pub list_ids: Option<Vec<String>>,
}

#[tool_router(router = goal_tools_router, vis = "pub")]
impl McpServer {
    #[tool(description = "List the goals of a workspace.")]
    pub async fn get_goals(
        &self,
        Parameters(params): Parameters<GetGoalsParams>,
    ) -> Result<CallToolResult, McpError> {
        let bundle = bundle_or_return!(self, &params.scope);
        Ok(envelope::respond(
            bundle
                .goals
                .list(params.include_completed.unwrap_or(false))
                .await,
        ))
    }

    #[tool(description = "Get a goal by ID, including its key results.")]
    pub async fn get_goal(
        &self,
        Parameters(params): Parameters<GoalIdParams>,
    ) -> Result<CallToolResult, McpError> {
        let bundle = bundle_or_return!(self, &params.scope);
        Ok(envelope::respond(bundle.goals.get(&params.goal_id).await))
    }

    #[tool(description = "Create a goal.")]
    pub async fn create_goal(
        &self,
        Parameters(params): Parameters<CreateGoalParams>,
    ) -> Result<CallToolResult, McpError> {
        let bundle = bundle_or_return!(self, &params.scope);
        let fields = GoalFields {
            due_date: try_or_return!(opt_millis(params.due_date.as_deref())),
            name: Some(params.name),
            description: params.description,
            color: params.color,
            multiple_owners: params.multiple_owners,
            owners: params.owners,
        };
        Ok(envelope::respond(bundle.goals.create(&fields).await))
    }

    #[tool(description = "Update a goal's name, description, due date or color.")]
    pub async fn update_goal(
        &self,
        Parameters(params): Parameters<UpdateGoalParams>,
    ) -> Result<CallToolResult, McpError> {
        let bundle = bundle_or_return!(self, &params.scope);
        let fields = GoalFields {
            due_date: try_or_return!(opt_millis(params.due_date.as_deref())),
            name: params.name,
            description: params.description,
            color: params.color,
            ..Default::default()
        };
        Ok(envelope::respond(
            bundle.goals.update(&params.goal_id, &fields).await,
        ))
    }

    #[tool(description = "Delete a goal.")]
    pub async fn delete_goal(
        &self,
        Parameters(params): Parameters<GoalIdParams>,
    ) -> Result<CallToolResult, McpError> {
        let bundle = bundle_or_return!(self, &params.scope);
        Ok(envelope::respond(bundle.goals.delete(&params.goal_id).await))
    }

    #[tool(description = "Add a key result (target) to a goal.")]
    pub async fn create_key_result(
        &self,
        Parameters(params): Parameters<CreateKeyResultParams>,
    ) -> Result<CallToolResult, McpError> {
        let bundle = bundle_or_return!(self, &params.scope);
        let fields = KeyResultFields {
            name: params.name,
            kind: params.kind,
            steps_start: params.steps_start,
            steps_end: params.steps_end,
            unit: params.unit,
            owners: params.owners.unwrap_or_default(),
            task_ids: params.task_ids,
            list_ids: params.list_ids,
        };
        Ok(envelope::respond(
            bundle.goals.create_key_result(&params.goal_id, &fields).await,
        ))
    }
}

#[cfg(test)]
#[path = "goals_test.rs"]
mod goals_test;
