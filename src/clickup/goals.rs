//! Goal and key-result operations.

use serde::Serialize;
use serde_json::Value;

use super::client::ClickUpClient;
use super::error::ApiResult;

#[derive(Debug, Default, Clone, Serialize)]
pub struct GoalFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiple_owners: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owners: Option<Vec<u64>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct KeyResultFields {
    pub name: String,
    /// `number`, `currency`, `boolean`, `percentage` or `automatic`
    #[serde(rename = "type")]
    pub kind: String,
    pub steps_start: f64,
    pub steps_end: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    pub owners: Vec<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_ids: Option<Vec<String>>,
}

#[derive(Clone)]
pub struct GoalService {
    client: ClickUpClient,
}

impl GoalService {
    pub fn new(client: ClickUpClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, include_completed: bool) -> ApiResult<Value> {
        let request = self
            .client
            .get(&format!("/v2/team/{}/goal", self.client.team_id()))
            .query(&[("include_completed", include_completed)]);
        self.client.send(request).await
    }

    pub async fn get(&self, goal_id: &str) -> ApiResult<Value> {
        let request = self.client.get(&format!("/v2/goal/{}", goal_id));
        self.client.send(request).await
    }

    pub async fn create(&self, fields: &GoalFields) -> ApiResult<Value> {
        let request = self
            .client
            .post(&format!("/v2/team/{}/goal", self.client.team_id()))
            .json(fields);
        self.client.send(request).await
    }

    pub async fn update(&self, goal_id: &str, fields: &GoalFields) -> ApiResult<Value> {
        let request = self
            .client
            .put(&format!("/v2/goal/{}", goal_id))
            .json(fields);
        self.client.send(request).await
    }

    pub async fn delete(&self, goal_id: &str) -> ApiResult<Value> {
        let request = self.client.delete(&format!("/v2/goal/{}", goal_id));
        self.client.send(request).await
    }

    pub async fn create_key_result(
        &self,
        goal_id: &str,
        fields: &KeyResultFields,
    ) -> ApiResult<Value> {
        let request = self
            .client
            .post(&format!("/v2/goal/{}/key_result", goal_id))
            .json(fields);
        self.client.send(request).await
    }
}
