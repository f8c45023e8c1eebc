//! Time tracking operations (workspace-scoped `time_entries` endpoints).

use serde::Serialize;
use serde_json::Value;

use super::client::ClickUpClient;
use super::error::ApiResult;

#[derive(Debug, Clone, Serialize)]
pub struct NewTimeEntry {
    pub tid: String,
    /// Epoch milliseconds
    pub start: i64,
    /// Milliseconds
    pub duration: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<TimeEntryTag>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StartTimer {
    pub tid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<TimeEntryTag>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TimeEntryTag {
    pub name: String,
}

impl TimeEntryTag {
    pub fn from_names(names: Option<Vec<String>>) -> Option<Vec<TimeEntryTag>> {
        names.map(|n| n.into_iter().map(|name| TimeEntryTag { name }).collect())
    }
}

#[derive(Clone)]
pub struct TimeTrackingService {
    client: ClickUpClient,
}

impl TimeTrackingService {
    pub fn new(client: ClickUpClient) -> Self {
        Self { client }
    }

    fn entries_path(&self) -> String {
        format!("/v2/team/{}/time_entries", self.client.team_id())
    }

    pub async fn for_task(
        &self,
        task_id: &str,
        start_date: Option<i64>,
        end_date: Option<i64>,
    ) -> ApiResult<Value> {
        let mut request = self
            .client
            .get(&self.entries_path())
            .query(&[("task_id", task_id)]);
        if let Some(start) = start_date {
            request = request.query(&[("start_date", start)]);
        }
        if let Some(end) = end_date {
            request = request.query(&[("end_date", end)]);
        }
        self.client.send(request).await
    }

    pub async fn current(&self) -> ApiResult<Value> {
        let request = self
            .client
            .get(&format!("{}/current", self.entries_path()));
        self.client.send(request).await
    }

    pub async fn start(&self, timer: &StartTimer) -> ApiResult<Value> {
        let request = self
            .client
            .post(&format!("{}/start", self.entries_path()))
            .json(timer);
        self.client.send(request).await
    }

    pub async fn stop(&self) -> ApiResult<Value> {
        let request = self.client.post(&format!("{}/stop", self.entries_path()));
        self.client.send(request).await
    }

    pub async fn add(&self, entry: &NewTimeEntry) -> ApiResult<Value> {
        let request = self.client.post(&self.entries_path()).json(entry);
        self.client.send(request).await
    }

    pub async fn delete(&self, timer_id: &str) -> ApiResult<Value> {
        let request = self
            .client
            .delete(&format!("{}/{}", self.entries_path(), timer_id));
        self.client.send(request).await
    }
}
