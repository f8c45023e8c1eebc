//! Task operations.

use serde::Serialize;
use serde_json::{Value, json};

use super::client::ClickUpClient;
use super::error::ApiResult;

/// Writable task fields. Unset fields are left out of the request body.
#[derive(Debug, Default, Clone, Serialize)]
pub struct TaskFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub markdown_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignees: Option<Vec<u64>>,
}

/// Filters for listing the tasks of one list.
#[derive(Debug, Default, Clone)]
pub struct ListTasksFilter {
    pub page: Option<u32>,
    pub archived: Option<bool>,
    pub include_closed: Option<bool>,
    pub subtasks: Option<bool>,
    pub statuses: Vec<String>,
}

/// Filters for searching tasks across the whole workspace.
#[derive(Debug, Default, Clone)]
pub struct WorkspaceTasksFilter {
    pub page: Option<u32>,
    pub list_ids: Vec<String>,
    pub space_ids: Vec<String>,
    pub tags: Vec<String>,
    pub statuses: Vec<String>,
    pub assignees: Vec<String>,
    pub include_closed: Option<bool>,
    pub due_date_gt: Option<i64>,
    pub due_date_lt: Option<i64>,
}

fn push_flag(query: &mut Vec<(String, String)>, key: &str, value: Option<impl ToString>) {
    if let Some(v) = value {
        query.push((key.to_string(), v.to_string()));
    }
}

fn push_array(query: &mut Vec<(String, String)>, key: &str, values: &[String]) {
    for v in values {
        query.push((format!("{}[]", key), v.clone()));
    }
}

impl ListTasksFilter {
    fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        push_flag(&mut query, "page", self.page);
        push_flag(&mut query, "archived", self.archived);
        push_flag(&mut query, "include_closed", self.include_closed);
        push_flag(&mut query, "subtasks", self.subtasks);
        push_array(&mut query, "statuses", &self.statuses);
        query
    }
}

impl WorkspaceTasksFilter {
    fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        push_flag(&mut query, "page", self.page);
        push_array(&mut query, "list_ids", &self.list_ids);
        push_array(&mut query, "space_ids", &self.space_ids);
        push_array(&mut query, "tags", &self.tags);
        push_array(&mut query, "statuses", &self.statuses);
        push_array(&mut query, "assignees", &self.assignees);
        push_flag(&mut query, "include_closed", self.include_closed);
        push_flag(&mut query, "due_date_gt", self.due_date_gt);
        push_flag(&mut query, "due_date_lt", self.due_date_lt);
        query
    }
}

#[derive(Clone)]
pub struct TaskService {
    client: ClickUpClient,
}

impl TaskService {
    pub fn new(client: ClickUpClient) -> Self {
        Self { client }
    }

    pub async fn create(&self, list_id: &str, fields: &TaskFields) -> ApiResult<Value> {
        let request = self
            .client
            .post(&format!("/v2/list/{}/task", list_id))
            .json(fields);
        self.client.send(request).await
    }

    pub async fn get(&self, task_id: &str, include_subtasks: bool) -> ApiResult<Value> {
        let request = self
            .client
            .get(&format!("/v2/task/{}", task_id))
            .query(&[("include_subtasks", include_subtasks)]);
        self.client.send(request).await
    }

    pub async fn update(&self, task_id: &str, fields: &TaskFields) -> ApiResult<Value> {
        let request = self
            .client
            .put(&format!("/v2/task/{}", task_id))
            .json(fields);
        self.client.send(request).await
    }

    pub async fn delete(&self, task_id: &str) -> ApiResult<Value> {
        let request = self.client.delete(&format!("/v2/task/{}", task_id));
        self.client.send(request).await
    }

    pub async fn list(&self, list_id: &str, filter: &ListTasksFilter) -> ApiResult<Value> {
        let request = self
            .client
            .get(&format!("/v2/list/{}/task", list_id))
            .query(&filter.to_query());
        self.client.send(request).await
    }

    pub async fn search_workspace(&self, filter: &WorkspaceTasksFilter) -> ApiResult<Value> {
        let request = self
            .client
            .get(&format!("/v2/team/{}/task", self.client.team_id()))
            .query(&filter.to_query());
        self.client.send(request).await
    }

    pub async fn comments(&self, task_id: &str) -> ApiResult<Value> {
        let request = self.client.get(&format!("/v2/task/{}/comment", task_id));
        self.client.send(request).await
    }

    pub async fn add_comment(
        &self,
        task_id: &str,
        text: &str,
        notify_all: bool,
    ) -> ApiResult<Value> {
        let request = self
            .client
            .post(&format!("/v2/task/{}/comment", task_id))
            .json(&json!({ "comment_text": text, "notify_all": notify_all }));
        self.client.send(request).await
    }

    pub async fn add_tag(&self, task_id: &str, tag: &str) -> ApiResult<Value> {
        let request = self
            .client
            .post(&format!("/v2/task/{}/tag/{}", task_id, tag));
        self.client.send(request).await
    }

    pub async fn remove_tag(&self, task_id: &str, tag: &str) -> ApiResult<Value> {
        let request = self
            .client
            .delete(&format!("/v2/task/{}/tag/{}", task_id, tag));
        self.client.send(request).await
    }
}
