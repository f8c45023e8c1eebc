use serde::Serialize;
use serde_json::{Value, json};

use super::client::ClickUpClient;
use super::error::ApiResult;

#[derive(Debug, Default, Clone, Serialize)]
pub struct ChecklistItemFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved: Option<bool>,
}

#[derive(Clone)]
pub struct ChecklistService {
    client: ClickUpClient,
}

impl ChecklistService {
    pub fn new(client: ClickUpClient) -> Self {
        Self { client }
    }

    pub async fn create(&self, task_id: &str, name: &str) -> ApiResult<Value> {
        let request = self
            .client
            .post(&format!("/v2/task/{}/checklist", task_id))
            .json(&json!({ "name": name }));
        self.client.send(request).await
    }

    pub async fn delete(&self, checklist_id: &str) -> ApiResult<Value> {
        let request = self
            .client
            .delete(&format!("/v2/checklist/{}", checklist_id));
        self.client.send(request).await
    }

    pub async fn create_item(
        &self,
        checklist_id: &str,
        fields: &ChecklistItemFields,
    ) -> ApiResult<Value> {
        let request = self
            .client
            .post(&format!("/v2/checklist/{}/checklist_item", checklist_id))
            .json(fields);
        self.client.send(request).await
    }

    pub async fn update_item(
        &self,
        checklist_id: &str,
        item_id: &str,
        fields: &ChecklistItemFields,
    ) -> ApiResult<Value> {
        let request = self
            .client
            .put(&format!(
                "/v2/checklist/{}/checklist_item/{}",
                checklist_id, item_id
            ))
            .json(fields);
        self.client.send(request).await
    }

    pub async fn delete_item(&self, checklist_id: &str, item_id: &str) -> ApiResult<Value> {
        let request = self.client.delete(&format!(
            "/v2/checklist/{}/checklist_item/{}",
            checklist_id, item_id
        ));
        self.client.send(request).await
    }
}
