//! List and folder operations.

use serde::Serialize;
use serde_json::{Value, json};

use super::client::ClickUpClient;
use super::error::ApiResult;

#[derive(Debug, Default, Clone, Serialize)]
pub struct ListFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub markdown_content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<i64>,
}

#[derive(Clone)]
pub struct ListService {
    client: ClickUpClient,
}

impl ListService {
    pub fn new(client: ClickUpClient) -> Self {
        Self { client }
    }

    /// Create a folderless list directly in a space.
    pub async fn create_in_space(&self, space_id: &str, fields: &ListFields) -> ApiResult<Value> {
        let request = self
            .client
            .post(&format!("/v2/space/{}/list", space_id))
            .json(fields);
        self.client.send(request).await
    }

    pub async fn create_in_folder(
        &self,
        folder_id: &str,
        fields: &ListFields,
    ) -> ApiResult<Value> {
        let request = self
            .client
            .post(&format!("/v2/folder/{}/list", folder_id))
            .json(fields);
        self.client.send(request).await
    }

    pub async fn get(&self, list_id: &str) -> ApiResult<Value> {
        let request = self.client.get(&format!("/v2/list/{}", list_id));
        self.client.send(request).await
    }

    pub async fn update(&self, list_id: &str, fields: &ListFields) -> ApiResult<Value> {
        let request = self
            .client
            .put(&format!("/v2/list/{}", list_id))
            .json(fields);
        self.client.send(request).await
    }

    pub async fn delete(&self, list_id: &str) -> ApiResult<Value> {
        let request = self.client.delete(&format!("/v2/list/{}", list_id));
        self.client.send(request).await
    }

    pub async fn create_folder(&self, space_id: &str, name: &str) -> ApiResult<Value> {
        let request = self
            .client
            .post(&format!("/v2/space/{}/folder", space_id))
            .json(&json!({ "name": name }));
        self.client.send(request).await
    }

    pub async fn get_folder(&self, folder_id: &str) -> ApiResult<Value> {
        let request = self.client.get(&format!("/v2/folder/{}", folder_id));
        self.client.send(request).await
    }

    pub async fn update_folder(&self, folder_id: &str, name: &str) -> ApiResult<Value> {
        let request = self
            .client
            .put(&format!("/v2/folder/{}", folder_id))
            .json(&json!({ "name": name }));
        self.client.send(request).await
    }

    pub async fn delete_folder(&self, folder_id: &str) -> ApiResult<Value> {
        let request = self.client.delete(&format!("/v2/folder/{}", folder_id));
        self.client.send(request).await
    }
}
