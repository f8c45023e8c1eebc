//! Space and tag operations.

use serde_json::Value;

use super::client::ClickUpClient;
use super::error::ApiResult;

#[derive(Clone)]
pub struct SpaceService {
    client: ClickUpClient,
}

impl SpaceService {
    pub fn new(client: ClickUpClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, archived: bool) -> ApiResult<Value> {
        let request = self
            .client
            .get(&format!("/v2/team/{}/space", self.client.team_id()))
            .query(&[("archived", archived)]);
        self.client.send(request).await
    }

    pub async fn get(&self, space_id: &str) -> ApiResult<Value> {
        let request = self.client.get(&format!("/v2/space/{}", space_id));
        self.client.send(request).await
    }

    /// Folders of a space, each with its lists.
    pub async fn folders(&self, space_id: &str) -> ApiResult<Value> {
        let request = self.client.get(&format!("/v2/space/{}/folder", space_id));
        self.client.send(request).await
    }

    /// Lists that sit directly in a space, outside any folder.
    pub async fn folderless_lists(&self, space_id: &str) -> ApiResult<Value> {
        let request = self.client.get(&format!("/v2/space/{}/list", space_id));
        self.client.send(request).await
    }

    pub async fn tags(&self, space_id: &str) -> ApiResult<Value> {
        let request = self.client.get(&format!("/v2/space/{}/tag", space_id));
        self.client.send(request).await
    }
}
