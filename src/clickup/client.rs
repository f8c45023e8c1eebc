use std::time::Duration;

use reqwest::header::AUTHORIZATION;
use reqwest::{Client, RequestBuilder, Response};
use serde_json::Value;

use super::error::{ApiError, ApiResult};
use crate::config::WorkspaceCredential;

/// Request timeout for every ClickUp call.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Install the ring crypto provider for rustls. Safe to call repeatedly.
pub fn init_crypto() {
    let _ = rustls::crypto::ring::default_provider().install_default();
}

/// Build the HTTP client shared by every workspace.
///
/// Credentials are attached per request, so one connection pool serves all
/// workspaces.
pub fn http_client() -> ApiResult<Client> {
    init_crypto();
    Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .user_agent(concat!("clickup-mcp/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| ApiError::InvalidRequest {
            message: format!("Failed to build HTTP client: {}", e),
        })
}

/// ClickUp API client bound to one workspace's credentials.
#[derive(Clone)]
pub struct ClickUpClient {
    http: Client,
    base_url: String,
    token: String,
    team_id: String,
}

impl ClickUpClient {
    pub fn new(http: Client, base_url: &str, credential: &WorkspaceCredential) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: credential.token.clone(),
            team_id: credential.team_id.clone(),
        }
    }

    /// Get the base URL being used
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Team (workspace) id this client is bound to
    pub fn team_id(&self) -> &str {
        &self.team_id
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Create a GET request builder
    pub fn get(&self, path: &str) -> RequestBuilder {
        self.http
            .get(self.url(path))
            .header(AUTHORIZATION, &self.token)
    }

    /// Create a POST request builder
    pub fn post(&self, path: &str) -> RequestBuilder {
        self.http
            .post(self.url(path))
            .header(AUTHORIZATION, &self.token)
    }

    /// Create a PUT request builder
    pub fn put(&self, path: &str) -> RequestBuilder {
        self.http
            .put(self.url(path))
            .header(AUTHORIZATION, &self.token)
    }

    /// Create a DELETE request builder
    pub fn delete(&self, path: &str) -> RequestBuilder {
        self.http
            .delete(self.url(path))
            .header(AUTHORIZATION, &self.token)
    }

    /// Send a request and return the JSON body.
    pub async fn send(&self, request: RequestBuilder) -> ApiResult<Value> {
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Handle API response with standardized error handling
    ///
    /// Empty success bodies (ClickUp answers most deletes with nothing) become
    /// an empty object. Error bodies use ClickUp's `err` field when present.
    pub async fn handle_response(response: Response) -> ApiResult<Value> {
        let status = response.status();
        let body = response.text().await?;

        if status.is_success() {
            if body.trim().is_empty() {
                return Ok(Value::Object(Default::default()));
            }
            return Ok(serde_json::from_str(&body)?);
        }

        let message = serde_json::from_str::<Value>(&body)
            .ok()
            .and_then(|v| v.get("err").and_then(Value::as_str).map(str::to_string))
            .unwrap_or_else(|| {
                if body.trim().is_empty() {
                    status
                        .canonical_reason()
                        .unwrap_or("Unknown error")
                        .to_string()
                } else {
                    body
                }
            });

        Err(ApiError::Status {
            status: status.as_u16(),
            message,
        })
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;
