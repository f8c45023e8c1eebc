//! Per-workspace service bundles.
//!
//! A [`ServiceBundle`] is every feature service bound to one workspace's
//! credentials. Bundles are built by a [`BundleFactory`] and cached by the
//! workspace registry; they are never shared between workspaces.

use std::fmt;

use reqwest::Client;

#[cfg(test)]
use mockall::automock;

use super::checklists::ChecklistService;
use super::client::{ClickUpClient, http_client};
use super::documents::DocumentService;
use super::error::ApiResult;
use super::goals::GoalService;
use super::lists::ListService;
use super::spaces::SpaceService;
use super::tasks::TaskService;
use super::time_tracking::TimeTrackingService;
use super::workspace::WorkspaceService;
use crate::config::WorkspaceCredential;

/// Feature services bound to one workspace.
#[derive(Clone)]
pub struct ServiceBundle {
    workspace_key: String,
    team_id: String,
    pub tasks: TaskService,
    pub lists: ListService,
    pub spaces: SpaceService,
    pub goals: GoalService,
    pub checklists: ChecklistService,
    pub documents: DocumentService,
    pub time_tracking: TimeTrackingService,
    pub workspace: WorkspaceService,
}

impl ServiceBundle {
    pub fn new(workspace_key: &str, client: ClickUpClient) -> Self {
        Self {
            workspace_key: workspace_key.to_string(),
            team_id: client.team_id().to_string(),
            tasks: TaskService::new(client.clone()),
            lists: ListService::new(client.clone()),
            spaces: SpaceService::new(client.clone()),
            goals: GoalService::new(client.clone()),
            checklists: ChecklistService::new(client.clone()),
            documents: DocumentService::new(client.clone()),
            time_tracking: TimeTrackingService::new(client.clone()),
            workspace: WorkspaceService::new(client),
        }
    }

    /// Registry key this bundle was built for.
    pub fn workspace_key(&self) -> &str {
        &self.workspace_key
    }

    pub fn team_id(&self) -> &str {
        &self.team_id
    }
}

impl fmt::Debug for ServiceBundle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceBundle")
            .field("workspace_key", &self.workspace_key)
            .field("team_id", &self.team_id)
            .finish_non_exhaustive()
    }
}

/// Builds the service bundle for one workspace.
///
/// Implementations must be cheap and must not perform I/O: the registry calls
/// `build` while holding the lock for that workspace key.
#[cfg_attr(test, automock)]
pub trait BundleFactory: Send + Sync {
    fn build(&self, workspace_key: &str, credential: &WorkspaceCredential) -> ServiceBundle;
}

/// Production factory: ClickUp services over one shared HTTP client.
pub struct HttpBundleFactory {
    http: Client,
    base_url: String,
}

impl HttpBundleFactory {
    pub fn new(base_url: &str) -> ApiResult<Self> {
        Ok(Self {
            http: http_client()?,
            base_url: base_url.to_string(),
        })
    }
}

impl BundleFactory for HttpBundleFactory {
    fn build(&self, workspace_key: &str, credential: &WorkspaceCredential) -> ServiceBundle {
        let client = ClickUpClient::new(self.http.clone(), &self.base_url, credential);
        ServiceBundle::new(workspace_key, client)
    }
}
