//! Workspace credential loading.
//!
//! Turns the raw process configuration into a validated [`WorkspaceConfig`].
//! Two shapes are accepted:
//!
//! - a multi-workspace blob (`CLICKUP_WORKSPACES`, or `workspaces` in the
//!   config file), either JSON text or an already-structured value:
//!
//!   ```json
//!   {
//!     "default": "main",
//!     "workspaces": {
//!       "main":   { "token": "pk_1", "teamId": "111", "description": "Company" },
//!       "client": { "token": "pk_2", "teamId": "222" }
//!     }
//!   }
//!   ```
//!
//! - the legacy single pair `CLICKUP_API_KEY` + `CLICKUP_TEAM_ID`, exposed as
//!   one workspace keyed [`LEGACY_WORKSPACE_KEY`].
//!
//! When both are present the blob wins and the legacy pair is ignored.

use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use super::error::{ConfigError, ConfigResult};

/// Key of the implicit workspace in legacy single-workspace mode.
pub const LEGACY_WORKSPACE_KEY: &str = "default";

/// Credentials for one ClickUp workspace.
#[derive(Clone, PartialEq, Eq)]
pub struct WorkspaceCredential {
    pub token: String,
    pub team_id: String,
    pub description: Option<String>,
}

impl fmt::Debug for WorkspaceCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WorkspaceCredential")
            .field("token", &"<redacted>")
            .field("team_id", &self.team_id)
            .field("description", &self.description)
            .finish()
    }
}

/// Which configuration shape produced a [`WorkspaceConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialMode {
    Legacy,
    Multi,
}

/// Validated, immutable workspace configuration.
///
/// `default_key` is always a key of `workspaces`.
#[derive(Debug, Clone)]
pub struct WorkspaceConfig {
    default_key: String,
    workspaces: BTreeMap<String, WorkspaceCredential>,
    mode: CredentialMode,
}

impl WorkspaceConfig {
    pub fn default_key(&self) -> &str {
        &self.default_key
    }

    pub fn mode(&self) -> CredentialMode {
        self.mode
    }

    pub fn get(&self, key: &str) -> Option<&WorkspaceCredential> {
        self.workspaces.get(key)
    }

    /// Configured workspace keys in sorted order.
    pub fn keys(&self) -> Vec<String> {
        self.workspaces.keys().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &WorkspaceCredential)> {
        self.workspaces.iter()
    }

    pub fn len(&self) -> usize {
        self.workspaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workspaces.is_empty()
    }
}

/// Multi-workspace blob as handed over by the configuration layer.
#[derive(Debug, Clone)]
pub enum WorkspacesBlob {
    /// JSON text, e.g. from an environment variable.
    Json(String),
    /// Already-parsed structure, e.g. from a YAML config file.
    Structured(Value),
}

/// Raw credential inputs gathered from CLI flags, env vars and config file.
#[derive(Debug, Clone, Default)]
pub struct CredentialSource {
    pub api_key: Option<String>,
    pub team_id: Option<String>,
    pub workspaces: Option<WorkspacesBlob>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawWorkspaces {
    default: Option<String>,
    workspaces: Option<BTreeMap<String, RawCredential>>,
}

#[derive(Deserialize)]
struct RawCredential {
    token: Option<String>,
    #[serde(
        default,
        rename = "teamId",
        alias = "team_id",
        deserialize_with = "crate::serde_utils::optional_id"
    )]
    team_id: Option<String>,
    description: Option<String>,
}

/// Load the workspace configuration. Called once at startup.
pub fn load(source: &CredentialSource) -> ConfigResult<WorkspaceConfig> {
    match &source.workspaces {
        Some(blob) => {
            if present(&source.api_key).is_some() || present(&source.team_id).is_some() {
                warn!(
                    "CLICKUP_WORKSPACES is set; ignoring CLICKUP_API_KEY/CLICKUP_TEAM_ID"
                );
            }
            load_multi(blob)
        }
        None => load_legacy(source),
    }
}

fn load_multi(blob: &WorkspacesBlob) -> ConfigResult<WorkspaceConfig> {
    let value = match blob {
        WorkspacesBlob::Json(text) => parse_json(text)?,
        WorkspacesBlob::Structured(Value::String(text)) => parse_json(text)?,
        WorkspacesBlob::Structured(value) => value.clone(),
    };

    let raw: RawWorkspaces =
        serde_json::from_value(value).map_err(|e| ConfigError::InvalidWorkspaces {
            message: e.to_string(),
        })?;

    let default_key = present(&raw.default).ok_or(ConfigError::MissingDefault)?;

    let raw_workspaces = raw
        .workspaces
        .filter(|w| !w.is_empty())
        .ok_or(ConfigError::MissingWorkspaces)?;

    let mut workspaces = BTreeMap::new();
    for (key, cred) in raw_workspaces {
        let token = present(&cred.token);
        let team_id = present(&cred.team_id);

        let (token, team_id) = match (token, team_id) {
            (Some(token), Some(team_id)) => (token, team_id),
            (token, team_id) => {
                let mut missing = Vec::new();
                if token.is_none() {
                    missing.push("token");
                }
                if team_id.is_none() {
                    missing.push("teamId");
                }
                return Err(ConfigError::IncompleteWorkspace { key, missing });
            }
        };

        workspaces.insert(
            key,
            WorkspaceCredential {
                token,
                team_id,
                description: present(&cred.description),
            },
        );
    }

    if !workspaces.contains_key(&default_key) {
        return Err(ConfigError::UnknownDefault {
            default: default_key,
            available: workspaces.keys().cloned().collect(),
        });
    }

    Ok(WorkspaceConfig {
        default_key,
        workspaces,
        mode: CredentialMode::Multi,
    })
}

fn load_legacy(source: &CredentialSource) -> ConfigResult<WorkspaceConfig> {
    let token = present(&source.api_key);
    let team_id = present(&source.team_id);

    let (token, team_id) = match (token, team_id) {
        (Some(token), Some(team_id)) => (token, team_id),
        (token, team_id) => {
            let mut fields = Vec::new();
            if token.is_none() {
                fields.push("CLICKUP_API_KEY");
            }
            if team_id.is_none() {
                fields.push("CLICKUP_TEAM_ID");
            }
            return Err(ConfigError::MissingCredentials { fields });
        }
    };

    let mut workspaces = BTreeMap::new();
    workspaces.insert(
        LEGACY_WORKSPACE_KEY.to_string(),
        WorkspaceCredential {
            token,
            team_id,
            description: None,
        },
    );

    Ok(WorkspaceConfig {
        default_key: LEGACY_WORKSPACE_KEY.to_string(),
        workspaces,
        mode: CredentialMode::Legacy,
    })
}

fn parse_json(text: &str) -> ConfigResult<Value> {
    serde_json::from_str(text).map_err(|e| ConfigError::InvalidWorkspaces {
        message: e.to_string(),
    })
}

/// Blank strings count as absent.
fn present(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
