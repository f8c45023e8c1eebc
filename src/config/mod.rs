//! Server configuration.
//!
//! Settings come from three layers, highest priority first:
//! 1. CLI flags (clap, which also reads the matching env vars)
//! 2. Config file (`--config`, YAML or JSON)
//! 3. Built-in defaults
//!
//! Workspace credentials are validated separately by [`credentials::load`].

pub mod credentials;
mod error;

use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

pub use credentials::{
    CredentialMode, CredentialSource, LEGACY_WORKSPACE_KEY, WorkspaceConfig, WorkspaceCredential,
    WorkspacesBlob,
};
pub use error::{ConfigError, ConfigResult};

/// Default ClickUp API root. Paths append `/v2/...` or `/v3/...`.
pub const DEFAULT_API_BASE_URL: &str = "https://api.clickup.com/api";

/// A list of tool names, written either as `"a,b"` or `[a, b]`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum ToolList {
    Csv(String),
    Names(Vec<String>),
}

impl ToolList {
    pub fn names(&self) -> Vec<String> {
        match self {
            ToolList::Csv(csv) => parse_tool_list(csv),
            ToolList::Names(names) => names
                .iter()
                .map(|n| n.trim().to_string())
                .filter(|n| !n.is_empty())
                .collect(),
        }
    }
}

/// Parse a comma-separated tool list, dropping blanks.
pub fn parse_tool_list(csv: &str) -> Vec<String> {
    csv.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// One configuration layer. Every field is optional so layers can be merged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigLayer {
    pub api_key: Option<String>,
    #[serde(default, deserialize_with = "crate::serde_utils::optional_id")]
    pub team_id: Option<String>,
    pub workspaces: Option<Value>,
    pub enabled_tools: Option<ToolList>,
    pub disabled_tools: Option<ToolList>,
    pub document_support: Option<bool>,
    pub api_base_url: Option<String>,
}

impl ConfigLayer {
    /// Read a config file. JSON is accepted since it is valid YAML.
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::File {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| ConfigError::File {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Fill unset fields of `self` from `lower`.
    pub fn over(self, lower: ConfigLayer) -> ConfigLayer {
        ConfigLayer {
            api_key: self.api_key.or(lower.api_key),
            team_id: self.team_id.or(lower.team_id),
            workspaces: self.workspaces.or(lower.workspaces),
            enabled_tools: self.enabled_tools.or(lower.enabled_tools),
            disabled_tools: self.disabled_tools.or(lower.disabled_tools),
            document_support: self.document_support.or(lower.document_support),
            api_base_url: self.api_base_url.or(lower.api_base_url),
        }
    }
}

/// Fully resolved settings.
#[derive(Debug, Clone)]
pub struct Settings {
    pub credentials: CredentialSource,
    pub enabled_tools: Vec<String>,
    pub disabled_tools: Vec<String>,
    pub document_support: bool,
    pub api_base_url: String,
}

impl From<ConfigLayer> for Settings {
    fn from(layer: ConfigLayer) -> Self {
        let workspaces = layer.workspaces.map(|value| match value {
            Value::String(text) => WorkspacesBlob::Json(text),
            other => WorkspacesBlob::Structured(other),
        });

        Self {
            credentials: CredentialSource {
                api_key: layer.api_key,
                team_id: layer.team_id,
                workspaces,
            },
            enabled_tools: layer.enabled_tools.map(|l| l.names()).unwrap_or_default(),
            disabled_tools: layer.disabled_tools.map(|l| l.names()).unwrap_or_default(),
            document_support: layer.document_support.unwrap_or(false),
            api_base_url: layer
                .api_base_url
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
        }
    }
}
