//! Workspace registry: workspace key → service bundle.
//!
//! Bundles are built lazily on first use and kept for the life of the
//! process. The registry is constructed once by the composition root and
//! shared through an `Arc`; there is no global instance.

use std::sync::Arc;

use dashmap::DashMap;
use miette::Diagnostic;
use serde::Serialize;
use thiserror::Error;
use tracing::{info, trace};

use crate::clickup::{BundleFactory, ServiceBundle};
use crate::config::WorkspaceConfig;

/// Workspace resolution errors.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum WorkspaceError {
    #[error("Workspace '{key}' is not configured")]
    #[diagnostic(code(clickup_mcp::workspace::unknown))]
    UnknownWorkspace { key: String, available: Vec<String> },
}

/// Public view of a configured workspace. Never carries the token.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct WorkspaceDescriptor {
    pub key: String,
    pub team_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub is_default: bool,
}

pub struct WorkspaceRegistry {
    config: WorkspaceConfig,
    factory: Box<dyn BundleFactory>,
    bundles: DashMap<String, Arc<ServiceBundle>>,
}

impl WorkspaceRegistry {
    pub fn new(config: WorkspaceConfig, factory: Box<dyn BundleFactory>) -> Self {
        Self {
            config,
            factory,
            bundles: DashMap::new(),
        }
    }

    /// Resolve the bundle for `key`, or for the default workspace when `None`.
    ///
    /// The first call for a key builds the bundle; later calls return the same
    /// `Arc`. The entry lock is held across `BundleFactory::build`, so
    /// concurrent first calls for one key build exactly one bundle.
    pub fn resolve(&self, key: Option<&str>) -> Result<Arc<ServiceBundle>, WorkspaceError> {
        let key = key.unwrap_or_else(|| self.config.default_key());

        if let Some(bundle) = self.bundles.get(key) {
            trace!(workspace = key, "Service bundle cache hit");
            return Ok(Arc::clone(bundle.value()));
        }

        let credential = self
            .config
            .get(key)
            .ok_or_else(|| WorkspaceError::UnknownWorkspace {
                key: key.to_string(),
                available: self.list_keys(),
            })?;

        let entry = self.bundles.entry(key.to_string()).or_insert_with(|| {
            info!(
                workspace = key,
                team_id = %credential.team_id,
                "Materializing service bundle"
            );
            Arc::new(self.factory.build(key, credential))
        });

        Ok(Arc::clone(entry.value()))
    }

    /// All configured workspace keys (built or not), sorted.
    pub fn list_keys(&self) -> Vec<String> {
        self.config.keys()
    }

    pub fn default_key(&self) -> &str {
        self.config.default_key()
    }

    pub fn config(&self) -> &WorkspaceConfig {
        &self.config
    }

    /// Number of bundles built so far.
    pub fn materialized(&self) -> usize {
        self.bundles.len()
    }

    pub fn describe(&self) -> Vec<WorkspaceDescriptor> {
        self.config
            .iter()
            .map(|(key, cred)| WorkspaceDescriptor {
                key: key.clone(),
                team_id: cred.team_id.clone(),
                description: cred.description.clone(),
                is_default: key == self.config.default_key(),
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "registry_test.rs"]
mod registry_test;
