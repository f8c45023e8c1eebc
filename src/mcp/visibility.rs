//! Tool visibility policy.
//!
//! Decides once, at startup, which tools of the catalog are advertised and
//! callable. Filtering happens on the composed router, so handlers never
//! check visibility themselves.

use std::collections::BTreeSet;

use rmcp::handler::server::router::tool::ToolRouter;
use tracing::{debug, info};

use crate::config::parse_tool_list;

/// Enabled/disabled tool name lists.
///
/// A non-empty `enabled` list fully determines visibility and `disabled` is
/// ignored. Otherwise `disabled` is subtracted from the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolVisibility {
    enabled: BTreeSet<String>,
    disabled: BTreeSet<String>,
}

impl ToolVisibility {
    pub fn new<E, D>(enabled: E, disabled: D) -> Self
    where
        E: IntoIterator,
        E::Item: Into<String>,
        D: IntoIterator,
        D::Item: Into<String>,
    {
        Self {
            enabled: enabled.into_iter().map(Into::into).collect(),
            disabled: disabled.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse comma-separated lists, e.g. `ENABLED_TOOLS="get_task,get_tasks"`.
    pub fn from_lists(enabled_csv: Option<&str>, disabled_csv: Option<&str>) -> Self {
        Self::new(
            enabled_csv.map(parse_tool_list).unwrap_or_default(),
            disabled_csv.map(parse_tool_list).unwrap_or_default(),
        )
    }

    /// Everything visible.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn enabled(&self) -> &BTreeSet<String> {
        &self.enabled
    }

    pub fn disabled(&self) -> &BTreeSet<String> {
        &self.disabled
    }

    pub fn effective_set<'a>(&self, catalog: impl IntoIterator<Item = &'a str>) -> BTreeSet<String> {
        effective_set(catalog, &self.enabled, &self.disabled)
    }

    /// Drop every route outside the effective set.
    pub fn apply<S: Send + Sync + 'static>(&self, router: &mut ToolRouter<S>) {
        let catalog: Vec<String> = router.map.keys().map(|name| name.to_string()).collect();
        let visible = self.effective_set(catalog.iter().map(String::as_str));

        router.map.retain(|name, _| visible.contains(&**name));

        info!(
            visible = visible.len(),
            hidden = catalog.len() - visible.len(),
            "Applied tool visibility"
        );
    }
}

/// Effective subset of `catalog`.
pub fn effective_set<'a>(
    catalog: impl IntoIterator<Item = &'a str>,
    enabled: &BTreeSet<String>,
    disabled: &BTreeSet<String>,
) -> BTreeSet<String> {
    let catalog: BTreeSet<&str> = catalog.into_iter().collect();

    if !enabled.is_empty() {
        for unknown in enabled.iter().filter(|n| !catalog.contains(n.as_str())) {
            debug!(tool = %unknown, "Enabled tool is not in the catalog, ignoring");
        }
        return catalog
            .into_iter()
            .filter(|name| enabled.contains(*name))
            .map(str::to_string)
            .collect();
    }

    catalog
        .into_iter()
        .filter(|name| !disabled.contains(*name))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
#[path = "visibility_test.rs"]
mod visibility_test;
