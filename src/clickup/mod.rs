//! ClickUp REST API access.
//!
//! [`ClickUpClient`] binds one workspace's token and team id to a shared
//! HTTP client; the feature services wrap it one endpoint per method and hand
//! back the JSON reply unchanged.

pub mod bundle;
pub mod checklists;
pub mod client;
pub mod dates;
pub mod documents;
pub mod error;
pub mod goals;
pub mod lists;
pub mod spaces;
pub mod tasks;
pub mod time_tracking;
pub mod workspace;

#[cfg(test)]
pub(crate) mod test_support;

pub use bundle::{BundleFactory, HttpBundleFactory, ServiceBundle};
pub use client::ClickUpClient;
pub use error::{ApiError, ApiResult};

#[cfg(test)]
pub use bundle::MockBundleFactory;
