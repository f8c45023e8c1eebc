//! Multi-workspace routing.
//!
//! - **registry**: workspace key → lazily built, cached service bundle
//! - **dispatch**: per-call resolution from a tool's [`WorkspaceScope`]

pub mod dispatch;
pub mod registry;

pub use dispatch::{DispatchError, Dispatcher, WorkspaceScope};
pub use registry::{WorkspaceDescriptor, WorkspaceError, WorkspaceRegistry};
