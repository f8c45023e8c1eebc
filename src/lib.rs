pub mod clickup;
pub mod cli;
pub mod config;
pub mod mcp;
pub mod serde_utils;
pub mod workspace;
