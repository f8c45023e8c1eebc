//! Configuration error types.
//!
//! Every variant is fatal: the server refuses to start rather than discover a
//! malformed workspace deep inside a tool call.

use miette::Diagnostic;
use thiserror::Error;

/// Startup configuration errors.
#[derive(Error, Diagnostic, Debug)]
pub enum ConfigError {
    #[error("Invalid workspaces configuration: {message}")]
    #[diagnostic(
        code(clickup_mcp::config::invalid_workspaces),
        help(
            "CLICKUP_WORKSPACES must be JSON shaped like {{\"default\": \"main\", \"workspaces\": {{\"main\": {{\"token\": \"pk_...\", \"teamId\": \"123\"}}}}}}. Only the top-level keys `default` and `workspaces` are accepted; any other key is rejected."
        )
    )]
    InvalidWorkspaces { message: String },

    #[error("Workspaces configuration is missing the 'default' workspace key")]
    #[diagnostic(code(clickup_mcp::config::missing_default))]
    MissingDefault,

    #[error("Workspaces configuration does not define any workspaces")]
    #[diagnostic(code(clickup_mcp::config::missing_workspaces))]
    MissingWorkspaces,

    #[error("Workspace '{key}' is missing required field(s): {}", .missing.join(", "))]
    #[diagnostic(code(clickup_mcp::config::incomplete_workspace))]
    IncompleteWorkspace {
        key: String,
        missing: Vec<&'static str>,
    },

    #[error(
        "Default workspace '{default}' is not defined. Configured workspaces: {}",
        .available.join(", ")
    )]
    #[diagnostic(code(clickup_mcp::config::unknown_default))]
    UnknownDefault {
        default: String,
        available: Vec<String>,
    },

    #[error("Missing required configuration: {}", .fields.join(", "))]
    #[diagnostic(
        code(clickup_mcp::config::missing_credentials),
        help("Set CLICKUP_API_KEY and CLICKUP_TEAM_ID, or CLICKUP_WORKSPACES for several workspaces.")
    )]
    MissingCredentials { fields: Vec<&'static str> },

    #[error("Failed to read config file {path}: {message}")]
    #[diagnostic(code(clickup_mcp::config::file))]
    File { path: String, message: String },
}

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;
