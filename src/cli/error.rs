use miette::Diagnostic;
use thiserror::Error;

use crate::clickup::ApiError;
use crate::config::ConfigError;

/// Fatal startup and transport errors, reported by `main` through miette.
#[derive(Error, Diagnostic, Debug)]
pub enum AppError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to initialize ClickUp client: {0}")]
    #[diagnostic(code(clickup_mcp::cli::client))]
    Client(#[from] ApiError),

    #[error("Failed to bind {addr}")]
    #[diagnostic(
        code(clickup_mcp::cli::bind),
        help("Is another process listening on that port? Try --port or PORT.")
    )]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("MCP transport failed: {0}")]
    #[diagnostic(code(clickup_mcp::cli::transport))]
    Transport(#[from] std::io::Error),
}

pub type AppResult<T> = Result<T, AppError>;
