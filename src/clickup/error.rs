use miette::Diagnostic;
use thiserror::Error;

/// Failures reported by, or while talking to, the ClickUp API.
///
/// These are passed through to the caller unchanged; nothing here is retried.
#[derive(Error, Diagnostic, Debug)]
pub enum ApiError {
    #[error("Failed to connect to ClickUp API: {source}")]
    #[diagnostic(
        code(clickup_mcp::clickup::connection_failed),
        help("Check network connectivity and CLICKUP_API_BASE_URL.")
    )]
    ConnectionFailed {
        #[source]
        source: reqwest::Error,
    },

    #[error("Invalid response from ClickUp API: {message}")]
    #[diagnostic(code(clickup_mcp::clickup::invalid_response))]
    InvalidResponse { message: String },

    #[error("ClickUp API error ({status}): {message}")]
    #[diagnostic(code(clickup_mcp::clickup::api_error))]
    Status { status: u16, message: String },

    #[error("Invalid request: {message}")]
    #[diagnostic(code(clickup_mcp::clickup::invalid_request))]
    InvalidRequest { message: String },
}

impl ApiError {
    /// HTTP status returned by ClickUp, when there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_connect() || e.is_timeout() {
            ApiError::ConnectionFailed { source: e }
        } else {
            ApiError::InvalidResponse {
                message: e.to_string(),
            }
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::InvalidResponse {
            message: e.to_string(),
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
