//! Tool response envelope.
//!
//! Every tool answers with one text content block. Success carries the
//! upstream payload; failure carries `{"error": ..., ...context}` and sets
//! `is_error`. Failures are ordinary tool results, never protocol errors, so
//! the model sees the message and can correct its next call.

use rmcp::model::{CallToolResult, Content};
use serde::Serialize;
use serde_json::{Map, Value, json};
use tracing::debug;

use crate::clickup::{ApiError, ApiResult};
use crate::workspace::DispatchError;

/// Success result. Strings are passed through verbatim, everything else is
/// pretty-printed JSON.
pub fn ok(payload: &Value) -> CallToolResult {
    let text = match payload {
        Value::String(s) => s.clone(),
        other => serde_json::to_string_pretty(other)
            .unwrap_or_else(|_| "Failed to serialize response".to_string()),
    };
    CallToolResult::success(vec![Content::text(text)])
}

/// Success result from any serializable value.
pub fn ok_json<T: Serialize>(payload: &T) -> CallToolResult {
    match serde_json::to_value(payload) {
        Ok(value) => ok(&value),
        Err(e) => fail(&format!("Failed to serialize response: {}", e), None),
    }
}

/// Error result with optional context.
///
/// Object fields in `extra` are merged next to `error`; any other value goes
/// under `details`.
pub fn fail(message: &str, extra: Option<Value>) -> CallToolResult {
    let mut body = Map::new();
    body.insert("error".to_string(), Value::String(message.to_string()));

    match extra {
        Some(Value::Object(fields)) => {
            for (key, value) in fields {
                if key != "error" {
                    body.insert(key, value);
                }
            }
        }
        Some(Value::Null) | None => {}
        Some(other) => {
            body.insert("details".to_string(), other);
        }
    }

    let text = serde_json::to_string_pretty(&Value::Object(body))
        .unwrap_or_else(|_| message.to_string());
    CallToolResult::error(vec![Content::text(text)])
}

/// Wrap an upstream result.
pub fn respond(result: ApiResult<Value>) -> CallToolResult {
    match result {
        Ok(value) => ok(&value),
        Err(e) => api_failure(&e),
    }
}

/// Error result for a failed upstream call.
pub fn api_failure(error: &ApiError) -> CallToolResult {
    debug!(error = %error, "ClickUp call failed");
    let extra = error.status().map(|status| json!({ "status": status }));
    fail(&error.to_string(), extra)
}

/// Error result for a call naming an unknown workspace.
pub fn dispatch_failure(error: &DispatchError) -> CallToolResult {
    fail(
        &error.to_string(),
        Some(json!({
            "workspace": error.requested(),
            "available_workspaces": error.available(),
        })),
    )
}

#[cfg(test)]
#[path = "envelope_test.rs"]
mod envelope_test;
