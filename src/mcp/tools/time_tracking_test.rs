//! Tests for time tracking MCP tools

use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;

use super::*;
use crate::clickup::test_support::spawn_mock_clickup;
use crate::mcp::test_support::{body, is_error, server};
use crate::workspace::WorkspaceScope;

#[tokio::test]
async fn test_add_time_entry_converts_start_and_minutes() {
    let (base_url, _handle) = spawn_mock_clickup().await;
    let server = server(&base_url);

    let result = server
        .add_time_entry(Parameters(AddTimeEntryParams {
            scope: WorkspaceScope::new(Some("client")),
            task_id: "abc".to_string(),
            start: "2025-01-01T09:00:00Z".to_string(),
            duration_minutes: 90,
            description: Some("Pairing".to_string()),
            billable: None,
            tags: Some(vec!["deep-work".to_string()]),
        }))
        .await
        .unwrap();

    let body = body(&result);
    assert_eq!(body["path"], "/v2/team/222/time_entries");
    assert_eq!(body["authorization"], "pk_client");
    assert_eq!(
        body["body"],
        json!({
            "tid": "abc",
            "start": 1735722000000_i64,
            "duration": 5400000,
            "description": "Pairing",
            "tags": [{ "name": "deep-work" }]
        })
    );
}

#[tokio::test]
async fn test_unparseable_start_is_an_error_envelope() {
    let server = server("http://127.0.0.1:1");

    let result = server
        .add_time_entry(Parameters(AddTimeEntryParams {
            scope: WorkspaceScope::default_workspace(),
            task_id: "abc".to_string(),
            start: "yesterday".to_string(),
            duration_minutes: 5,
            description: None,
            billable: None,
            tags: None,
        }))
        .await
        .unwrap();

    assert!(is_error(&result));
    assert!(
        body(&result)["error"]
            .as_str()
            .unwrap()
            .contains("yesterday")
    );
}

#[tokio::test]
async fn test_task_time_entries_query() {
    let (base_url, _handle) = spawn_mock_clickup().await;
    let server = server(&base_url);

    let result = server
        .get_task_time_entries(Parameters(GetTaskTimeEntriesParams {
            scope: WorkspaceScope::default_workspace(),
            task_id: "abc".to_string(),
            start_date: Some("2025-01-01".to_string()),
            end_date: None,
        }))
        .await
        .unwrap();

    let body = body(&result);
    assert_eq!(body["path"], "/v2/team/111/time_entries");
    assert_eq!(body["query"], "task_id=abc&start_date=1735689600000");
}

#[tokio::test]
async fn test_timer_start_current_stop() {
    let (base_url, _handle) = spawn_mock_clickup().await;
    let server = server(&base_url);

    let started = server
        .start_time_tracking(Parameters(StartTimeTrackingParams {
            scope: WorkspaceScope::default_workspace(),
            task_id: "abc".to_string(),
            description: None,
            billable: Some(true),
            tags: None,
        }))
        .await
        .unwrap();
    let current = server
        .get_current_time_entry(Parameters(ScopeOnlyParams::default()))
        .await
        .unwrap();
    let stopped = server
        .stop_time_tracking(Parameters(ScopeOnlyParams::default()))
        .await
        .unwrap();

    let started = body(&started);
    assert_eq!(started["path"], "/v2/team/111/time_entries/start");
    assert_eq!(started["body"], json!({ "tid": "abc", "billable": true }));
    assert_eq!(body(&current)["path"], "/v2/team/111/time_entries/current");
    assert_eq!(body(&stopped)["path"], "/v2/team/111/time_entries/stop");
}

#[tokio::test]
async fn test_delete_time_entry() {
    let (base_url, _handle) = spawn_mock_clickup().await;
    let server = server(&base_url);

    let result = server
        .delete_time_entry(Parameters(DeleteTimeEntryParams {
            scope: WorkspaceScope::default_workspace(),
            timer_id: "t9".to_string(),
        }))
        .await
        .unwrap();

    let body = body(&result);
    assert_eq!(body["method"], "DELETE");
    assert_eq!(body["path"], "/v2/team/111/time_entries/t9");
}
