//! Tests that drive the server through an MCP client, as a real agent would.

use rmcp::{
    RoleClient, ServiceExt,
    model::CallToolRequestParams,
    service::RunningService,
};
use serde_json::{Value, json};

use super::test_support::{body, is_error, two_workspace_server};
use super::{DOCUMENT_TOOLS, ToolVisibility};
use crate::clickup::test_support::spawn_mock_clickup;

/// Serve `visibility` over an in-memory pipe and connect a client to it.
async fn connect(base_url: &str, visibility: &ToolVisibility) -> RunningService<RoleClient, ()> {
    let server = two_workspace_server(base_url, visibility, false);
    let (server_io, client_io) = tokio::io::duplex(64 * 1024);

    tokio::spawn(async move {
        if let Ok(running) = server.serve(server_io).await {
            let _ = running.waiting().await;
        }
    });

    ().serve(client_io).await.unwrap()
}

fn call(name: &'static str, arguments: Value) -> CallToolRequestParams {
    let mut params = CallToolRequestParams::new(name);
    params.arguments = arguments.as_object().cloned();
    params
}

#[tokio::test]
async fn test_filtered_tools_are_not_advertised() {
    let (base_url, _handle) = spawn_mock_clickup().await;
    let client = connect(&base_url, &ToolVisibility::from_lists(None, Some("delete_task"))).await;

    let names: Vec<String> = client
        .list_all_tools()
        .await
        .unwrap()
        .into_iter()
        .map(|tool| tool.name.to_string())
        .collect();

    assert_eq!(names.len(), 49 - DOCUMENT_TOOLS.len() - 1);
    assert!(!names.contains(&"delete_task".to_string()));
    assert!(DOCUMENT_TOOLS.iter().all(|t| !names.contains(&t.to_string())));
    assert!(names.contains(&"get_task".to_string()));

    client.cancel().await.unwrap();
}

#[tokio::test]
async fn test_filtered_tools_are_not_callable() {
    let (base_url, _handle) = spawn_mock_clickup().await;
    let client = connect(&base_url, &ToolVisibility::from_lists(None, Some("delete_task"))).await;

    let disabled = client
        .call_tool(call("delete_task", json!({ "task_id": "t1" })))
        .await;
    let document = client
        .call_tool(call("get_document", json!({ "document_id": "d1" })))
        .await;

    assert!(disabled.unwrap_err().to_string().contains("tool not found"));
    assert!(document.unwrap_err().to_string().contains("tool not found"));

    client.cancel().await.unwrap();
}

#[tokio::test]
async fn test_workspace_argument_routes_the_call() {
    let (base_url, _handle) = spawn_mock_clickup().await;
    let client = connect(&base_url, &ToolVisibility::all()).await;

    let scoped = client
        .call_tool(call("get_task", json!({ "task_id": "t1", "workspace": "client" })))
        .await
        .unwrap();
    let default = client
        .call_tool(call("get_task", json!({ "task_id": "t1" })))
        .await
        .unwrap();

    assert!(!is_error(&scoped));
    assert_eq!(body(&scoped)["path"], "/v2/task/t1");
    assert_eq!(body(&scoped)["authorization"], "pk_client");
    assert_eq!(body(&default)["authorization"], "pk_main");

    client.cancel().await.unwrap();
}

#[tokio::test]
async fn test_unknown_workspace_is_an_error_result_not_a_fault() {
    let (base_url, _handle) = spawn_mock_clickup().await;
    let client = connect(&base_url, &ToolVisibility::all()).await;

    let result = client
        .call_tool(call("get_task", json!({ "task_id": "t1", "workspace": "ghost" })))
        .await
        .unwrap();

    assert!(is_error(&result));
    assert_eq!(
        body(&result)["available_workspaces"],
        json!(["client", "main"])
    );

    client.cancel().await.unwrap();
}
