use super::*;
use crate::clickup::test_support::{credential, spawn_mock_clickup};

fn client_for(base_url: &str, token: &str) -> ClickUpClient {
    ClickUpClient::new(
        http_client().unwrap(),
        base_url,
        &credential(token, "111"),
    )
}

#[test]
fn test_new_trims_trailing_slash() {
    let client = client_for("http://localhost:9999/api/", "pk_a");
    assert_eq!(client.base_url(), "http://localhost:9999/api");
    assert_eq!(client.team_id(), "111");
}

#[tokio::test]
async fn test_requests_carry_workspace_token() {
    let (base_url, _server) = spawn_mock_clickup().await;
    let client = client_for(&base_url, "pk_secret");

    let body = client.send(client.get("/v2/anything")).await.unwrap();

    assert_eq!(body["authorization"], "pk_secret");
    assert_eq!(body["method"], "GET");
    assert_eq!(body["path"], "/v2/anything");
}

#[tokio::test]
async fn test_post_sends_json_body() {
    let (base_url, _server) = spawn_mock_clickup().await;
    let client = client_for(&base_url, "pk_a");

    let body = client
        .send(
            client
                .post("v2/list/l1/task")
                .json(&serde_json::json!({"name": "Write docs"})),
        )
        .await
        .unwrap();

    assert_eq!(body["method"], "POST");
    assert_eq!(body["path"], "/v2/list/l1/task");
    assert_eq!(body["body"]["name"], "Write docs");
}

#[tokio::test]
async fn test_empty_success_body_becomes_empty_object() {
    let (base_url, _server) = spawn_mock_clickup().await;
    let client = client_for(&base_url, "pk_a");

    let body = client.send(client.delete("/v2/task/t1")).await.unwrap();

    assert_eq!(body, serde_json::json!({}));
}

#[tokio::test]
async fn test_error_uses_clickup_err_field() {
    let (base_url, _server) = spawn_mock_clickup().await;
    let client = client_for(&base_url, "pk_a");

    let err = client.send(client.get("/v2/list/nope")).await.unwrap_err();

    assert_eq!(err.status(), Some(404));
    assert_eq!(err.to_string(), "ClickUp API error (404): List not found");
}

#[tokio::test]
async fn test_error_falls_back_to_raw_body() {
    let (base_url, _server) = spawn_mock_clickup().await;
    let client = client_for(&base_url, "pk_a");

    let err = client.send(client.get("/v2/broken")).await.unwrap_err();

    match err {
        ApiError::Status { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "upstream exploded");
        }
        other => panic!("Expected Status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_connection_failure_is_reported() {
    // Nothing listens on port 9 locally.
    let client = client_for("http://127.0.0.1:9", "pk_a");

    let err = client.send(client.get("/v2/team")).await.unwrap_err();

    assert!(matches!(err, ApiError::ConnectionFailed { .. }));
    assert_eq!(err.status(), None);
}
