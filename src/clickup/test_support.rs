//! In-process stand-in for the ClickUp API.
//!
//! Unknown routes echo the request back (method, path, query, authorization
//! header and JSON body) so tests can assert on what the client sent.

use axum::{
    Json, Router,
    extract::Path,
    http::{HeaderMap, Method, StatusCode, Uri, header::AUTHORIZATION},
    response::IntoResponse,
    routing::get,
};
use serde_json::{Value, json};
use tokio::net::TcpListener;

use crate::config::WorkspaceCredential;

pub(crate) fn credential(token: &str, team_id: &str) -> WorkspaceCredential {
    WorkspaceCredential {
        token: token.to_string(),
        team_id: team_id.to_string(),
        description: None,
    }
}

fn auth(headers: &HeaderMap) -> String {
    headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

async fn echo(method: Method, uri: Uri, headers: HeaderMap, body: String) -> Json<Value> {
    let body = serde_json::from_str::<Value>(&body).unwrap_or(Value::Null);
    Json(json!({
        "method": method.as_str(),
        "path": uri.path(),
        "query": uri.query(),
        "authorization": auth(&headers),
        "body": body,
    }))
}

async fn spaces(Path(team_id): Path<String>, headers: HeaderMap) -> Json<Value> {
    Json(json!({
        "spaces": [
            { "id": "s1", "name": format!("Space of {}", team_id), "owner": auth(&headers) }
        ]
    }))
}

async fn folders(Path(_space_id): Path<String>) -> Json<Value> {
    Json(json!({
        "folders": [
            { "id": "f1", "name": "Roadmap", "lists": [ { "id": "l1", "name": "Q1" } ] }
        ]
    }))
}

async fn folderless_lists(Path(_space_id): Path<String>) -> Json<Value> {
    Json(json!({ "lists": [ { "id": "l2", "name": "Inbox" } ] }))
}

async fn teams(headers: HeaderMap) -> Json<Value> {
    Json(json!({
        "teams": [
            {
                "id": "111",
                "name": "Main",
                "members": [ { "user": { "id": 1, "username": auth(&headers) } } ]
            },
            { "id": "222", "name": "Client", "members": [] }
        ]
    }))
}

async fn missing_list(Path(_list_id): Path<String>) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "err": "List not found", "ECODE": "SUBCAT_013" })),
    )
}

async fn empty_delete(Path(_task_id): Path<String>) -> StatusCode {
    StatusCode::OK
}

async fn plain_error() -> impl IntoResponse {
    (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded")
}

/// Spawn the mock API on an ephemeral port and return its base URL.
pub(crate) async fn spawn_mock_clickup() -> (String, tokio::task::JoinHandle<()>) {
    let app = Router::new()
        .route("/v2/team", get(teams))
        .route("/v2/team/{team_id}/space", get(spaces).fallback(echo))
        .route("/v2/space/{space_id}/folder", get(folders).fallback(echo))
        .route("/v2/space/{space_id}/list", get(folderless_lists).fallback(echo))
        .route("/v2/list/{list_id}", get(missing_list).fallback(echo))
        .route(
            "/v2/task/{task_id}",
            axum::routing::delete(empty_delete).fallback(echo),
        )
        .route("/v2/broken", get(plain_error))
        .fallback(echo);

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock ClickUp server");
    let addr = listener.local_addr().expect("Failed to read local addr");

    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Mock server failed");
    });

    (format!("http://{}", addr), handle)
}
