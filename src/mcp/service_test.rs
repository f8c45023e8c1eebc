//! Tests for MCP Streamable HTTP service integration

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use tokio_util::sync::CancellationToken;
use tower::ServiceExt;

use super::create_mcp_service;
use super::test_support::server;

/// The service can be nested into a router and only answers under its prefix.
#[tokio::test]
async fn test_mcp_service_with_router() {
    let service = create_mcp_service(server("http://127.0.0.1:1"), CancellationToken::new());
    let app = Router::new().nest_service("/mcp", service);

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    // Root path should return 404 (only /mcp is mounted)
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// The service is mounted and answers protocol requests itself.
#[tokio::test]
async fn test_mcp_service_is_mounted() {
    let service = create_mcp_service(server("http://127.0.0.1:1"), CancellationToken::new());
    let app = Router::new().nest_service("/mcp", service);

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/mcp")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    // rmcp rejects the bare GET, but the route exists
    assert_ne!(
        response.status(),
        StatusCode::NOT_FOUND,
        "Service should be mounted and responding"
    );
}
