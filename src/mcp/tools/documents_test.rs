//! Tests for document MCP tools

use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;

use super::*;
use crate::clickup::test_support::spawn_mock_clickup;
use crate::mcp::test_support::{body, is_error, server};
use crate::workspace::WorkspaceScope;

#[tokio::test]
async fn test_documents_use_v3_workspace_paths() {
    let (base_url, _handle) = spawn_mock_clickup().await;
    let server = server(&base_url);

    let result = server
        .list_documents(Parameters(ListDocumentsParams {
            scope: WorkspaceScope::new(Some("client")),
            parent_id: Some("s1".to_string()),
            archived: None,
        }))
        .await
        .unwrap();

    let body = body(&result);
    assert_eq!(body["path"], "/v3/workspaces/222/docs");
    assert_eq!(body["query"], "archived=false&parent_id=s1");
    assert_eq!(body["authorization"], "pk_client");
}

#[tokio::test]
async fn test_create_document_with_parent() {
    let (base_url, _handle) = spawn_mock_clickup().await;
    let server = server(&base_url);

    let result = server
        .create_document(Parameters(CreateDocumentParams {
            scope: WorkspaceScope::default_workspace(),
            name: "Runbook".to_string(),
            parent_id: Some("s1".to_string()),
            parent_type: Some(4),
            visibility: None,
            create_page: None,
        }))
        .await
        .unwrap();

    assert_eq!(
        body(&result)["body"],
        json!({
            "name": "Runbook",
            "parent": { "id": "s1", "type": 4 },
            "create_page": true
        })
    );
}

#[tokio::test]
async fn test_create_document_parent_without_type_is_rejected() {
    let server = server("http://127.0.0.1:1");

    let result = server
        .create_document(Parameters(CreateDocumentParams {
            scope: WorkspaceScope::default_workspace(),
            name: "Runbook".to_string(),
            parent_id: Some("s1".to_string()),
            parent_type: None,
            visibility: None,
            create_page: None,
        }))
        .await
        .unwrap();

    assert!(is_error(&result));
    assert_eq!(
        body(&result),
        json!({ "error": "parent_type is required when parent_id is set" })
    );
}

#[tokio::test]
async fn test_pages_listing_and_fetch() {
    let (base_url, _handle) = spawn_mock_clickup().await;
    let server = server(&base_url);

    let listing = server
        .list_document_pages(Parameters(ListDocumentPagesParams {
            scope: WorkspaceScope::default_workspace(),
            document_id: "d1".to_string(),
            max_page_depth: Some(-1),
        }))
        .await
        .unwrap();
    let page = server
        .get_document_page(Parameters(DocumentPageParams {
            scope: WorkspaceScope::default_workspace(),
            document_id: "d1".to_string(),
            page_id: "p1".to_string(),
        }))
        .await
        .unwrap();

    let listing = body(&listing);
    assert_eq!(listing["path"], "/v3/workspaces/111/docs/d1/pageListing");
    assert_eq!(listing["query"], "max_page_depth=-1");
    assert_eq!(body(&page)["path"], "/v3/workspaces/111/docs/d1/pages/p1");
}

#[tokio::test]
async fn test_page_content_is_sent_as_markdown() {
    let (base_url, _handle) = spawn_mock_clickup().await;
    let server = server(&base_url);

    let created = server
        .create_document_page(Parameters(CreateDocumentPageParams {
            scope: WorkspaceScope::default_workspace(),
            document_id: "d1".to_string(),
            name: "Intro".to_string(),
            sub_title: None,
            content: Some("# Hello".to_string()),
            parent_page_id: None,
        }))
        .await
        .unwrap();
    let updated = server
        .update_document_page(Parameters(UpdateDocumentPageParams {
            scope: WorkspaceScope::default_workspace(),
            document_id: "d1".to_string(),
            page_id: "p1".to_string(),
            name: Some("Renamed".to_string()),
            sub_title: None,
            content: None,
            content_edit_mode: None,
        }))
        .await
        .unwrap();

    assert_eq!(
        body(&created)["body"],
        json!({ "name": "Intro", "content": "# Hello", "content_format": "text/md" })
    );
    let updated = body(&updated);
    assert_eq!(updated["method"], "PUT");
    assert_eq!(updated["body"], json!({ "name": "Renamed" }));
}
