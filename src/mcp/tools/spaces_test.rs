//! Tests for space and tag MCP tools

use rmcp::handler::server::wrapper::Parameters;

use super::*;
use crate::clickup::test_support::spawn_mock_clickup;
use crate::mcp::test_support::{body, server};
use crate::workspace::WorkspaceScope;

#[tokio::test]
async fn test_get_space_and_tags() {
    let (base_url, _handle) = spawn_mock_clickup().await;
    let server = server(&base_url);

    let space = server
        .get_space(Parameters(SpaceIdParams {
            scope: WorkspaceScope::default_workspace(),
            space_id: "s1".to_string(),
        }))
        .await
        .unwrap();
    let tags = server
        .get_space_tags(Parameters(SpaceIdParams {
            scope: WorkspaceScope::default_workspace(),
            space_id: "s1".to_string(),
        }))
        .await
        .unwrap();

    assert_eq!(body(&space)["path"], "/v2/space/s1");
    assert_eq!(body(&tags)["path"], "/v2/space/s1/tag");
}

#[tokio::test]
async fn test_get_spaces_archived_flag() {
    let (base_url, _handle) = spawn_mock_clickup().await;
    let server = server(&base_url);

    let result = server
        .get_spaces(Parameters(GetSpacesParams {
            scope: WorkspaceScope::new(Some("client")),
            archived: Some(true),
        }))
        .await
        .unwrap();

    assert_eq!(body(&result)["spaces"][0]["name"], "Space of 222");
}

#[tokio::test]
async fn test_tag_add_and_remove_use_task_tag_path() {
    let (base_url, _handle) = spawn_mock_clickup().await;
    let server = server(&base_url);
    let params = || TaskTagParams {
        scope: WorkspaceScope::new(Some("client")),
        task_id: "abc".to_string(),
        tag_name: "urgent".to_string(),
    };

    let added = server.add_tag_to_task(Parameters(params())).await.unwrap();
    let removed = server
        .remove_tag_from_task(Parameters(params()))
        .await
        .unwrap();

    let added = body(&added);
    let removed = body(&removed);
    assert_eq!(added["method"], "POST");
    assert_eq!(added["path"], "/v2/task/abc/tag/urgent");
    assert_eq!(added["authorization"], "pk_client");
    assert_eq!(removed["method"], "DELETE");
    assert_eq!(removed["path"], "/v2/task/abc/tag/urgent");
}
