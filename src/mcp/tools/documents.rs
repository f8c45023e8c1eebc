//! MCP tools for ClickUp docs and doc pages.
//!
//! Only registered when document support is enabled.

use rmcp::{
    ErrorData as McpError, handler::server::wrapper::Parameters, model::CallToolResult, schemars,
    schemars::JsonSchema, tool, tool_router,
};
use serde::{Deserialize, Serialize};

use super::bundle_or_return;
use crate::clickup::documents::{DocParent, NewDocument, PageFields};
use crate::mcp::McpServer;
use crate::mcp::envelope;
use crate::workspace::WorkspaceScope;

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct ListDocumentsParams {
    #[serde(flatten)]
    pub scope: WorkspaceScope,
    #[schemars(description = "Only docs under this parent (space, folder or list ID)")]
    pub parent_id: Option<String>,
    #[schemars(description = "Include archived docs (default: false)")]
    pub archived: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct DocumentIdParams {
    #[serde(flatten)]
    pub scope: WorkspaceScope,
    #[schemars(description = "Doc ID")]
    pub document_id: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CreateDocumentParams {
    #[serde(flatten)]
    pub scope: WorkspaceScope,
    #[schemars(description = "Doc name")]
    pub name: String,
    #[schemars(description = "Parent ID (space, folder, list or workspace)")]
    pub parent_id: Option<String>,
    #[schemars(
        description = "Parent type, required with parent_id: 4 = space, 5 = folder, 6 = list, 7 = everything, 12 = workspace"
    )]
    pub parent_type: Option<u8>,
    #[schemars(description = "Visibility: 'PUBLIC', 'PRIVATE', 'PERSONAL' or 'HIDDEN'")]
    pub visibility: Option<String>,
    #[schemars(description = "Create an initial empty page (default: true)")]
    pub create_page: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ListDocumentPagesParams {
    #[serde(flatten)]
    pub scope: WorkspaceScope,
    #[schemars(description = "Doc ID")]
    pub document_id: String,
    #[schemars(description = "Maximum nesting depth to return (-1 for all)")]
    pub max_page_depth: Option<i32>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct DocumentPageParams {
    #[serde(flatten)]
    pub scope: WorkspaceScope,
    #[schemars(description = "Doc ID")]
    pub document_id: String,
    #[schemars(description = "Page ID")]
    pub page_id: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CreateDocumentPageParams {
    #[serde(flatten)]
    pub scope: WorkspaceScope,
    #[schemars(description = "Doc ID")]
    pub document_id: String,
    #[schemars(description = "Page name")]
    pub name: String,
    #[schemars(description = "Page subtitle")]
    pub sub_title: Option<String>,
    #[schemars(description = "Page content in markdown")]
    pub content: Option<String>,
    #[schemars(description = "Parent page ID, to nest the page")]
    pub parent_page_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct UpdateDocumentPageParams {
    #[serde(flatten)]
    pub scope: WorkspaceScope,
    #[schemars(description = "Doc ID")]
    pub document_id: String,
    #[schemars(description = "Page ID")]
    pub page_id: String,
    #[schemars(description = "New page name (optional)")]
    pub name: Option<String>,
    #[schemars(description = "New subtitle (optional)")]
    pub sub_title: Option<String>,
    #[schemars(description = "Content in markdown (optional)")]
    pub content: Option<String>,
    #[schemars(description = "How to apply content: 'replace' (default), 'append' or 'prepend'")]
    pub content_edit_mode: Option<String>,
}

const MARKDOWN: &str = "text/md";

#[tool_router(router = document_tools_router, vis = "pub")]
impl McpServer {
    #[tool(description = "List the docs of a workspace, optionally under one parent.")]
    pub async fn list_documents(
        &self,
        Parameters(params): Parameters<ListDocumentsParams>,
    ) -> Result<CallToolResult, McpError> {
        let bundle = bundle_or_return!(self, &params.scope);
        Ok(envelope::respond(
            bundle
                .documents
                .list(params.parent_id.as_deref(), params.archived.unwrap_or(false))
                .await,
        ))
    }

    #[tool(description = "Get a doc's metadata by ID. Use list_document_pages for its content.")]
    pub async fn get_document(
        &self,
        Parameters(params): Parameters<DocumentIdParams>,
    ) -> Result<CallToolResult, McpError> {
        let bundle = bundle_or_return!(self, &params.scope);
        Ok(envelope::respond(
            bundle.documents.get(&params.document_id).await,
        ))
    }

    #[tool(description = "Create a doc, optionally under a space, folder or list.")]
    pub async fn create_document(
        &self,
        Parameters(params): Parameters<CreateDocumentParams>,
    ) -> Result<CallToolResult, McpError> {
        let bundle = bundle_or_return!(self, &params.scope);

        let parent = match (params.parent_id, params.parent_type) {
            (Some(id), Some(kind)) => Some(DocParent { id, kind }),
            (None, _) => None,
            (Some(_), None) => {
                return Ok(envelope::fail(
                    "parent_type is required when parent_id is set",
                    None,
                ));
            }
        };

        let doc = NewDocument {
            name: params.name,
            parent,
            visibility: params.visibility,
            create_page: params.create_page.unwrap_or(true),
        };
        Ok(envelope::respond(bundle.documents.create(&doc).await))
    }

    #[tool(description = "List the pages of a doc.")]
    pub async fn list_document_pages(
        &self,
        Parameters(params): Parameters<ListDocumentPagesParams>,
    ) -> Result<CallToolResult, McpError> {
        let bundle = bundle_or_return!(self, &params.scope);
        Ok(envelope::respond(
            bundle
                .documents
                .pages(&params.document_id, params.max_page_depth)
                .await,
        ))
    }

    #[tool(description = "Get one doc page with its markdown content.")]
    pub async fn get_document_page(
        &self,
        Parameters(params): Parameters<DocumentPageParams>,
    ) -> Result<CallToolResult, McpError> {
        let bundle = bundle_or_return!(self, &params.scope);
        Ok(envelope::respond(
            bundle
                .documents
                .page(&params.document_id, &params.page_id)
                .await,
        ))
    }

    #[tool(description = "Add a page to a doc.")]
    pub async fn create_document_page(
        &self,
        Parameters(params): Parameters<CreateDocumentPageParams>,
    ) -> Result<CallToolResult, McpError> {
        let bundle = bundle_or_return!(self, &params.scope);
        let fields = PageFields {
            name: Some(params.name),
            sub_title: params.sub_title,
            content: params.content,
            parent_page_id: params.parent_page_id,
            content_format: Some(MARKDOWN.to_string()),
            ..Default::default()
        };
        Ok(envelope::respond(
            bundle
                .documents
                .create_page(&params.document_id, &fields)
                .await,
        ))
    }

    #[tool(description = "Edit a doc page. Content replaces the page body unless content_edit_mode says otherwise.")]
    pub async fn update_document_page(
        &self,
        Parameters(params): Parameters<UpdateDocumentPageParams>,
    ) -> Result<CallToolResult, McpError> {
        let bundle = bundle_or_return!(self, &params.scope);
        let fields = PageFields {
            name: params.name,
            sub_title: params.sub_title,
            content_format: params.content.as_ref().map(|_| MARKDOWN.to_string()),
            content: params.content,
            content_edit_mode: params.content_edit_mode,
            ..Default::default()
        };
        Ok(envelope::respond(
            bundle
                .documents
                .update_page(&params.document_id, &params.page_id, &fields)
                .await,
        ))
    }
}

#[cfg(test)]
#[path = "documents_test.rs"]
mod documents_test;
