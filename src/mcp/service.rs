//! MCP transport wiring
//!
//! Streamable HTTP for network clients (nested into an Axum router) and
//! stdio for clients that spawn the server as a subprocess.

use rmcp::{
    ServiceExt,
    transport::{
        io::stdio,
        streamable_http_server::{
            StreamableHttpServerConfig, StreamableHttpService, session::local::LocalSessionManager,
        },
    },
};
use tokio_util::sync::CancellationToken;
use tracing::info;

use super::server::McpServer;

/// Create MCP Streamable HTTP service
///
/// Every session gets a clone of `server`; clones share one workspace
/// registry, so bundles built for one session are reused by the others.
///
/// # Example
/// ```no_run
/// use axum::Router;
/// use tokio_util::sync::CancellationToken;
/// # use clickup_mcp::mcp::{McpServer, create_mcp_service};
/// # fn example(server: McpServer) {
///
/// let ct = CancellationToken::new();
/// let mcp_service = create_mcp_service(server, ct);
///
/// let app: Router = Router::new().nest_service("/mcp", mcp_service);
/// # }
/// ```
pub fn create_mcp_service(
    server: McpServer,
    cancellation_token: CancellationToken,
) -> StreamableHttpService<McpServer, LocalSessionManager> {
    // Returns io::Error to match rmcp's expected signature
    let service_factory = move || -> Result<McpServer, std::io::Error> { Ok(server.clone()) };

    let mut config = StreamableHttpServerConfig::default();
    config.stateful_mode = true;
    config.cancellation_token = cancellation_token;

    StreamableHttpService::new(
        service_factory,
        LocalSessionManager::default().into(),
        config,
    )
}

/// Serve MCP over stdin/stdout until the client disconnects.
pub async fn serve_stdio(server: McpServer) -> Result<(), std::io::Error> {
    info!("Serving MCP over stdio");

    let running = server.serve(stdio()).await.map_err(std::io::Error::other)?;
    running.waiting().await.map_err(std::io::Error::other)?;

    info!("stdio client disconnected");
    Ok(())
}
