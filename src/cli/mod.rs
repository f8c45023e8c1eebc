//! Composition root: parse settings, load workspaces, start the transport.

mod error;

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use clap::{Parser, ValueEnum};
use serde_json::Value;
use tokio_util::sync::CancellationToken;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::clickup::HttpBundleFactory;
use crate::config::{ConfigLayer, ConfigResult, Settings, ToolList, credentials};
use crate::mcp::{McpServer, ToolVisibility, create_mcp_service, serve_stdio};
use crate::workspace::{Dispatcher, WorkspaceRegistry};

pub use error::{AppError, AppResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Transport {
    /// MCP over stdin/stdout
    Stdio,
    /// MCP Streamable HTTP on --host/--port
    Http,
}

#[derive(Parser, Debug)]
#[command(name = "clickup-mcp")]
#[command(author, version, about = "MCP server for one or more ClickUp workspaces", long_about = None)]
pub struct Cli {
    /// ClickUp API token for single-workspace setups
    #[arg(long, env = "CLICKUP_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// ClickUp team (workspace) id for single-workspace setups
    #[arg(long, env = "CLICKUP_TEAM_ID")]
    pub team_id: Option<String>,

    /// JSON object with `default` and `workspaces` (overrides --api-key/--team-id)
    #[arg(long, env = "CLICKUP_WORKSPACES", hide_env_values = true)]
    pub workspaces: Option<String>,

    /// YAML or JSON config file; flags and env vars take precedence
    #[arg(long, env = "CLICKUP_MCP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Comma-separated tools to expose (overrides --disabled-tools)
    #[arg(long, env = "ENABLED_TOOLS")]
    pub enabled_tools: Option<String>,

    /// Comma-separated tools to hide
    #[arg(long, env = "DISABLED_TOOLS")]
    pub disabled_tools: Option<String>,

    /// Register the document tools
    #[arg(
        long,
        env = "DOCUMENT_SUPPORT",
        num_args = 0..=1,
        default_missing_value = "true",
        value_parser = clap::builder::BoolishValueParser::new()
    )]
    pub document_support: Option<bool>,

    /// MCP transport
    #[arg(long, env = "MCP_TRANSPORT", value_enum, default_value = "stdio")]
    pub transport: Transport,

    /// Host address to bind to (http transport)
    #[arg(long, env = "HOST", default_value = "127.0.0.1")]
    pub host: IpAddr,

    /// Port to listen on (http transport)
    #[arg(short, long, env = "PORT", default_value = "3231")]
    pub port: u16,

    /// ClickUp API root
    #[arg(long, env = "CLICKUP_API_BASE_URL")]
    pub api_base_url: Option<String>,

    /// Log level used when RUST_LOG is not set
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl Cli {
    /// The settings carried by flags and env vars alone.
    pub fn layer(&self) -> ConfigLayer {
        ConfigLayer {
            api_key: self.api_key.clone(),
            team_id: self.team_id.clone(),
            workspaces: self.workspaces.clone().map(Value::String),
            enabled_tools: self.enabled_tools.clone().map(ToolList::Csv),
            disabled_tools: self.disabled_tools.clone().map(ToolList::Csv),
            document_support: self.document_support,
            api_base_url: self.api_base_url.clone(),
        }
    }

    /// Merge flags over the config file (if any) and resolve defaults.
    pub fn settings(&self) -> ConfigResult<Settings> {
        let file = match &self.config {
            Some(path) => ConfigLayer::from_file(path)?,
            None => ConfigLayer::default(),
        };
        Ok(Settings::from(self.layer().over(file)))
    }
}

/// Initialize tracing on stderr; stdout belongs to the stdio transport.
fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("clickup_mcp={},tower_http=warn", log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Build the MCP server from resolved settings.
pub fn build_server(settings: Settings) -> AppResult<McpServer> {
    let workspaces = credentials::load(&settings.credentials)?;
    info!(
        mode = ?workspaces.mode(),
        default = workspaces.default_key(),
        workspaces = ?workspaces.keys(),
        "Loaded workspace configuration"
    );

    let factory = HttpBundleFactory::new(&settings.api_base_url)?;
    let registry = Arc::new(WorkspaceRegistry::new(workspaces, Box::new(factory)));
    let visibility = ToolVisibility::new(settings.enabled_tools, settings.disabled_tools);

    Ok(McpServer::new(
        Dispatcher::new(registry),
        &visibility,
        settings.document_support,
    ))
}

async fn serve_http(server: McpServer, host: IpAddr, port: u16) -> AppResult<()> {
    let ct = CancellationToken::new();
    let app = Router::new()
        .nest_service("/mcp", create_mcp_service(server, ct.clone()))
        .layer(TraceLayer::new_for_http());

    let addr = SocketAddr::new(host, port);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| AppError::Bind {
            addr: addr.to_string(),
            source,
        })?;
    info!("MCP server listening on http://{}/mcp", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            if let Err(e) = tokio::signal::ctrl_c().await {
                warn!("Failed to listen for shutdown signal: {}", e);
            }
            info!("Shutting down");
            ct.cancel();
        })
        .await?;
    Ok(())
}

pub async fn run() -> AppResult<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let server = build_server(cli.settings()?)?;

    match cli.transport {
        Transport::Stdio => serve_stdio(server).await?,
        Transport::Http => serve_http(server, cli.host, cli.port).await?,
    }
    Ok(())
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;
