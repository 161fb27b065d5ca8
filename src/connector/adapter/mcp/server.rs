use std::borrow::Cow;
use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use rmcp::model::{
    CallToolRequestParams, CallToolResult, Content, Implementation, ListToolsResult,
    PaginatedRequestParams, ProtocolVersion, ServerCapabilities, ServerInfo, Tool as McpTool,
};
use rmcp::service::{RequestContext, RoleServer};
use rmcp::transport::io::stdio;
use rmcp::transport::streamable_http_server::session::local::LocalSessionManager;
use rmcp::transport::streamable_http_server::{StreamableHttpServerConfig, StreamableHttpService};
use rmcp::{ErrorData, ServerHandler, ServiceExt};
use tracing::info;

use crate::connector::api::Container;
use crate::domain::{ToolInvocation, ToolKind, ToolResult};

const SERVER_NAME: &str = env!("CARGO_PKG_NAME");
const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

/// MCP Server that exposes the architecture consultation tools
#[derive(Clone)]
pub struct ArchitectureMcpServer {
    container: Arc<Container>,
}

impl ArchitectureMcpServer {
    pub fn new(container: Arc<Container>) -> Self {
        Self { container }
    }

    /// Tool descriptors advertised by `tools/list`.
    pub fn tools() -> Vec<McpTool> {
        ToolKind::ALL
            .into_iter()
            .map(|kind| McpTool {
                name: Cow::Borrowed(kind.name()),
                title: None,
                description: Some(Cow::Borrowed(kind.description())),
                input_schema: Arc::new(kind.input_schema()),
                output_schema: None,
                annotations: None,
                execution: None,
                icons: None,
                meta: None,
            })
            .collect()
    }

    /// Serve over stdin/stdout until the client disconnects.
    pub async fn serve_stdio(self) -> Result<()> {
        info!("Architecture MCP server running on stdio");
        let service = self.serve(stdio()).await?;
        service.waiting().await?;
        Ok(())
    }

    /// Serve the streamable HTTP transport at `/mcp` until Ctrl-C.
    pub async fn serve_http(self, addr: SocketAddr) -> Result<()> {
        let service = StreamableHttpService::new(
            move || Ok(self.clone()),
            LocalSessionManager::default().into(),
            StreamableHttpServerConfig::default(),
        );
        let router = axum::Router::new().nest_service("/mcp", service);
        let listener = tokio::net::TcpListener::bind(addr).await?;

        info!("Architecture MCP server listening on http://{}/mcp", addr);
        axum::serve(listener, router)
            .with_graceful_shutdown(async {
                let _ = tokio::signal::ctrl_c().await;
            })
            .await?;
        Ok(())
    }
}

impl From<ToolResult> for CallToolResult {
    fn from(result: ToolResult) -> Self {
        let content = result
            .content()
            .iter()
            .map(|c| Content::text(c.text()))
            .collect();
        if result.is_error() {
            CallToolResult::error(content)
        } else {
            CallToolResult::success(content)
        }
    }
}

impl ServerHandler for ArchitectureMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: SERVER_NAME.to_string(),
                version: SERVER_VERSION.to_string(),
                ..Default::default()
            },
            instructions: Some(
                "Software architecture consultation server. Use consult_architecture for general \
                 questions, analyze_code_architecture to review a code snippet, \
                 design_system_architecture to turn requirements into a design, and \
                 review_technical_decision to evaluate a decision in context."
                    .into(),
            ),
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, ErrorData> {
        Ok(ListToolsResult::with_all_items(Self::tools()))
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, ErrorData> {
        let invocation = ToolInvocation::new(request.name.to_string())
            .with_arguments(request.arguments.unwrap_or_default());

        let result = self.container.dispatch_use_case().execute(invocation).await;
        Ok(result.into())
    }
}
