//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating to the tools domain.
//!
//! ## Request flow
//!
//! `list_tools` reads the registry and returns every descriptor in
//! registration order. `call_tool` hands the request to the dispatcher,
//! which always answers with a response envelope - the `ServerHandler`
//! methods here never surface a protocol-level error for a tool call.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler,
    model::*,
    service::RequestContext,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::config::Config;
use crate::domains::tools::{ToolDispatcher, ToolRegistry};

/// The main MCP server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp and routes
/// protocol messages to the tool dispatcher. It is cheap to clone; the
/// registry behind it is built once at startup and read-only afterwards.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Dispatcher owning the read-only tool registry.
    dispatcher: ToolDispatcher,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    ///
    /// Registers the fixed tool set; a duplicate tool name makes this fail,
    /// which callers treat as fatal.
    pub fn new(config: Config) -> crate::core::Result<Self> {
        let registry = ToolRegistry::with_builtin_tools()?;

        Ok(Self {
            config: Arc::new(config),
            dispatcher: ToolDispatcher::new(registry),
        })
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Number of registered tools.
    pub fn tool_count(&self) -> usize {
        self.dispatcher.tool_count()
    }

    // ========================================================================
    // Transport Support Methods
    // ========================================================================

    /// List all available tools, in registration order.
    ///
    /// Also used directly by the HTTP transport.
    pub fn list_tools(&self) -> Vec<Tool> {
        self.dispatcher.list_tools()
    }

    /// Call a tool by name.
    ///
    /// Always yields a response envelope - unknown names, invalid arguments,
    /// and handler failures all come back as error envelopes, never as a
    /// transport-level failure. Also used directly by the HTTP transport.
    pub async fn call_tool(&self, name: &str, arguments: JsonObject) -> CallToolResult {
        self.dispatcher.call_tool(name, arguments).await
    }
}

impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "This is a template MCP server. It provides a small set of example tools."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        info!("Listing tools");
        Ok(ListToolsResult {
            tools: self.dispatcher.list_tools(),
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context), fields(tool = %request.name))]
    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let arguments = request.arguments.unwrap_or_default();
        Ok(self.dispatcher.call_tool(&request.name, arguments).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;

    fn server() -> McpServer {
        McpServer::new(Config::default()).unwrap()
    }

    fn text_of(result: &CallToolResult) -> &str {
        match &result.content[0].raw {
            RawContent::Text(text) => &text.text,
            _ => panic!("Expected text content"),
        }
    }

    #[test]
    fn test_server_metadata() {
        let server = server();
        assert_eq!(server.name(), "mcp-server-template");
        assert_eq!(server.version(), env!("CARGO_PKG_VERSION"));
        assert_eq!(server.tool_count(), 3);
    }

    #[test]
    fn test_get_info_advertises_tools_only() {
        let info = server().get_info();
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.resources.is_none());
        assert!(info.capabilities.prompts.is_none());
    }

    #[test]
    fn test_list_matches_tool_count() {
        let server = server();
        assert_eq!(server.list_tools().len(), server.tool_count());
    }

    #[tokio::test]
    async fn test_call_tool_returns_envelope_for_unknown_name() {
        let server = server();
        let result = server.call_tool("bogus", serde_json::Map::new()).await;
        assert!(result.is_error.unwrap_or(false));
        assert_eq!(text_of(&result), "Unknown tool: bogus");
    }

    #[tokio::test]
    async fn test_call_tool_success() {
        let server = server();
        let args = serde_json::json!({"input": "hi"})
            .as_object()
            .cloned()
            .unwrap();
        let result = server.call_tool("example_tool", args).await;
        assert!(!result.is_error.unwrap_or(false));
        assert_eq!(text_of(&result), "Received input: hi");
    }
}
