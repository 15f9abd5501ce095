//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating to the tools domain.
//!
//! ## Tool Architecture
//!
//! Tools are defined in `domains/tools/definitions/` with one file per tool
//! and registered once in `ToolRegistry::with_default_tools()`. This handler
//! only lists the registry and forwards calls to the `Dispatcher`.
//! **Adding a new tool does NOT require modifying this file!**

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, model::*, service::RequestContext,
};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use super::config::Config;
use super::error::Result;
use super::transport::{TransportConfig, TransportService};
use crate::domains::tools::{Dispatcher, Invocation, ToolDefinition, ToolError};

const INSTRUCTIONS: &str = "Senior Kotlin advisor. Tools: analyze_architecture, \
generate_design_pattern, check_best_practices, generate_test_template, suggest_cloud_solution.";

/// The main MCP server handler.
///
/// Implements `ServerHandler` from rmcp. Cloning is cheap and every clone
/// shares the same read-only tool registry.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Dispatcher over the tool registry.
    dispatcher: Dispatcher,
}

impl McpServer {
    /// Create a new MCP server with the default tool catalog.
    ///
    /// Fails if the catalog cannot be built, in which case the server
    /// must not start.
    pub fn new(config: Config) -> Result<Self> {
        Ok(Self::with_dispatcher(config, Dispatcher::with_default_tools()?))
    }

    /// Create a server over an existing dispatcher.
    pub fn with_dispatcher(config: Config, dispatcher: Dispatcher) -> Self {
        info!("{} tools registered", dispatcher.registry().len());
        Self {
            config: Arc::new(config),
            dispatcher,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Server instructions advertised to clients.
    pub fn instructions(&self) -> &'static str {
        INSTRUCTIONS
    }

    /// Serve over the given transport until it shuts down.
    pub async fn run(self, transport: TransportConfig) -> Result<()> {
        TransportService::new(transport).run(self).await?;
        Ok(())
    }

    /// All registered tools as rmcp models, in registration order.
    pub fn tools(&self) -> Vec<Tool> {
        self.dispatcher
            .registry()
            .definitions()
            .map(to_tool)
            .collect()
    }

    /// Decode and dispatch one tool call.
    pub fn call(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> std::result::Result<CallToolResult, ToolError> {
        let invocation = Invocation::from_json(name, arguments)?;
        debug!(
            "Dispatching '{}' with {} argument(s)",
            invocation.tool_name,
            invocation.arguments.len()
        );

        let text = self.dispatcher.dispatch(&invocation)?;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    // ========================================================================
    // HTTP Transport Support Methods
    // ========================================================================

    /// List all available tools (for HTTP transport).
    pub fn list_tools_json(&self) -> Vec<serde_json::Value> {
        self.dispatcher
            .registry()
            .definitions()
            .map(|d| {
                serde_json::json!({
                    "name": d.name,
                    "description": d.description,
                    "inputSchema": d.input_schema()
                })
            })
            .collect()
    }

    /// Call a tool by name (for HTTP transport).
    pub fn call_tool_json(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> std::result::Result<serde_json::Value, String> {
        let arguments = match arguments {
            serde_json::Value::Object(map) => Some(map),
            serde_json::Value::Null => None,
            _ => return Err("Tool arguments must be a JSON object".to_string()),
        };

        let result = self.call(name, arguments).map_err(|e| {
            warn!("Tool call '{}' rejected: {}", name, e);
            e.to_string()
        })?;
        serde_json::to_value(&result).map_err(|e| e.to_string())
    }
}

/// Convert a registry definition into the rmcp tool model.
fn to_tool(definition: &ToolDefinition) -> Tool {
    Tool {
        name: definition.name.clone().into(),
        description: Some(definition.description.clone().into()),
        input_schema: Arc::new(definition.input_schema()),
        annotations: None,
        output_schema: None,
        icons: None,
        meta: None,
        title: None,
    }
}

impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }

    #[instrument(skip(self, _request, _context))]
    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListToolsResult, McpError> {
        info!("Listing tools");
        Ok(ListToolsResult {
            tools: self.tools(),
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context), fields(tool = %request.name))]
    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<CallToolResult, McpError> {
        info!("Calling tool: {}", request.name);
        self.call(request.name.as_ref(), request.arguments)
            .map_err(|e| {
                warn!("Tool call rejected: {}", e);
                McpError::invalid_params(e.to_string(), None)
            })
    }
}
