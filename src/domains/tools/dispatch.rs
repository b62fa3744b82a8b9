//! Tool dispatch - routes list and call requests against the registry.
//!
//! This is the single point where every tool invocation is resolved,
//! validated, executed, and wrapped. Whatever happens - unknown name, schema
//! violation, handler error, even a handler panic - the caller receives
//! exactly one response envelope; no failure escapes this boundary, so one
//! misbehaving tool cannot take down the server or unrelated requests.
//!
//! No timeout or cancellation is applied here: a hung handler stalls only
//! its own request. Deadlines are the transport's responsibility.

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use rmcp::model::{CallToolResult, Content, JsonObject, Tool};
use tracing::{info, warn};

use super::error::ToolError;
use super::registry::ToolRegistry;
use super::schema;

/// Stateless request router over a read-only [`ToolRegistry`].
#[derive(Clone)]
pub struct ToolDispatcher {
    registry: Arc<ToolRegistry>,
}

impl ToolDispatcher {
    /// Create a dispatcher owning the given registry.
    pub fn new(registry: ToolRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }

    /// Every registered descriptor, in registration order. Never fails.
    pub fn list_tools(&self) -> Vec<Tool> {
        self.registry.list()
    }

    /// Number of registered tools.
    pub fn tool_count(&self) -> usize {
        self.registry.len()
    }

    /// Route a call request to its handler and wrap the outcome.
    ///
    /// Lookup is by exact name. Arguments are validated against the tool's
    /// declared schema before the handler runs; the handler is awaited to
    /// completion (or failure) exactly once.
    pub async fn call_tool(&self, name: &str, arguments: JsonObject) -> CallToolResult {
        let entry = match self.registry.lookup(name) {
            Some(entry) => entry,
            None => {
                warn!("Unknown tool requested: {}", name);
                return error_envelope(ToolError::unknown_tool(name).to_string());
            }
        };

        if let Err(e) = schema::validate(entry.input_schema(), &arguments) {
            warn!("Rejected call to '{}': {}", name, e);
            return error_envelope(e.to_string());
        }

        info!("Calling tool: {}", name);
        let invocation = AssertUnwindSafe(entry.handler().call(arguments)).catch_unwind();
        match invocation.await {
            Ok(Ok(result)) => result,
            Ok(Err(e)) => {
                warn!("Tool '{}' failed: {}", name, e);
                error_envelope(e.to_string())
            }
            Err(panic) => {
                warn!("Tool '{}' panicked", name);
                error_envelope(panic_message(panic))
            }
        }
    }
}

/// Build the uniform error envelope: exactly one text content item carrying
/// the failure message, with the error flag set.
fn error_envelope(message: impl Into<String>) -> CallToolResult {
    CallToolResult::error(vec![Content::text(message.into())])
}

/// Stringify a panic payload for the error envelope.
fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "tool handler panicked".to_string()
    }
}
