//! Tool handler contract and registry entries.
//!
//! A [`ToolEntry`] pairs a tool's advertised descriptor (name, description,
//! input schema) with the handler that executes it. The handler is owned
//! exclusively by its entry and is never exposed through listing.

use std::sync::Arc;

use async_trait::async_trait;
use rmcp::model::{CallToolResult, JsonObject, Tool};

use super::error::ToolError;

/// Outcome of a single tool invocation, before envelope wrapping.
pub type ToolResult = std::result::Result<CallToolResult, ToolError>;

/// Trait for implementing tool handlers.
///
/// Handlers receive arguments that have already been validated against the
/// tool's declared schema. They may suspend while awaiting external work;
/// the dispatcher awaits exactly one completion per request.
#[async_trait]
pub trait ToolHandler: Send + Sync {
    /// Execute the tool with the given (schema-validated) arguments.
    async fn call(&self, arguments: JsonObject) -> ToolResult;
}

/// A registered tool: its descriptor plus its handler.
pub struct ToolEntry {
    tool: Tool,
    handler: Arc<dyn ToolHandler>,
}

impl ToolEntry {
    /// Create a new entry from a descriptor and its handler.
    pub fn new(tool: Tool, handler: Arc<dyn ToolHandler>) -> Self {
        Self { tool, handler }
    }

    /// The tool's unique name.
    pub fn name(&self) -> &str {
        self.tool.name.as_ref()
    }

    /// The advertised descriptor (name, description, input schema).
    pub fn tool(&self) -> &Tool {
        &self.tool
    }

    /// The declared input schema, used for argument validation.
    pub fn input_schema(&self) -> &JsonObject {
        &self.tool.input_schema
    }

    /// The handler executing this tool.
    pub fn handler(&self) -> &Arc<dyn ToolHandler> {
        &self.handler
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::Content;
    use serde_json::Map;

    struct Echo;

    #[async_trait]
    impl ToolHandler for Echo {
        async fn call(&self, arguments: JsonObject) -> ToolResult {
            let text = serde_json::Value::Object(arguments).to_string();
            Ok(CallToolResult::success(vec![Content::text(text)]))
        }
    }

    fn echo_tool() -> Tool {
        Tool {
            name: "echo_test".into(),
            description: Some("test".into()),
            input_schema: Arc::new(Map::new()),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    #[test]
    fn test_entry_exposes_descriptor() {
        let entry = ToolEntry::new(echo_tool(), Arc::new(Echo));
        assert_eq!(entry.name(), "echo_test");
        assert_eq!(entry.tool().description.as_deref(), Some("test"));
    }

    #[test]
    fn test_handler_invocation() {
        let entry = ToolEntry::new(echo_tool(), Arc::new(Echo));
        let mut args = Map::new();
        args.insert("a".to_string(), serde_json::json!(1));

        let result = tokio_test::block_on(entry.handler().call(args)).unwrap();
        assert!(!result.is_error.unwrap_or(false));
    }
}
