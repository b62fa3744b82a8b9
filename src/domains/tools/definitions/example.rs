//! Example tool definition.
//!
//! The canonical starter tool: it takes a single string and acknowledges it.
//! New tools should follow this file's shape.

use std::sync::Arc;

use async_trait::async_trait;
use rmcp::model::{CallToolResult, Content, JsonObject, Tool};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;
use tracing::{info, instrument};

use crate::domains::tools::error::ToolError;
use crate::domains::tools::handlers::{ToolEntry, ToolHandler, ToolResult};
use crate::domains::tools::schema;

/// Parameters for the example tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ExampleParams {
    /// The input string to acknowledge.
    pub input: String,
}

/// An example tool demonstrating the basic structure.
pub struct ExampleTool;

impl ExampleTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "example_tool";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "An example tool demonstrating the basic structure.";

    /// Execute the tool logic.
    #[instrument(skip_all)]
    pub fn execute(params: &ExampleParams) -> CallToolResult {
        info!("Example tool called");
        CallToolResult::success(vec![Content::text(format!(
            "Received input: {}",
            params.input
        ))])
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema::schema_for::<ExampleParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create the registry entry for this tool.
    pub fn entry() -> ToolEntry {
        ToolEntry::new(Self::to_tool(), Arc::new(ExampleHandler))
    }
}

struct ExampleHandler;

#[async_trait]
impl ToolHandler for ExampleHandler {
    async fn call(&self, arguments: JsonObject) -> ToolResult {
        let params: ExampleParams = serde_json::from_value(Value::Object(arguments))
            .map_err(|e| ToolError::invalid_arguments(e.to_string()))?;
        Ok(ExampleTool::execute(&params))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;

    #[test]
    fn test_metadata() {
        assert_eq!(ExampleTool::NAME, "example_tool");
        assert!(!ExampleTool::DESCRIPTION.is_empty());

        let tool = ExampleTool::to_tool();
        assert_eq!(tool.name.as_ref(), "example_tool");
    }

    #[test]
    fn test_schema_requires_input() {
        let tool = ExampleTool::to_tool();
        let required = tool.input_schema.get("required").and_then(|v| v.as_array());
        let required = required.expect("schema has a required list");
        assert!(required.iter().any(|v| v == "input"));
    }

    #[test]
    fn test_execute() {
        let params = ExampleParams {
            input: "hi".to_string(),
        };
        let result = ExampleTool::execute(&params);
        assert!(!result.is_error.unwrap_or(false));

        let text = match &result.content[0].raw {
            RawContent::Text(text) => &text.text,
            _ => panic!("Expected text content"),
        };
        assert_eq!(text, "Received input: hi");
    }
}
