//! Echo tool definition.
//!
//! Returns the caller's message, optionally repeated and/or uppercased.
//! Exists mostly to demonstrate optional parameters.

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

/// Most repeats a single call will produce.
const MAX_REPEAT: u32 = 10;

/// Parameters for the echo tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct EchoParams {
    /// The message to echo back.
    pub message: String,

    /// Number of times to repeat the message (1-10, default 1).
    #[serde(default)]
    pub repeat: Option<u32>,

    /// Uppercase the response.
    #[serde(default)]
    pub uppercase: bool,
}

/// Echo tool - repeats the caller's message back.
pub struct EchoTool;

impl EchoTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "echo";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Echo a message back, optionally repeated and/or uppercased.";

    /// Execute the tool logic.
    #[instrument(skip_all)]
    pub fn execute(params: &EchoParams) -> CallToolResult {
        let repeat = params.repeat.unwrap_or(1).clamp(1, MAX_REPEAT);
        info!("Echo tool called ({} repeats)", repeat);

        let message = if params.uppercase {
            params.message.to_uppercase()
        } else {
            params.message.clone()
        };

        let lines: Vec<&str> = std::iter::repeat(message.as_str())
            .take(repeat as usize)
            .collect();

        CallToolResult::success(vec![Content::text(lines.join("\n"))])
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema::schema_for::<EchoParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create the registry entry for this tool.
    pub fn entry() -> ToolEntry {
        ToolEntry::new(Self::to_tool(), Arc::new(EchoHandler))
    }
}

struct EchoHandler;

#[async_trait]
impl ToolHandler for EchoHandler {
    async fn call(&self, arguments: JsonObject) -> ToolResult {
        let params: EchoParams = serde_json::from_value(Value::Object(arguments))
            .map_err(|e| ToolError::invalid_arguments(e.to_string()))?;
        Ok(EchoTool::execute(&params))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;

    fn text_of(result: &CallToolResult) -> &str {
        match &result.content[0].raw {
            RawContent::Text(text) => &text.text,
            _ => panic!("Expected text content"),
        }
    }

    #[test]
    fn test_plain_echo() {
        let params = EchoParams {
            message: "hello".to_string(),
            repeat: None,
            uppercase: false,
        };
        let result = EchoTool::execute(&params);
        assert_eq!(text_of(&result), "hello");
    }

    #[test]
    fn test_repeat_and_uppercase() {
        let params = EchoParams {
            message: "hey".to_string(),
            repeat: Some(3),
            uppercase: true,
        };
        let result = EchoTool::execute(&params);
        assert_eq!(text_of(&result), "HEY\nHEY\nHEY");
    }

    #[test]
    fn test_repeat_is_clamped() {
        let params = EchoParams {
            message: "x".to_string(),
            repeat: Some(1000),
            uppercase: false,
        };
        let result = EchoTool::execute(&params);
        assert_eq!(text_of(&result).lines().count(), MAX_REPEAT as usize);
    }

    #[test]
    fn test_only_message_is_required() {
        let tool = EchoTool::to_tool();
        let required = tool
            .input_schema
            .get("required")
            .and_then(|v| v.as_array())
            .expect("schema has a required list");
        assert_eq!(required.len(), 1);
        assert!(required.iter().any(|v| v == "message"));
    }
}
