//! Calculator tool definition.
//!
//! Small binary arithmetic over two operands. Division by zero is a genuine
//! handler failure, which makes this the tool of choice for exercising the
//! dispatch boundary.

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

/// Supported arithmetic operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum CalcOp {
    Add,
    Sub,
    Mul,
    Div,
}

/// Parameters for the calculator tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CalcParams {
    /// Operation to perform.
    pub op: CalcOp,

    /// Left operand.
    pub a: f64,

    /// Right operand.
    pub b: f64,
}

/// Calculator tool - evaluates a single binary operation.
pub struct CalcTool;

impl CalcTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "calc";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Evaluate a binary arithmetic operation (add, sub, mul, div) over two numbers.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(op = ?params.op))]
    pub fn execute(params: &CalcParams) -> ToolResult {
        info!("Calc tool called");

        let value = match params.op {
            CalcOp::Add => params.a + params.b,
            CalcOp::Sub => params.a - params.b,
            CalcOp::Mul => params.a * params.b,
            CalcOp::Div => {
                if params.b == 0.0 {
                    return Err(ToolError::execution_failed("division by zero"));
                }
                params.a / params.b
            }
        };

        if !value.is_finite() {
            return Err(ToolError::execution_failed(format!(
                "result is not a finite number: {value}"
            )));
        }

        Ok(CallToolResult::success(vec![Content::text(
            value.to_string(),
        )]))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema::schema_for::<CalcParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create the registry entry for this tool.
    pub fn entry() -> ToolEntry {
        ToolEntry::new(Self::to_tool(), Arc::new(CalcHandler))
    }
}

struct CalcHandler;

#[async_trait]
impl ToolHandler for CalcHandler {
    async fn call(&self, arguments: JsonObject) -> ToolResult {
        let params: CalcParams = serde_json::from_value(Value::Object(arguments))
            .map_err(|e| ToolError::invalid_arguments(e.to_string()))?;
        CalcTool::execute(&params)
    }
}
