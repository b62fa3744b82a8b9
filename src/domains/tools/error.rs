//! Tool-specific error types.
//!
//! The `Display` forms of these variants are caller-visible: the dispatch
//! boundary embeds them verbatim in error envelopes.

use thiserror::Error;

/// Errors that can occur during tool operations.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool name is not present in the registry.
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// The supplied arguments do not conform to the tool's declared schema.
    /// The detail aggregates every violation, not just the first.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// The tool's own logic failed.
    #[error("Execution failed: {0}")]
    ExecutionFailed(String),

    /// A tool name was registered twice. Only possible at startup.
    #[error("Duplicate tool name: {0}")]
    DuplicateName(String),

    /// An internal error occurred.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ToolError {
    /// Create a new "unknown tool" error.
    pub fn unknown_tool(name: impl Into<String>) -> Self {
        Self::UnknownTool(name.into())
    }

    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }

    /// Create a new "execution failed" error.
    pub fn execution_failed(msg: impl Into<String>) -> Self {
        Self::ExecutionFailed(msg.into())
    }

    /// Create a new "internal" error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caller_visible_wording() {
        assert_eq!(
            ToolError::unknown_tool("bogus").to_string(),
            "Unknown tool: bogus"
        );
        assert_eq!(
            ToolError::invalid_arguments("input is required").to_string(),
            "Invalid arguments: input is required"
        );
    }
}
