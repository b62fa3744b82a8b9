//! Tool Registry - central registration of all tools.
//!
//! The registry maps a unique tool name to its descriptor and handler. It is
//! populated once at startup and read-only thereafter, so concurrent reads
//! need no locking. Listing preserves registration order; lookups go through
//! a name index.

use std::collections::HashMap;

use rmcp::model::Tool;
use tracing::debug;

use super::definitions::{CalcTool, EchoTool, ExampleTool};
use super::error::ToolError;
use super::handlers::ToolEntry;

/// Tool registry - manages all available tools.
#[derive(Default)]
pub struct ToolRegistry {
    /// Registered tools, in registration order (for listing).
    entries: Vec<ToolEntry>,

    /// Name index into `entries` (for dispatch).
    index: HashMap<String, usize>,
}

impl ToolRegistry {
    /// Create a new empty tool registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the registry with the server's fixed tool set.
    ///
    /// This is the single place where the shipped tools are registered.
    /// When adding a new tool, add it here.
    pub fn with_builtin_tools() -> Result<Self, ToolError> {
        let mut registry = Self::new();
        registry.register(ExampleTool::entry())?;
        registry.register(EchoTool::entry())?;
        registry.register(CalcTool::entry())?;
        Ok(registry)
    }

    /// Register a tool.
    ///
    /// Fails if the name is already taken; callers treat that as a fatal
    /// startup error.
    pub fn register(&mut self, entry: ToolEntry) -> Result<(), ToolError> {
        let name = entry.name().to_string();
        if self.index.contains_key(&name) {
            return Err(ToolError::DuplicateName(name));
        }
        debug!("Registered tool: {}", name);
        self.index.insert(name, self.entries.len());
        self.entries.push(entry);
        Ok(())
    }

    /// All registered descriptors, in registration order.
    ///
    /// Handlers are never exposed here; callers only see the descriptor.
    pub fn list(&self) -> Vec<Tool> {
        self.entries.iter().map(|e| e.tool().clone()).collect()
    }

    /// Look up a tool by exact name.
    ///
    /// Absence is a normal outcome, not a defect - callers turn it into an
    /// error envelope.
    pub fn lookup(&self, name: &str) -> Option<&ToolEntry> {
        self.index.get(name).map(|&i| &self.entries[i])
    }

    /// Number of registered tools.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::handlers::{ToolHandler, ToolResult};
    use async_trait::async_trait;
    use rmcp::model::{CallToolResult, Content, JsonObject};
    use std::sync::Arc;

    struct Noop;

    #[async_trait]
    impl ToolHandler for Noop {
        async fn call(&self, _arguments: JsonObject) -> ToolResult {
            Ok(CallToolResult::success(vec![Content::text("ok")]))
        }
    }

    fn entry(name: &'static str) -> ToolEntry {
        let tool = Tool {
            name: name.into(),
            description: Some("test tool".into()),
            input_schema: Arc::new(serde_json::Map::new()),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        };
        ToolEntry::new(tool, Arc::new(Noop))
    }

    #[test]
    fn test_builtin_tools() {
        let registry = ToolRegistry::with_builtin_tools().unwrap();
        assert_eq!(registry.len(), 3);

        let names: Vec<_> = registry.list().iter().map(|t| t.name.to_string()).collect();
        assert!(names.contains(&"example_tool".to_string()));
        assert!(names.contains(&"echo".to_string()));
        assert!(names.contains(&"calc".to_string()));
    }

    #[test]
    fn test_list_preserves_registration_order() {
        let mut registry = ToolRegistry::new();
        registry.register(entry("zebra")).unwrap();
        registry.register(entry("alpha")).unwrap();
        registry.register(entry("mango")).unwrap();

        let names: Vec<_> = registry.list().iter().map(|t| t.name.to_string()).collect();
        assert_eq!(names, vec!["zebra", "alpha", "mango"]);
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let mut registry = ToolRegistry::new();
        registry.register(entry("dup")).unwrap();

        let err = registry.register(entry("dup")).unwrap_err();
        assert!(matches!(err, ToolError::DuplicateName(ref n) if n == "dup"));
        // The first registration stays intact.
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_lookup_is_exact_match() {
        let mut registry = ToolRegistry::new();
        registry.register(entry("echo")).unwrap();

        assert!(registry.lookup("echo").is_some());
        assert!(registry.lookup("Echo").is_none());
        assert!(registry.lookup("ech").is_none());
        assert!(registry.lookup("missing").is_none());
    }
}
