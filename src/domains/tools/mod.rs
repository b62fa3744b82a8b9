//! Tools domain module.
//!
//! This module handles all tool-related functionality for the MCP server.
//! Tools are executable functions that can be called by MCP clients to
//! perform specific actions or computations.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `registry.rs` - Insertion-ordered registry of descriptors and handlers
//! - `schema.rs` - Schema derivation and aggregated argument validation
//! - `dispatch.rs` - Request routing and the catch-all invocation boundary
//! - `handlers.rs` - The `ToolHandler` contract and registry entries
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` (e.g., `my_tool.rs`), following
//!    the shape of `definitions/example.rs`
//! 2. Export it in `definitions/mod.rs`
//! 3. Register it in `ToolRegistry::with_builtin_tools()`

pub mod definitions;
mod dispatch;
mod error;
mod handlers;
mod registry;
mod schema;

pub use dispatch::ToolDispatcher;
pub use error::ToolError;
pub use handlers::{ToolEntry, ToolHandler, ToolResult};
pub use registry::ToolRegistry;
