//! MCP Tool Server Template
//!
//! This crate provides a minimal Model Context Protocol (MCP) server that
//! exposes a fixed set of named, schema-validated tools to remote callers.
//!
//! # Architecture
//!
//! The server is organized into the following modules:
//!
//! - **core**: Core infrastructure including configuration, error handling,
//!   the main server handler, and the transport layer
//! - **domains**: Business logic organized by bounded contexts
//!   - **tools**: the tool registry, argument validation, and dispatch
//!
//! Every `call_tool` request is answered with exactly one response envelope
//! (`{content, isError}`), success or error - a misbehaving tool never
//! crashes the server or aborts unrelated requests.
//!
//! # Example
//!
//! ```rust,no_run
//! use mcp_template_server::{core::Config, core::McpServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config)?;
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
