//! Model Context Protocol (MCP) Module
//!
//! This module contains all MCP protocol implementation, including:
//! - Protocol models (JsonRpcRequest, constants) and error codes
//! - RPC helpers (success/error envelopes, tool and resource payloads)
//! - Tool registry and resources
//! - HTTP and stdio transports sharing one dispatcher
//! - An in-process client

pub mod client;
pub mod error;
pub mod handlers;
pub mod helpers;
pub mod models;
pub mod resources;
pub mod stdio;
pub mod tools;

// Re-export commonly used types and functions
pub use client::{ClientError, McpClient};
pub use error::McpError;
pub use handlers::{dispatch, routes};
pub use stdio::serve_stdio;
