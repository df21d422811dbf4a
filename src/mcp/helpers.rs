//! MCP Protocol Helpers
//!
//! This module contains helper functions for JSON-RPC envelopes and MCP
//! result payloads.

use serde::Serialize;
use serde_json::{json, Value};

use super::error::McpError;

/// Builds a JSON-RPC 2.0 success response.
///
/// # Arguments
///
/// * `id` – The request identifier that must be echoed back.
/// * `result` – The payload representing the successful outcome.
pub fn rpc_success(id: Value, result: Value) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "result": result,
    })
}

/// Builds a JSON-RPC 2.0 error response.
///
/// # Arguments
///
/// * `id` – The request identifier (or `null` if unavailable).
/// * `code` – The JSON-RPC error code (e.g., -32601 for method not found).
/// * `message` – Human-readable description of the error.
pub fn rpc_error(id: Value, code: i32, message: impl Into<String>) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "error": {
            "code": code,
            "message": message.into(),
        }
    })
}

/// Wraps an operation result as a `tools/call` payload.
///
/// The result is sent both as structured content and as JSON text for
/// clients that only read text content.
pub fn tool_result<T: Serialize>(result: &T) -> Result<Value, McpError> {
    let structured =
        serde_json::to_value(result).map_err(|e| McpError::Internal(e.to_string()))?;

    Ok(json!({
        "content": [{ "type": "text", "text": structured.to_string() }],
        "structuredContent": structured,
        "isError": false
    }))
}

/// Builds a `resources/read` payload holding a single text body.
pub fn text_contents(uri: &str, mime_type: &str, text: impl Into<String>) -> Value {
    json!({
        "contents": [{
            "uri": uri,
            "mimeType": mime_type,
            "text": text.into()
        }]
    })
}
