use thiserror::Error;

/// Failures reported back to an MCP client as JSON-RPC errors
#[derive(Debug, Error)]
pub enum McpError {
    #[error("Parse error")]
    Parse,

    #[error("Method not found: {0}")]
    MethodNotFound(String),

    #[error("Invalid params: {0}")]
    InvalidParams(String),

    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Invalid arguments: {0}")]
    InvalidArguments(serde_json::Error),

    #[error("Resource not found: {0}")]
    ResourceNotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl McpError {
    /// JSON-RPC error code for this failure.
    pub fn code(&self) -> i32 {
        match self {
            McpError::Parse => -32700,
            McpError::MethodNotFound(_) => -32601,
            McpError::InvalidParams(_) | McpError::UnknownTool(_) | McpError::InvalidArguments(_) => {
                -32602
            }
            McpError::ResourceNotFound(_) => -32002,
            McpError::Internal(_) => -32603,
        }
    }
}
