//! MCP Protocol Models and Constants
//!
//! This module contains all data structures and constants related to the
//! Model Context Protocol (MCP).

use serde::Deserialize;
use serde_json::Value;

// =============================================================================
// MCP Constants
// =============================================================================

/// Server identifier
pub const SERVER_NAME: &str = "customer-services-mcp-server";
/// Server version reported during the handshake
pub const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");
/// Protocol version for MCP
pub const PROTOCOL_VERSION: &str = "2024-11-05";
/// Header carrying the session id handed out by `initialize`
pub const SESSION_HEADER: &str = "mcp-session-id";

pub const LIST_PRODUCTS_TOOL: &str = "check_product_list";
pub const RECOMMENDATIONS_TOOL: &str = "get_product_recommendations";
pub const AVAILABILITY_TOOL: &str = "check_product_availability";
pub const CART_TOOL: &str = "access_cart_information";
pub const MODIFY_CART_TOOL: &str = "modify_cart";

/// URI of the static version resource
pub const VERSION_URI: &str = "config://version";
/// Value served by the version resource
pub const CONFIG_VERSION: &str = "2.0.1";
/// URI template of the per-user profile resource
pub const PROFILE_URI_TEMPLATE: &str = "users://{user_id}/profile";

// =============================================================================
// MCP Protocol Models
// =============================================================================

/// Standard JSON-RPC 2.0 Request envelope
#[derive(Debug, Deserialize)]
pub struct JsonRpcRequest {
    /// Protocol version (should be "2.0")
    #[allow(dead_code)]
    pub jsonrpc: Option<String>,

    /// Method name to invoke
    pub method: String,

    /// Parameters for the method
    pub params: Option<Value>,

    /// Request identifier
    pub id: Option<Value>,
}

impl JsonRpcRequest {
    /// Notifications carry no id and expect no response.
    pub fn is_notification(&self) -> bool {
        self.id.is_none() && self.method.starts_with("notifications/")
    }
}
