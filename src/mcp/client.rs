//! In-process MCP client
//!
//! [`McpClient`] talks JSON-RPC to an application [`Router`] without opening a
//! socket, which makes it handy for tools and tests that want to exercise the
//! server exactly as a remote client would.

use std::sync::atomic::{AtomicI64, Ordering};

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use thiserror::Error;
use tower::ServiceExt;

use super::models::*;
use crate::cart::models::ItemRequest;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("failed to build request: {0}")]
    Request(#[from] axum::http::Error),

    #[error("server answered with status {0}")]
    Status(StatusCode),

    #[error("failed to read response body: {0}")]
    Body(#[from] axum::Error),

    #[error("invalid JSON from server: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("rpc error {code}: {message}")]
    Rpc { code: i64, message: String },

    #[error("tool reported an error: {0}")]
    Tool(String),

    #[error("response carried no content")]
    EmptyContent,
}

/// A tool advertised by `tools/list`
#[derive(Debug, Clone, Deserialize)]
pub struct ToolInfo {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "inputSchema", default)]
    pub input_schema: Value,
}

impl ToolInfo {
    /// Names of the required arguments.
    pub fn required(&self) -> Vec<&str> {
        self.input_schema
            .get("required")
            .and_then(Value::as_array)
            .map(|r| r.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }
}

pub struct McpClient {
    router: Router,
    next_id: AtomicI64,
}

impl McpClient {
    pub fn new(router: Router) -> Self {
        Self {
            router,
            next_id: AtomicI64::new(1),
        }
    }

    /// Sends one JSON-RPC request and returns its `result`.
    pub async fn request(&self, method: &str, params: Option<Value>) -> Result<Value, ClientError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let body = json!({
            "jsonrpc": "2.0",
            "id": id,
            "method": method,
            "params": params,
        });

        let request = Request::builder()
            .method("POST")
            .uri("/mcp")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))?;

        let response = match self.router.clone().oneshot(request).await {
            Ok(response) => response,
            Err(never) => match never {},
        };

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status(status));
        }

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
        let mut envelope: Value = serde_json::from_slice(&bytes)?;

        if let Some(error) = envelope.get("error") {
            return Err(ClientError::Rpc {
                code: error.get("code").and_then(Value::as_i64).unwrap_or_default(),
                message: error
                    .get("message")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string(),
            });
        }

        Ok(envelope
            .get_mut("result")
            .map(Value::take)
            .unwrap_or(Value::Null))
    }

    pub async fn initialize(&self) -> Result<Value, ClientError> {
        self.request("initialize", None).await
    }

    pub async fn list_tools(&self) -> Result<Vec<ToolInfo>, ClientError> {
        let mut result = self.request("tools/list", None).await?;
        let tools = result.get_mut("tools").map(Value::take).unwrap_or_default();
        Ok(serde_json::from_value(tools)?)
    }

    /// Calls a tool and decodes its result.
    ///
    /// Prefers `structuredContent`; otherwise parses the first text content
    /// as JSON, falling back to `{"raw_result": text}`.
    pub async fn call_tool(&self, name: &str, arguments: Value) -> Result<Value, ClientError> {
        let mut result = self
            .request("tools/call", Some(json!({ "name": name, "arguments": arguments })))
            .await?;

        let text = result
            .pointer("/content/0/text")
            .and_then(Value::as_str)
            .map(str::to_string);

        if result.get("isError").and_then(Value::as_bool) == Some(true) {
            return Err(ClientError::Tool(text.unwrap_or_default()));
        }

        if let Some(structured) = result.get_mut("structuredContent") {
            return Ok(structured.take());
        }

        let text = text.ok_or(ClientError::EmptyContent)?;
        Ok(serde_json::from_str(&text).unwrap_or_else(|_| json!({ "raw_result": text })))
    }

    /// Reads a resource and returns its first text body.
    pub async fn read_resource(&self, uri: &str) -> Result<String, ClientError> {
        let result = self
            .request("resources/read", Some(json!({ "uri": uri })))
            .await?;

        result
            .pointer("/contents/0/text")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or(ClientError::EmptyContent)
    }

    // =========================================================================
    // Store tools
    // =========================================================================

    pub async fn check_product_list(&self, department: Option<&str>) -> Result<Value, ClientError> {
        let args = match department {
            Some(department) => json!({ "department": department }),
            None => json!({}),
        };
        self.call_tool(LIST_PRODUCTS_TOOL, args).await
    }

    pub async fn get_product_recommendations(
        &self,
        plant_type: &str,
        customer_id: &str,
    ) -> Result<Value, ClientError> {
        self.call_tool(
            RECOMMENDATIONS_TOOL,
            json!({ "plant_type": plant_type, "customer_id": customer_id }),
        )
        .await
    }

    pub async fn check_product_availability(
        &self,
        product_id: &str,
        store_id: &str,
    ) -> Result<Value, ClientError> {
        self.call_tool(
            AVAILABILITY_TOOL,
            json!({ "product_id": product_id, "store_id": store_id }),
        )
        .await
    }

    pub async fn access_cart_information(&self, customer_id: &str) -> Result<Value, ClientError> {
        self.call_tool(CART_TOOL, json!({ "customer_id": customer_id }))
            .await
    }

    pub async fn modify_cart(
        &self,
        customer_id: &str,
        items_to_add: &[ItemRequest],
        items_to_remove: &[ItemRequest],
    ) -> Result<Value, ClientError> {
        self.call_tool(
            MODIFY_CART_TOOL,
            json!({
                "customer_id": customer_id,
                "items_to_add": items_to_add,
                "items_to_remove": items_to_remove,
            }),
        )
        .await
    }

    // =========================================================================
    // Resources
    // =========================================================================

    pub async fn get_version(&self) -> Result<String, ClientError> {
        self.read_resource(VERSION_URI).await
    }

    pub async fn get_user_profile(&self, user_id: &str) -> Result<Value, ClientError> {
        let text = self
            .read_resource(&format!("users://{}/profile", user_id))
            .await?;
        Ok(serde_json::from_str(&text)?)
    }
}
