//! MCP (Model Context Protocol) route handlers
//!
//! This module implements the JSON-RPC dispatcher shared by the HTTP and
//! stdio transports, plus the HTTP routes themselves. `dispatch` is public so
//! other transports and tests can drive it directly.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};
use uuid::Uuid;

use super::{error::McpError, helpers::*, models::*, resources, tools};
use crate::state::{AppState, SharedState};

/// Creates routes for MCP-related operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/mcp", post(handle_mcp).get(handle_mcp_sse))
        .route("/mcp/", post(handle_mcp).get(handle_mcp_sse)) // Trailing slash safety
}

/// Handle SSE (Server-Sent Events) handshake for GET requests
async fn handle_mcp_sse() -> impl IntoResponse {
    (
        [("content-type", "text/event-stream")],
        "event: endpoint\ndata: /mcp\n\n",
    )
}

/// Endpoint: POST /mcp
/// Handles the Model Context Protocol communication for POST requests.
async fn handle_mcp(
    State(state): State<SharedState>,
    body: Result<Json<JsonRpcRequest>, JsonRejection>,
) -> Response {
    let req = match body {
        Ok(Json(r)) => r,
        Err(e) => {
            tracing::warn!(error = %e.body_text(), "rejected MCP request");
            return (
                StatusCode::BAD_REQUEST,
                Json(rpc_error(Value::Null, McpError::Parse.code(), "Parse error")),
            )
                .into_response();
        }
    };

    let opens_session = req.method == "initialize";

    let Some(body) = dispatch(&state, req) else {
        return StatusCode::ACCEPTED.into_response();
    };

    let mut response = Json(body).into_response();
    if opens_session {
        let session_id = Uuid::new_v4().simple().to_string();
        if let Ok(value) = HeaderValue::from_str(&session_id) {
            response.headers_mut().insert(SESSION_HEADER, value);
        }
    }
    response
}

/// Runs one JSON-RPC request and builds its response envelope.
///
/// Returns `None` for notifications, which must not be answered.
pub fn dispatch(state: &AppState, req: JsonRpcRequest) -> Option<Value> {
    let is_notification = req.is_notification();
    let id = req.id.unwrap_or(Value::Null);
    let params = req.params.unwrap_or(Value::Null);

    tracing::debug!(method = %req.method, %id, "MCP call");

    let outcome = handle_method(state, &req.method, params);
    if is_notification {
        return None;
    }

    Some(match outcome {
        Ok(result) => rpc_success(id, result),
        Err(err) => {
            tracing::warn!(method = %req.method, error = %err, "MCP call failed");
            rpc_error(id, err.code(), err.to_string())
        }
    })
}

fn handle_method(state: &AppState, method: &str, params: Value) -> Result<Value, McpError> {
    match method {
        "initialize" => Ok(handle_initialize()),
        "notifications/initialized" | "ping" => Ok(json!({})),
        "tools/list" => Ok(tools::list()),
        "tools/call" => {
            let tool_name = params.get("name").and_then(|n| n.as_str()).unwrap_or("");
            let args = params.get("arguments").cloned().unwrap_or(Value::Null);
            tools::call(&state.services, tool_name, args)
        }
        "resources/list" => Ok(resources::list()),
        "resources/templates/list" => Ok(resources::templates()),
        "resources/read" => {
            let uri = params
                .get("uri")
                .and_then(|u| u.as_str())
                .ok_or_else(|| McpError::InvalidParams("missing resource uri".into()))?;
            resources::read(uri)
        }
        _ => Err(McpError::MethodNotFound(method.to_string())),
    }
}

/// Handles `initialize` request (Handshake).
fn handle_initialize() -> Value {
    json!({
        "protocolVersion": PROTOCOL_VERSION,
        "capabilities": {
            "tools": { "listChanged": false },
            "resources": { "listChanged": false, "subscribe": false }
        },
        "serverInfo": {
            "name": SERVER_NAME,
            "version": SERVER_VERSION
        }
    })
}
