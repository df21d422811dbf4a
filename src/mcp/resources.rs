//! MCP resources: the server version and placeholder user profiles.

use serde_json::{json, Value};

use super::{error::McpError, helpers::text_contents, models::*};

/// Handles `resources/list` request.
pub fn list() -> Value {
    json!({
        "resources": [{
            "name": "version",
            "uri": VERSION_URI,
            "mimeType": "text/plain",
            "description": "Version of the customer services configuration"
        }]
    })
}

/// Handles `resources/templates/list` request.
pub fn templates() -> Value {
    json!({
        "resourceTemplates": [{
            "name": "user_profile",
            "uriTemplate": PROFILE_URI_TEMPLATE,
            "mimeType": "application/json",
            "description": "Profile for a user id"
        }]
    })
}

/// Extracts `id` from `users://{id}/profile`.
fn profile_user_id(uri: &str) -> Option<&str> {
    let id = uri.strip_prefix("users://")?.strip_suffix("/profile")?;
    (!id.is_empty() && !id.contains('/')).then_some(id)
}

/// Handles `resources/read` request.
pub fn read(uri: &str) -> Result<Value, McpError> {
    if uri == VERSION_URI {
        return Ok(text_contents(uri, "text/plain", CONFIG_VERSION));
    }

    if let Some(user_id) = profile_user_id(uri) {
        let profile = json!({
            "name": format!("User {}", user_id),
            "status": "active"
        });
        return Ok(text_contents(uri, "application/json", profile.to_string()));
    }

    Err(McpError::ResourceNotFound(uri.to_string()))
}
