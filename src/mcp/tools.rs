//! MCP tool registry
//!
//! Each store operation is published as one tool. Arguments are decoded into
//! the operation's argument struct and the operation result is returned as
//! structured content.

use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use super::{error::McpError, helpers::tool_result, models::*};
use crate::cart::models::{CartArgs, ModifyCartArgs};
use crate::catalog::models::{AvailabilityArgs, ListProductsArgs, RecommendationArgs};
use crate::service::CustomerServices;

/// Handles `tools/list` request.
pub fn list() -> Value {
    let item_schema = json!({
        "type": "array",
        "items": {
            "type": "object",
            "required": ["product_id"],
            "properties": {
                "product_id": { "type": "string" },
                "quantity": { "type": "integer", "default": 1, "minimum": 1 }
            }
        }
    });

    json!({
        "tools": [
            {
                "name": LIST_PRODUCTS_TOOL,
                "description": "Get a list of products by department or all products.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "department": {
                            "type": "string",
                            "description": "Optional department filter (tools, seeds, decor, irrigation)"
                        }
                    },
                    "additionalProperties": false
                }
            },
            {
                "name": RECOMMENDATIONS_TOOL,
                "description": "Provides product recommendations based on the type of plant and customer profile.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "plant_type": {
                            "type": "string",
                            "description": "The type of plant (e.g., 'Petunias', 'Sun-loving annuals', 'Tomatoes')."
                        },
                        "customer_id": { "type": "string", "description": "Customer ID." }
                    },
                    "required": ["plant_type", "customer_id"],
                    "additionalProperties": false
                }
            },
            {
                "name": AVAILABILITY_TOOL,
                "description": "Checks the availability of a product at a specified store or for pickup.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "product_id": { "type": "string", "description": "The ID of the product to check." },
                        "store_id": { "type": "string", "description": "The ID of the store or 'pickup'." }
                    },
                    "required": ["product_id", "store_id"],
                    "additionalProperties": false
                }
            },
            {
                "name": CART_TOOL,
                "description": "Retrieves the current cart contents for a customer.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "customer_id": { "type": "string", "description": "The ID of the customer." }
                    },
                    "required": ["customer_id"],
                    "additionalProperties": false
                }
            },
            {
                "name": MODIFY_CART_TOOL,
                "description": "Modifies the customer's cart. Removals are applied before additions.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "customer_id": { "type": "string", "description": "The ID of the customer." },
                        "items_to_add": item_schema,
                        "items_to_remove": item_schema
                    },
                    "required": ["customer_id"],
                    "additionalProperties": false
                }
            }
        ]
    })
}

fn parse_args<T: DeserializeOwned>(args: Value) -> Result<T, McpError> {
    let args = if args.is_null() { json!({}) } else { args };
    serde_json::from_value(args).map_err(McpError::InvalidArguments)
}

/// Handles `tools/call` request.
pub fn call(services: &CustomerServices, name: &str, args: Value) -> Result<Value, McpError> {
    match name {
        LIST_PRODUCTS_TOOL => {
            let args: ListProductsArgs = parse_args(args)?;
            tool_result(&services.list_products(args.department.as_deref()))
        }
        RECOMMENDATIONS_TOOL => {
            let args: RecommendationArgs = parse_args(args)?;
            tool_result(&services.recommend(&args.plant_type, &args.customer_id))
        }
        AVAILABILITY_TOOL => {
            let args: AvailabilityArgs = parse_args(args)?;
            tool_result(&services.check_availability(&args.product_id, &args.store_id))
        }
        CART_TOOL => {
            let args: CartArgs = parse_args(args)?;
            tool_result(&services.get_cart(&args.customer_id))
        }
        MODIFY_CART_TOOL => {
            let args: ModifyCartArgs = parse_args(args)?;
            tool_result(&services.modify_cart(
                &args.customer_id,
                &args.changes.items_to_add,
                &args.changes.items_to_remove,
            ))
        }
        _ => Err(McpError::UnknownTool(name.to_string())),
    }
}
