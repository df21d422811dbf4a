//! Shopping Cart Domain Models
//!
//! This module contains all data structures related to the shopping cart
//! business domain.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Currency every cart is priced in
pub const CURRENCY: &str = "GBP";

/// Timestamp reported with every cart read
pub const LAST_UPDATED: &str = "2024-01-15T10:30:00Z";

// =============================================================================
// Cart Domain Models
// =============================================================================

/// One row of a customer's cart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLineItem {
    pub product_id: String,
    pub name: String,
    pub description: String,
    pub quantity: u32,
    pub unit_price: Decimal,
    pub department: String,
}

/// A line item as returned to callers, with its line total attached
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PricedLineItem {
    #[serde(flatten)]
    pub item: CartLineItem,
    pub total_price: Decimal,
}

/// A requested change to one product in a cart.
///
/// Entries are decoded from any JSON value so that one malformed entry is
/// reported on its own instead of failing the whole batch. A missing
/// `product_id` is an error for that entry alone, and a missing `quantity`
/// means 1.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(from = "Value")]
pub struct ItemRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<Value>,
}

impl ItemRequest {
    pub fn new(product_id: impl Into<String>, quantity: i64) -> Self {
        Self {
            product_id: Some(Value::String(product_id.into())),
            quantity: Some(Value::from(quantity)),
        }
    }
}

impl From<Value> for ItemRequest {
    fn from(value: Value) -> Self {
        let field = |name: &str| value.get(name).filter(|v| !v.is_null()).cloned();
        Self {
            product_id: field("product_id"),
            quantity: field("quantity"),
        }
    }
}

// =============================================================================
// Operation Inputs
// =============================================================================

/// Arguments for `access_cart_information`
#[derive(Debug, Deserialize)]
pub struct CartArgs {
    pub customer_id: String,
}

/// Additions and removals applied in one `modify_cart` call
#[derive(Debug, Default, Deserialize)]
pub struct CartChanges {
    #[serde(default)]
    pub items_to_add: Vec<ItemRequest>,

    #[serde(default)]
    pub items_to_remove: Vec<ItemRequest>,
}

/// Arguments for `modify_cart`
#[derive(Debug, Deserialize)]
pub struct ModifyCartArgs {
    pub customer_id: String,

    #[serde(flatten)]
    pub changes: CartChanges,
}

// =============================================================================
// Operation Results
// =============================================================================

/// Totals derived from the current cart contents
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CartSummary {
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
    pub currency: String,
    pub item_count: u64,
    pub unique_items: usize,
}

/// Result of reading a cart
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CartResult {
    pub customer_id: String,
    pub items: Vec<PricedLineItem>,

    #[serde(flatten)]
    pub summary: CartSummary,

    pub last_updated: String,
}

/// A quantity added to the cart by a modify call
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AddedItem {
    pub product_id: String,
    pub quantity: u32,
    pub unit_price: Decimal,
    pub total_price: Decimal,
    pub name: String,
}

/// A quantity taken out of the cart by a modify call
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RemovedItem {
    pub product_id: String,
    pub quantity: u32,
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct Modifications {
    pub items_added: Vec<AddedItem>,
    pub items_removed: Vec<RemovedItem>,
    pub total_added: usize,
    pub total_removed: usize,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ModifyStatus {
    Success,
    PartialSuccess,
}

/// Result of a modify call.
///
/// Whatever succeeded is already committed; `errors` lists the entries that
/// were skipped and is `null` when there are none.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ModifyResult {
    pub status: ModifyStatus,
    pub customer_id: String,
    pub modifications: Modifications,
    pub cart_summary: CartSummary,
    pub message: String,
    pub errors: Option<Vec<String>>,
}
