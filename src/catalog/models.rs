//! Catalog Domain Models
//!
//! Products, inventory counters, recommendation entries and the result
//! shapes returned by the read-only catalog operations.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// =============================================================================
// Catalog Records
// =============================================================================

/// A product listed in one of the store departments
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Product {
    pub product_id: String,
    pub name: String,
    pub description: String,
    /// Department name (tools, seeds, decor, irrigation, ...)
    pub department: String,
    pub price: Decimal,
    pub in_stock: bool,
    pub stock_quantity: u32,
}

/// A product suggested for a plant type, tagged with its category
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RecommendationEntry {
    pub product_id: String,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub in_stock: bool,
    pub stock_quantity: u32,
    pub category: String,
}

/// Pricing information used when a product is added to a cart
#[derive(Debug, Clone, PartialEq)]
pub struct PriceEntry {
    pub name: String,
    pub price: Decimal,
    pub department: String,
}

/// Stock counters for a single product.
///
/// `available` is fixed at construction so it always equals
/// `quantity - reserved` and never exceeds `quantity`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InventoryRecord {
    quantity: u32,
    reserved: u32,
    available: u32,
}

impl InventoryRecord {
    /// Builds a record, clamping `reserved` to the total quantity.
    pub fn new(quantity: u32, reserved: u32) -> Self {
        let reserved = reserved.min(quantity);
        Self {
            quantity,
            reserved,
            available: quantity - reserved,
        }
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn reserved(&self) -> u32 {
        self.reserved
    }

    pub fn available(&self) -> u32 {
        self.available
    }

    /// Classifies the available count into a stock tier.
    pub fn status(&self) -> StockStatus {
        match self.available {
            0 => StockStatus::OutOfStock,
            1..=5 => StockStatus::LowStock,
            _ => StockStatus::InStock,
        }
    }
}

/// Stock tier reported by the availability check
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    OutOfStock,
    LowStock,
    InStock,
}

impl StockStatus {
    pub fn is_available(self) -> bool {
        !matches!(self, StockStatus::OutOfStock)
    }
}

// =============================================================================
// Operation Inputs
// =============================================================================

/// Arguments for `check_product_list`
#[derive(Debug, Default, Deserialize)]
pub struct ListProductsArgs {
    pub department: Option<String>,
}

/// Arguments for `get_product_recommendations`
#[derive(Debug, Deserialize)]
pub struct RecommendationArgs {
    pub plant_type: String,
    pub customer_id: String,
}

/// Arguments for `check_product_availability`
#[derive(Debug, Deserialize)]
pub struct AvailabilityArgs {
    pub product_id: String,
    pub store_id: String,
}

// =============================================================================
// Operation Results
// =============================================================================

/// Result of listing products, optionally filtered by department
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProductListResult {
    pub department: String,
    pub total_products: usize,
    pub products: Vec<Product>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_departments: Option<Vec<String>>,
}

/// Result of a recommendation lookup
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RecommendationResult {
    /// Plant type exactly as the caller supplied it
    pub plant_type: String,
    pub customer_id: String,
    pub recommendations: Vec<RecommendationEntry>,
    pub total_recommendations: usize,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Result of an availability check.
///
/// Unknown products carry `error` and none of the stock fields.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AvailabilityResult {
    pub available: bool,
    pub product_id: String,
    pub store: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_quantity: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reserved: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<StockStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
