//! Product Catalog Domain Module
//!
//! This module contains the read-only side of the store:
//! - Domain models (Product, InventoryRecord, RecommendationEntry, results)
//! - Built-in catalog tables
//! - Listing, recommendation and availability lookups
//! - REST API handlers

pub mod data;
pub mod handlers;
pub mod lookup;
pub mod models;

// Re-export commonly used types for convenience
pub use handlers::routes;
pub use lookup::{Catalog, RecommendationRule};
