//! Shopping Cart Domain Module
//!
//! This module contains all shopping cart business logic, including:
//! - Domain models (CartLineItem, requests, results)
//! - Pricing and batch modify helpers
//! - Cart storage (repository trait and in-memory store)
//! - REST API handlers

pub mod handlers;
pub mod helpers;
pub mod models;
pub mod store;

// Re-export commonly used types for convenience
pub use handlers::routes;
pub use store::{CartRepository, InMemoryCartStore};
