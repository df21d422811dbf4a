//! Application State
//!
//! State shared by every HTTP handler and by the stdio MCP loop.

use std::sync::Arc;

use crate::service::CustomerServices;

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

/// Core application state
pub struct AppState {
    /// The five store operations, backed by the catalog and cart storage.
    pub services: CustomerServices,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates state backed by the built-in catalog and in-memory carts
    pub fn new() -> Self {
        Self::with_services(CustomerServices::in_memory())
    }

    pub fn with_services(services: CustomerServices) -> Self {
        Self { services }
    }
}
