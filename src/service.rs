//! Customer service operations
//!
//! [`CustomerServices`] is the single entry point used by the MCP tools, the
//! REST handlers and the tests. It exposes the five store operations by name
//! and owns the catalog and the cart repository they run against.

use std::sync::Arc;

use crate::cart::helpers::{
    apply_additions, apply_removals, format_item_summary, price_lines, summarize, BatchOutcome,
};
use crate::cart::models::*;
use crate::cart::store::{CartRepository, InMemoryCartStore};
use crate::catalog::models::{AvailabilityResult, ProductListResult, RecommendationResult};
use crate::catalog::Catalog;

#[derive(Clone)]
pub struct CustomerServices {
    catalog: Arc<Catalog>,
    carts: Arc<dyn CartRepository>,
}

impl Default for CustomerServices {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl CustomerServices {
    pub fn new(catalog: Arc<Catalog>, carts: Arc<dyn CartRepository>) -> Self {
        Self { catalog, carts }
    }

    /// Built-in catalog with process-local carts.
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(Catalog::builtin()),
            Arc::new(InMemoryCartStore::new()),
        )
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn list_products(&self, department: Option<&str>) -> ProductListResult {
        tracing::info!(?department, "listing products");
        self.catalog.list_products(department)
    }

    pub fn recommend(&self, plant_type: &str, customer_id: &str) -> RecommendationResult {
        self.catalog.recommend(plant_type, customer_id)
    }

    pub fn check_availability(&self, product_id: &str, store_id: &str) -> AvailabilityResult {
        self.catalog.check_availability(product_id, store_id)
    }

    /// Returns the customer's cart with freshly computed totals.
    pub fn get_cart(&self, customer_id: &str) -> CartResult {
        tracing::info!(customer_id, "accessing cart information");

        let items = self.carts.get_or_create(customer_id);
        CartResult {
            customer_id: customer_id.to_string(),
            summary: summarize(&items),
            items: price_lines(&items),
            last_updated: LAST_UPDATED.to_string(),
        }
    }

    /// Applies removals, then additions, to the customer's cart.
    ///
    /// Entries that cannot be applied are reported in `errors` and skipped;
    /// the rest of the batch is committed regardless.
    pub fn modify_cart(
        &self,
        customer_id: &str,
        items_to_add: &[ItemRequest],
        items_to_remove: &[ItemRequest],
    ) -> ModifyResult {
        tracing::info!(customer_id, "modifying cart");
        tracing::debug!(?items_to_add, ?items_to_remove, "cart changes requested");

        let catalog = &self.catalog;
        let mut outcome = BatchOutcome::default();
        let items = self.carts.apply(customer_id, &mut |cart| {
            apply_removals(cart, items_to_remove, &mut outcome);
            apply_additions(cart, items_to_add, catalog, &mut outcome);
        });

        if !outcome.errors.is_empty() {
            tracing::warn!(customer_id, errors = ?outcome.errors, "cart modified with errors");
        }
        tracing::debug!(customer_id, cart = %format_item_summary(&items), "cart updated");

        let status = if outcome.errors.is_empty() {
            ModifyStatus::Success
        } else {
            ModifyStatus::PartialSuccess
        };
        let message = outcome.message();
        let BatchOutcome {
            added,
            removed,
            errors,
        } = outcome;

        ModifyResult {
            status,
            customer_id: customer_id.to_string(),
            modifications: Modifications {
                total_added: added.len(),
                total_removed: removed.len(),
                items_added: added,
                items_removed: removed,
            },
            cart_summary: summarize(&items),
            message,
            errors: if errors.is_empty() { None } else { Some(errors) },
        }
    }
}
