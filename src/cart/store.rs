//! Shopping Cart Storage
//!
//! Carts are kept per customer behind the [`CartRepository`] trait. The
//! in-memory implementation keeps them in a `DashMap` for the lifetime of the
//! process.

use dashmap::DashMap;
use rust_decimal_macros::dec;

use super::models::CartLineItem;

/// Storage for customer carts.
///
/// Implementations must run `edit` while holding exclusive access to that
/// customer's cart, so two concurrent modifications of the same cart never
/// overwrite each other.
pub trait CartRepository: Send + Sync {
    /// Returns a snapshot of the customer's cart, creating it from the seed
    /// contents on first access.
    fn get_or_create(&self, customer_id: &str) -> Vec<CartLineItem>;

    /// Runs `edit` against the customer's cart (creating it first if needed)
    /// and returns a snapshot of the result.
    fn apply(
        &self,
        customer_id: &str,
        edit: &mut dyn FnMut(&mut Vec<CartLineItem>),
    ) -> Vec<CartLineItem>;
}

/// Contents given to every new cart
pub fn seed_cart() -> Vec<CartLineItem> {
    vec![
        CartLineItem {
            product_id: "soil-123".into(),
            name: "All-Purpose Garden Soil".into(),
            description: "Versatile potting soil suitable for most plants.".into(),
            quantity: 2,
            unit_price: dec!(10.99),
            department: "soil".into(),
        },
        CartLineItem {
            product_id: "seed-101".into(),
            name: "Tomato Seeds - Cherry".into(),
            description: "Heirloom cherry tomato seeds for sweet, juicy fruits.".into(),
            quantity: 1,
            unit_price: dec!(3.99),
            department: "seeds".into(),
        },
    ]
}

/// Process-local cart storage.
///
/// DashMap entry guards lock the shard holding the key, which gives each
/// customer's read-modify-write sequence exclusive access.
pub struct InMemoryCartStore {
    carts: DashMap<String, Vec<CartLineItem>>,
    seed: Vec<CartLineItem>,
}

impl Default for InMemoryCartStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryCartStore {
    pub fn new() -> Self {
        Self::with_seed(seed_cart())
    }

    /// Creates a store whose new carts start with `seed`.
    pub fn with_seed(seed: Vec<CartLineItem>) -> Self {
        Self {
            carts: DashMap::new(),
            seed,
        }
    }

    /// Number of customers that have a cart.
    pub fn len(&self) -> usize {
        self.carts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.carts.is_empty()
    }
}

impl CartRepository for InMemoryCartStore {
    fn get_or_create(&self, customer_id: &str) -> Vec<CartLineItem> {
        if let Some(cart) = self.carts.get(customer_id) {
            return cart.value().clone();
        }

        self.carts
            .entry(customer_id.to_string())
            .or_insert_with(|| {
                tracing::debug!(customer_id, "creating cart from seed contents");
                self.seed.clone()
            })
            .value()
            .clone()
    }

    fn apply(
        &self,
        customer_id: &str,
        edit: &mut dyn FnMut(&mut Vec<CartLineItem>),
    ) -> Vec<CartLineItem> {
        let mut cart = self
            .carts
            .entry(customer_id.to_string())
            .or_insert_with(|| self.seed.clone());
        edit(cart.value_mut());
        cart.value().clone()
    }
}
