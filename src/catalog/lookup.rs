//! Catalog lookups
//!
//! [`Catalog`] holds the immutable lookup tables (products by id and by
//! department, pricing, inventory and recommendation rules) and implements the
//! three read-only operations: product listing, recommendation lookup and
//! availability check. None of them fail; problems are reported inside the
//! returned result.

use std::collections::HashMap;

use super::data::{self, FLOWERING_NOTE, GENERAL_NOTE, LISTED_DEPARTMENTS, VEGETABLE_NOTE};
use super::models::*;

/// One step of the recommendation rule list.
///
/// A rule matches when the lowercased plant type contains any of its terms.
#[derive(Debug, Clone)]
pub struct RecommendationRule {
    pub terms: Vec<&'static str>,
    pub recommendations: Vec<RecommendationEntry>,
    pub note: Option<&'static str>,
}

/// Immutable catalog built once at startup
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    by_department: HashMap<String, Vec<usize>>,
    pricing: HashMap<String, PriceEntry>,
    inventory: HashMap<String, InventoryRecord>,
    rules: Vec<RecommendationRule>,
    fallback: Vec<RecommendationEntry>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog {
    /// Builds the catalog from the built-in store tables.
    pub fn builtin() -> Self {
        let rules = vec![
            RecommendationRule {
                terms: vec!["petunias"],
                recommendations: data::petunia_set(),
                note: None,
            },
            RecommendationRule {
                terms: vec!["tomatoes"],
                recommendations: data::tomato_set(),
                note: None,
            },
            RecommendationRule {
                terms: vec!["sunflowers"],
                recommendations: data::sunflower_set(),
                note: None,
            },
            RecommendationRule {
                terms: vec!["annual", "flower", "bloom"],
                recommendations: data::petunia_set(),
                note: Some(FLOWERING_NOTE),
            },
            RecommendationRule {
                terms: vec!["vegetable", "veggie", "edible"],
                recommendations: data::tomato_set(),
                note: Some(VEGETABLE_NOTE),
            },
        ];

        Self::new(
            data::listed_products(),
            data::inventory()
                .into_iter()
                .map(|(id, record)| (id.to_string(), record))
                .collect(),
            rules,
            data::general_set(),
        )
    }

    /// Builds a catalog from explicit tables.
    ///
    /// The pricing table covers every listed product plus every product that
    /// appears in a recommendation set, priced under its category.
    pub fn new(
        products: Vec<Product>,
        inventory: HashMap<String, InventoryRecord>,
        rules: Vec<RecommendationRule>,
        fallback: Vec<RecommendationEntry>,
    ) -> Self {
        let mut by_department: HashMap<String, Vec<usize>> = HashMap::new();
        let mut pricing = HashMap::new();

        for (index, product) in products.iter().enumerate() {
            by_department
                .entry(product.department.clone())
                .or_default()
                .push(index);
            pricing.insert(
                product.product_id.clone(),
                PriceEntry {
                    name: product.name.clone(),
                    price: product.price,
                    department: product.department.clone(),
                },
            );
        }

        let suggested = rules
            .iter()
            .flat_map(|rule| rule.recommendations.iter())
            .chain(fallback.iter());
        for entry in suggested {
            pricing
                .entry(entry.product_id.clone())
                .or_insert_with(|| PriceEntry {
                    name: entry.name.clone(),
                    price: entry.price,
                    department: entry.category.clone(),
                });
        }

        Self {
            products,
            by_department,
            pricing,
            inventory,
            rules,
            fallback,
        }
    }

    /// Looks up the price record used when adding `product_id` to a cart.
    pub fn price_of(&self, product_id: &str) -> Option<&PriceEntry> {
        self.pricing.get(product_id)
    }

    /// Lists all products, or only those of `department` (case-insensitive).
    pub fn list_products(&self, department: Option<&str>) -> ProductListResult {
        let Some(department) = department else {
            return ProductListResult {
                department: "all".into(),
                total_products: self.products.len(),
                products: self.products.clone(),
                error: None,
                available_departments: None,
            };
        };

        let department = department.to_lowercase();
        let products: Vec<Product> = self
            .by_department
            .get(&department)
            .map(|indices| {
                indices
                    .iter()
                    .filter_map(|&i| self.products.get(i).cloned())
                    .collect()
            })
            .unwrap_or_default();

        if products.is_empty() {
            tracing::debug!(%department, "no products in department");
            return ProductListResult {
                error: Some(format!("No products found for department '{}'", department)),
                department,
                total_products: 0,
                products,
                available_departments: Some(
                    LISTED_DEPARTMENTS.iter().map(|d| d.to_string()).collect(),
                ),
            };
        }

        ProductListResult {
            department,
            total_products: products.len(),
            products,
            error: None,
            available_departments: None,
        }
    }

    /// Suggests products for a plant type.
    ///
    /// Rules are tried in order and the first one whose terms occur in the
    /// lowercased plant type wins; with no match the general set is returned.
    pub fn recommend(&self, plant_type: &str, customer_id: &str) -> RecommendationResult {
        tracing::info!(plant_type, customer_id, "getting product recommendations");

        let needle = plant_type.to_lowercase();
        let matched = self
            .rules
            .iter()
            .find(|rule| rule.terms.iter().any(|term| needle.contains(*term)));

        let (recommendations, note) = match matched {
            Some(rule) => (rule.recommendations.clone(), rule.note),
            None => (self.fallback.clone(), Some(GENERAL_NOTE)),
        };

        RecommendationResult {
            plant_type: plant_type.to_string(),
            customer_id: customer_id.to_string(),
            total_recommendations: recommendations.len(),
            recommendations,
            note: note.map(str::to_string),
        }
    }

    /// Reports stock for `product_id` at `store_id`.
    ///
    /// The store id is echoed back and not otherwise interpreted.
    pub fn check_availability(&self, product_id: &str, store_id: &str) -> AvailabilityResult {
        tracing::info!(product_id, store_id, "checking product availability");

        let Some(record) = self.inventory.get(product_id) else {
            return AvailabilityResult {
                available: false,
                product_id: product_id.to_string(),
                store: store_id.to_string(),
                quantity: None,
                total_quantity: None,
                reserved: None,
                status: None,
                message: None,
                error: Some(format!("Product ID '{}' not found in inventory", product_id)),
            };
        };

        let status = record.status();
        let available = status.is_available();
        let message = if available {
            format!("Available at {}", store_id)
        } else {
            format!("Out of stock at {}", store_id)
        };

        AvailabilityResult {
            available,
            product_id: product_id.to_string(),
            store: store_id.to_string(),
            quantity: Some(record.available()),
            total_quantity: Some(record.quantity()),
            reserved: Some(record.reserved()),
            status: Some(status),
            message: Some(message),
            error: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn lists_every_product_without_filter() {
        let result = Catalog::builtin().list_products(None);
        assert_eq!(result.department, "all");
        assert_eq!(result.total_products, 11);
        assert_eq!(result.products.len(), 11);
        assert!(result.error.is_none());
    }

    #[test]
    fn filters_by_department_case_insensitively() {
        let result = Catalog::builtin().list_products(Some("TooLs"));
        assert_eq!(result.department, "tools");
        assert_eq!(result.total_products, 3);
        assert!(result.products.iter().all(|p| p.department == "tools"));
    }

    #[test]
    fn unknown_department_reports_valid_ones() {
        let result = Catalog::builtin().list_products(Some("nonexistent"));
        assert!(result.products.is_empty());
        assert_eq!(result.total_products, 0);
        assert_eq!(
            result.available_departments.unwrap(),
            vec!["tools", "seeds", "decor", "irrigation"]
        );
        assert!(result.error.unwrap().contains("nonexistent"));
    }

    #[test]
    fn pricing_only_departments_are_not_listed() {
        let result = Catalog::builtin().list_products(Some("soil"));
        assert!(result.products.is_empty());
        assert!(result.error.is_some());
    }

    #[test]
    fn specific_plant_key_matches_first() {
        let result = Catalog::builtin().recommend("My Tomatoes", "c1");
        assert_eq!(result.plant_type, "My Tomatoes");
        assert_eq!(result.customer_id, "c1");
        assert_eq!(result.total_recommendations, 3);
        assert_eq!(result.recommendations[0].product_id, "soil-789");
        assert!(result.note.is_none());
    }

    #[test]
    fn sunflowers_get_their_own_set() {
        let result = Catalog::builtin().recommend("giant sunflowers", "c1");
        assert_eq!(result.total_recommendations, 2);
        assert_eq!(result.recommendations[1].product_id, "fert-321");
    }

    #[test]
    fn annuals_fall_back_to_flowering_set() {
        let result = Catalog::builtin().recommend("Sun-loving annuals", "c1");
        assert_eq!(result.recommendations[0].product_id, "soil-456");
        assert_eq!(result.total_recommendations, 3);
        assert_eq!(result.note.as_deref(), Some(FLOWERING_NOTE));
    }

    #[test]
    fn edibles_fall_back_to_vegetable_set() {
        let result = Catalog::builtin().recommend("edible herbs", "c1");
        assert_eq!(result.recommendations[2].product_id, "supp-101");
        assert_eq!(result.note.as_deref(), Some(VEGETABLE_NOTE));
    }

    #[test]
    fn unmatched_plant_type_gets_general_set() {
        let result = Catalog::builtin().recommend("cactus", "c1");
        assert_eq!(result.total_recommendations, 2);
        let ids: Vec<_> = result
            .recommendations
            .iter()
            .map(|r| r.product_id.as_str())
            .collect();
        assert_eq!(ids, ["soil-123", "fert-general"]);
        assert_eq!(result.note.as_deref(), Some(GENERAL_NOTE));
    }

    #[test]
    fn availability_tiers() {
        let catalog = Catalog::builtin();

        let out = catalog.check_availability("decor-202", "pickup");
        assert!(!out.available);
        assert_eq!(out.status, Some(StockStatus::OutOfStock));
        assert_eq!(out.quantity, Some(0));
        assert_eq!(out.message.as_deref(), Some("Out of stock at pickup"));

        let ok = catalog.check_availability("irrig-302", "pickup");
        assert!(ok.available);
        assert_eq!(ok.status, Some(StockStatus::InStock));
        assert_eq!(ok.quantity, Some(14));
        assert_eq!(ok.total_quantity, Some(15));
        assert_eq!(ok.reserved, Some(1));
    }

    #[test]
    fn low_stock_boundaries() {
        assert_eq!(InventoryRecord::new(5, 0).status(), StockStatus::LowStock);
        assert_eq!(InventoryRecord::new(7, 6).status(), StockStatus::LowStock);
        assert_eq!(InventoryRecord::new(6, 0).status(), StockStatus::InStock);
        assert_eq!(InventoryRecord::new(3, 9).available(), 0);
    }

    #[test]
    fn unknown_product_is_reported_inline() {
        let result = Catalog::builtin().check_availability("no-such-id", "pickup");
        assert!(!result.available);
        assert!(result.error.unwrap().contains("no-such-id"));
        assert!(result.status.is_none());
    }

    #[test]
    fn pricing_covers_recommendation_only_products() {
        let catalog = Catalog::builtin();
        let snips = catalog.price_of("tool-004").unwrap();
        assert_eq!(snips.price, dec!(16.99));
        let cages = catalog.price_of("supp-101").unwrap();
        assert_eq!(cages.department, "support");
        assert!(catalog.price_of("fert-general").is_some());
        assert!(catalog.price_of("nope").is_none());
    }
}
