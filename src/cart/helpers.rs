//! Shopping Cart Business Logic Helpers
//!
//! This module contains the pricing rules and the batch add/remove logic
//! applied to a customer's line items.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde_json::Value;

use super::models::*;
use crate::catalog::{data::OUT_OF_STOCK_PRODUCT_ID, Catalog};

/// Sales tax applied to the cart subtotal
pub const TAX_RATE: Decimal = dec!(0.08);

/// Largest quantity a single cart line may hold
pub const MAX_LINE_QUANTITY: u32 = 10_000;

/// Rounds a money amount to pennies, halves away from zero.
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

pub fn line_total(unit_price: Decimal, quantity: u32) -> Decimal {
    round_money(unit_price * Decimal::from(quantity))
}

/// Computes subtotal, tax and total for a set of line items.
///
/// Tax is rounded on its own before being added, then the total is rounded
/// again.
pub fn summarize(items: &[CartLineItem]) -> CartSummary {
    let subtotal: Decimal = items
        .iter()
        .map(|i| i.unit_price * Decimal::from(i.quantity))
        .sum();
    let tax = round_money(subtotal * TAX_RATE);
    let total = round_money(subtotal + tax);

    CartSummary {
        subtotal,
        tax,
        total,
        currency: CURRENCY.to_string(),
        item_count: items.iter().map(|i| u64::from(i.quantity)).sum(),
        unique_items: items.len(),
    }
}

/// Attaches a line total to every item.
pub fn price_lines(items: &[CartLineItem]) -> Vec<PricedLineItem> {
    items
        .iter()
        .map(|item| PricedLineItem {
            total_price: line_total(item.unit_price, item.quantity),
            item: item.clone(),
        })
        .collect()
}

/// Produces a human-readable one-line summary for a list of cart items.
///
/// Example output: `"2x All-Purpose Garden Soil, 1x Hand Trowel"`.
pub fn format_item_summary(items: &[CartLineItem]) -> String {
    items
        .iter()
        .map(|i| format!("{}x {}", i.quantity, i.name))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Deltas and errors collected while applying one modify batch
#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub added: Vec<AddedItem>,
    pub removed: Vec<RemovedItem>,
    pub errors: Vec<String>,
}

impl BatchOutcome {
    pub fn message(&self) -> String {
        let mut message = format!(
            "Cart updated: {} items added, {} items removed",
            self.added.len(),
            self.removed.len()
        );
        if !self.errors.is_empty() {
            message.push_str(&format!(" with {} errors", self.errors.len()));
        }
        message
    }
}

/// Validates the product id and quantity of one request entry.
///
/// Numeric product ids are looked up by their decimal form.
fn parse_request(request: &ItemRequest, list: &str) -> Result<(String, u32), String> {
    let product_id = match &request.product_id {
        Some(Value::String(id)) if !id.is_empty() => id.clone(),
        Some(Value::Number(id)) => id.to_string(),
        None | Some(Value::String(_)) => return Err(format!("Missing product_id in {}", list)),
        Some(_) => return Err(format!("Invalid product_id in {}", list)),
    };

    let Some(raw) = &request.quantity else {
        return Ok((product_id, 1));
    };
    match raw.as_u64().and_then(|q| u32::try_from(q).ok()) {
        Some(q) if (1..=MAX_LINE_QUANTITY).contains(&q) => Ok((product_id, q)),
        _ => Err(format!("Invalid quantity {} for product {}", raw, product_id)),
    }
}

/// Takes quantities out of `cart`.
///
/// Removing at least the current quantity drops the line and reports the
/// quantity that was actually in the cart.
pub fn apply_removals(
    cart: &mut Vec<CartLineItem>,
    requests: &[ItemRequest],
    outcome: &mut BatchOutcome,
) {
    for request in requests {
        let (product_id, quantity) = match parse_request(request, "items_to_remove") {
            Ok(parsed) => parsed,
            Err(error) => {
                outcome.errors.push(error);
                continue;
            }
        };
        let product_id = product_id.as_str();

        let Some(position) = cart.iter().position(|i| i.product_id == product_id) else {
            outcome
                .errors
                .push(format!("Product {} not found in cart", product_id));
            continue;
        };

        let line = &mut cart[position];
        if line.quantity <= quantity {
            let line = cart.remove(position);
            outcome.removed.push(RemovedItem {
                product_id: line.product_id,
                quantity: line.quantity,
                name: line.name,
            });
        } else {
            line.quantity -= quantity;
            outcome.removed.push(RemovedItem {
                product_id: product_id.to_string(),
                quantity,
                name: line.name.clone(),
            });
        }
    }
}

/// Adds quantities to `cart`, pricing new lines from `catalog`.
///
/// Existing lines only have their quantity increased; the price they were
/// added at is kept.
pub fn apply_additions(
    cart: &mut Vec<CartLineItem>,
    requests: &[ItemRequest],
    catalog: &Catalog,
    outcome: &mut BatchOutcome,
) {
    for request in requests {
        let (product_id, quantity) = match parse_request(request, "items_to_add") {
            Ok(parsed) => parsed,
            Err(error) => {
                outcome.errors.push(error);
                continue;
            }
        };
        let product_id = product_id.as_str();

        let Some(product) = catalog.price_of(product_id) else {
            outcome.errors.push(format!("Product {} not found", product_id));
            continue;
        };

        if product_id == OUT_OF_STOCK_PRODUCT_ID {
            outcome
                .errors
                .push(format!("Product {} is out of stock", product_id));
            continue;
        }

        if let Some(existing) = cart.iter_mut().find(|i| i.product_id == product_id) {
            match existing
                .quantity
                .checked_add(quantity)
                .filter(|q| *q <= MAX_LINE_QUANTITY)
            {
                Some(merged) => existing.quantity = merged,
                None => {
                    outcome.errors.push(format!(
                        "Invalid quantity {} for product {}",
                        quantity, product_id
                    ));
                    continue;
                }
            }
        } else {
            cart.push(CartLineItem {
                product_id: product_id.to_string(),
                name: product.name.clone(),
                description: format!("{} from {} department", product.name, product.department),
                quantity,
                unit_price: product.price,
                department: product.department.clone(),
            });
        }

        outcome.added.push(AddedItem {
            product_id: product_id.to_string(),
            quantity,
            unit_price: product.price,
            total_price: line_total(product.price, quantity),
            name: product.name.clone(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(product_id: &str, quantity: u32, unit_price: Decimal) -> CartLineItem {
        CartLineItem {
            product_id: product_id.into(),
            name: product_id.to_uppercase(),
            description: String::new(),
            quantity,
            unit_price,
            department: "tools".into(),
        }
    }

    #[test]
    fn summary_rounds_tax_then_total() {
        let items = vec![line("soil-123", 2, dec!(10.99)), line("seed-101", 1, dec!(3.99))];
        let summary = summarize(&items);
        assert_eq!(summary.subtotal, dec!(25.97));
        assert_eq!(summary.tax, dec!(2.08));
        assert_eq!(summary.total, dec!(28.05));
        assert_eq!(summary.item_count, 3);
        assert_eq!(summary.unique_items, 2);
        assert_eq!(summary.currency, "GBP");
    }

    #[test]
    fn half_pennies_round_up() {
        // 0.5625 * 0.08 = 0.045 exactly
        let summary = summarize(&[line("x", 1, dec!(0.5625))]);
        assert_eq!(summary.tax, dec!(0.05));
    }

    #[test]
    fn empty_cart_summarizes_to_zero() {
        let summary = summarize(&[]);
        assert_eq!(summary.total, Decimal::ZERO);
        assert_eq!(summary.item_count, 0);
    }

    #[test]
    fn removal_clamps_to_line_quantity() {
        let mut cart = vec![line("a", 2, dec!(1.00))];
        let mut outcome = BatchOutcome::default();
        apply_removals(&mut cart, &[ItemRequest::new("a", 5)], &mut outcome);
        assert!(cart.is_empty());
        assert_eq!(outcome.removed[0].quantity, 2);
        assert!(outcome.errors.is_empty());
    }

    #[test]
    fn partial_removal_decrements() {
        let mut cart = vec![line("a", 4, dec!(1.00))];
        let mut outcome = BatchOutcome::default();
        apply_removals(
            &mut cart,
            &[ItemRequest {
                product_id: Some("a".into()),
                quantity: None,
            }],
            &mut outcome,
        );
        assert_eq!(cart[0].quantity, 3);
        assert_eq!(outcome.removed[0].quantity, 1);
    }

    #[test]
    fn removal_errors_accumulate() {
        let mut cart = vec![line("a", 1, dec!(1.00))];
        let mut outcome = BatchOutcome::default();
        apply_removals(
            &mut cart,
            &[
                ItemRequest::default(),
                ItemRequest::new("zzz", 1),
                ItemRequest::new("a", 0),
                ItemRequest::new("a", 1),
            ],
            &mut outcome,
        );
        assert_eq!(
            outcome.errors,
            vec![
                "Missing product_id in items_to_remove",
                "Product zzz not found in cart",
                "Invalid quantity 0 for product a",
            ]
        );
        assert!(cart.is_empty());
        assert_eq!(outcome.removed.len(), 1);
    }

    #[test]
    fn addition_merges_and_appends() {
        let catalog = Catalog::builtin();
        let mut cart = vec![line("tool-001", 1, dec!(12.99))];
        let mut outcome = BatchOutcome::default();
        apply_additions(
            &mut cart,
            &[ItemRequest::new("tool-001", 2), ItemRequest::new("supp-101", 1)],
            &catalog,
            &mut outcome,
        );
        assert_eq!(cart.len(), 2);
        assert_eq!(cart[0].quantity, 3);
        assert_eq!(cart[1].department, "support");
        assert_eq!(
            cart[1].description,
            "Tomato Cages - Set of 3 from support department"
        );
        assert_eq!(outcome.added[0].total_price, dec!(25.98));
    }

    #[test]
    fn addition_rejects_unknown_and_out_of_stock() {
        let catalog = Catalog::builtin();
        let mut cart = Vec::new();
        let mut outcome = BatchOutcome::default();
        apply_additions(
            &mut cart,
            &[
                ItemRequest::new("decor-202", 1),
                ItemRequest::new("ghost", 1),
                ItemRequest::new("tool-002", -3),
            ],
            &catalog,
            &mut outcome,
        );
        assert!(cart.is_empty());
        assert_eq!(
            outcome.errors,
            vec![
                "Product decor-202 is out of stock",
                "Product ghost not found",
                "Invalid quantity -3 for product tool-002",
            ]
        );
        assert_eq!(
            outcome.message(),
            "Cart updated: 0 items added, 0 items removed with 3 errors"
        );
    }

    #[test]
    fn oversized_quantities_are_rejected() {
        let catalog = Catalog::builtin();
        let mut cart = vec![line("soil-123", 2, dec!(10.99))];
        let mut outcome = BatchOutcome::default();
        apply_additions(
            &mut cart,
            &[
                ItemRequest::new("tool-001", i64::from(u32::MAX)),
                ItemRequest::new("soil-123", i64::from(MAX_LINE_QUANTITY)),
                ItemRequest::new("soil-123", 3),
            ],
            &catalog,
            &mut outcome,
        );
        assert_eq!(
            outcome.errors,
            vec![
                "Invalid quantity 4294967295 for product tool-001",
                "Invalid quantity 10000 for product soil-123",
            ]
        );
        assert_eq!(cart.len(), 1);
        assert_eq!(cart[0].quantity, 5);
        assert_eq!(outcome.added.len(), 1);
    }

    #[test]
    fn item_count_does_not_wrap() {
        let items = vec![line("a", u32::MAX, dec!(0.01)), line("b", u32::MAX, dec!(0.01))];
        assert_eq!(summarize(&items).item_count, 2 * u64::from(u32::MAX));
    }

    #[test]
    fn malformed_entries_are_reported_individually() {
        let catalog = Catalog::builtin();
        let mut cart = Vec::new();
        let mut outcome = BatchOutcome::default();
        let requests: Vec<ItemRequest> = serde_json::from_value(serde_json::json!([
            { "product_id": 123, "quantity": 1 },
            { "product_id": ["tool-001"] },
            { "product_id": "tool-002", "quantity": "two" },
            { "product_id": "tool-003", "quantity": 1.5 },
            "tool-001",
            { "product_id": "tool-001", "quantity": null }
        ]))
        .unwrap();

        apply_additions(&mut cart, &requests, &catalog, &mut outcome);

        assert_eq!(
            outcome.errors,
            vec![
                "Product 123 not found",
                "Invalid product_id in items_to_add",
                "Invalid quantity \"two\" for product tool-002",
                "Invalid quantity 1.5 for product tool-003",
                "Missing product_id in items_to_add",
            ]
        );
        assert_eq!(cart.len(), 1);
        assert_eq!(cart[0].product_id, "tool-001");
        assert_eq!(cart[0].quantity, 1);
    }

    #[test]
    fn item_summary_format() {
        let items = vec![line("a", 2, dec!(1.00)), line("b", 1, dec!(1.00))];
        assert_eq!(format_item_summary(&items), "2x A, 1x B");
    }
}
