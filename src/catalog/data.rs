//! Built-in catalog tables
//!
//! The store runs against a fixed product list, a fixed inventory and a fixed
//! set of recommendation rules. Everything here is built once when the
//! [`Catalog`](super::Catalog) is constructed and never mutated afterwards.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::models::{InventoryRecord, Product, RecommendationEntry};

/// Departments reported back when a department filter matches nothing
pub const LISTED_DEPARTMENTS: [&str; 4] = ["tools", "seeds", "decor", "irrigation"];

/// The one product that can never be added to a cart
pub const OUT_OF_STOCK_PRODUCT_ID: &str = "decor-202";

pub const FLOWERING_NOTE: &str = "General flowering plant recommendations";
pub const VEGETABLE_NOTE: &str = "General vegetable gardening recommendations";
pub const GENERAL_NOTE: &str = "General gardening recommendations - consider providing more specific plant information for better suggestions";

fn product(
    product_id: &str,
    name: &str,
    description: &str,
    department: &str,
    price: Decimal,
    stock_quantity: u32,
) -> Product {
    Product {
        product_id: product_id.into(),
        name: name.into(),
        description: description.into(),
        department: department.into(),
        price,
        in_stock: stock_quantity > 0,
        stock_quantity,
    }
}

fn entry(
    product_id: &str,
    name: &str,
    description: &str,
    price: Decimal,
    stock_quantity: u32,
    category: &str,
) -> RecommendationEntry {
    RecommendationEntry {
        product_id: product_id.into(),
        name: name.into(),
        description: description.into(),
        price,
        in_stock: stock_quantity > 0,
        stock_quantity,
        category: category.into(),
    }
}

/// Products shown in the department listing, in display order.
#[rustfmt::skip]
pub fn listed_products() -> Vec<Product> {
    vec![
        // Tools
        product("tool-001", "Hand Trowel", "Durable steel trowel for planting and transplanting.", "tools", dec!(12.99), 45),
        product("tool-002", "Pruning Shears", "Sharp bypass pruners for trimming stems and branches.", "tools", dec!(24.99), 23),
        product("tool-003", "Garden Spade", "Heavy-duty spade for digging and soil preparation.", "tools", dec!(34.99), 12),
        // Seeds
        product("seed-101", "Tomato Seeds - Cherry", "Heirloom cherry tomato seeds for sweet, juicy fruits.", "seeds", dec!(3.99), 156),
        product("seed-102", "Sunflower Seeds - Giant", "Tall, vibrant yellow sunflowers that attract pollinators.", "seeds", dec!(4.99), 89),
        product("seed-103", "Petunia Seeds - Mixed Colors", "Colorful annual flowers perfect for containers and borders.", "seeds", dec!(5.99), 67),
        // Decor
        product("decor-201", "Terracotta Planter - Large", "Classic clay pot ideal for indoor and outdoor plants.", "decor", dec!(18.99), 34),
        product("decor-202", "Solar Garden Lantern", "Solar-powered lantern to add charm to your garden.", "decor", dec!(29.99), 0),
        product("decor-203", "Garden Stepping Stones", "Natural stone path markers for garden walkways.", "decor", dec!(39.99), 18),
        // Irrigation
        product("irrig-301", "Soaker Hose - 25ft", "Efficient watering system for garden beds.", "irrigation", dec!(19.99), 28),
        product("irrig-302", "Copper Watering Can", "Metal watering can with a long spout for gentle watering.", "irrigation", dec!(42.99), 15),
    ]
}

#[rustfmt::skip]
pub fn petunia_set() -> Vec<RecommendationEntry> {
    vec![
        entry("soil-456", "Bloom Booster Potting Mix", "Premium potting mix with extra nutrients that Petunias love for continuous blooming.", dec!(14.99), 42, "soil"),
        entry("fert-789", "Flower Power Fertilizer", "Specifically formulated for flowering annuals with balanced NPK ratio.", dec!(9.99), 67, "fertilizer"),
        entry("tool-004", "Deadheading Snips", "Precision snips perfect for deadheading petunias to encourage more blooms.", dec!(16.99), 23, "tools"),
    ]
}

#[rustfmt::skip]
pub fn tomato_set() -> Vec<RecommendationEntry> {
    vec![
        entry("soil-789", "Vegetable Garden Soil", "Rich, organic soil blend perfect for tomatoes and other vegetables.", dec!(12.99), 38, "soil"),
        entry("fert-456", "Tomato & Vegetable Fertilizer", "Specially formulated for tomatoes with calcium to prevent blossom end rot.", dec!(11.99), 45, "fertilizer"),
        entry("supp-101", "Tomato Cages - Set of 3", "Sturdy wire cages to support growing tomato plants.", dec!(24.99), 19, "support"),
    ]
}

#[rustfmt::skip]
pub fn sunflower_set() -> Vec<RecommendationEntry> {
    vec![
        entry("soil-123", "All-Purpose Garden Soil", "Well-draining soil perfect for sunflowers and other tall plants.", dec!(10.99), 56, "soil"),
        entry("fert-321", "High Nitrogen Fertilizer", "Promotes strong stem growth for tall plants like sunflowers.", dec!(13.99), 31, "fertilizer"),
    ]
}

#[rustfmt::skip]
pub fn general_set() -> Vec<RecommendationEntry> {
    vec![
        entry("soil-123", "All-Purpose Garden Soil", "Versatile potting soil suitable for most plants.", dec!(10.99), 56, "soil"),
        entry("fert-general", "General Purpose Plant Food", "Balanced fertilizer suitable for a wide variety of plants.", dec!(8.99), 73, "fertilizer"),
    ]
}

/// Stock counters as `(product_id, quantity, reserved)`.
pub fn inventory() -> Vec<(&'static str, InventoryRecord)> {
    [
        ("tool-001", 45, 3),
        ("tool-002", 23, 1),
        ("tool-003", 12, 0),
        ("seed-101", 156, 8),
        ("seed-102", 89, 4),
        ("seed-103", 67, 2),
        ("decor-201", 34, 1),
        ("decor-202", 0, 0),
        ("decor-203", 18, 2),
        ("irrig-301", 28, 3),
        ("irrig-302", 15, 1),
        ("soil-456", 42, 2),
        ("fert-789", 67, 5),
        ("tool-004", 23, 1),
        ("soil-789", 38, 3),
        ("fert-456", 45, 2),
        ("supp-101", 19, 1),
        ("soil-123", 56, 4),
        ("fert-321", 31, 2),
        ("fert-general", 73, 3),
    ]
    .into_iter()
    .map(|(id, quantity, reserved)| (id, InventoryRecord::new(quantity, reserved)))
    .collect()
}
