//! REST API handlers for shopping cart operations
//!
//! This module implements HTTP endpoints for reading and modifying a
//! customer's cart.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    routing::get,
    Json, Router,
};

use super::models::*;
use crate::error::{AppError, AppResult};
use crate::state::SharedState;

/// Creates routes for cart-related operations
pub fn routes() -> Router<SharedState> {
    Router::new().route("/api/carts/:customer_id", get(get_cart).post(modify_cart))
}

/// Endpoint: GET /api/carts/:customer_id
/// Returns the cart, creating it with the default contents on first access.
async fn get_cart(
    State(state): State<SharedState>,
    Path(customer_id): Path<String>,
) -> Json<CartResult> {
    Json(state.services.get_cart(&customer_id))
}

/// Endpoint: POST /api/carts/:customer_id
/// Applies `items_to_remove`, then `items_to_add`.
async fn modify_cart(
    State(state): State<SharedState>,
    Path(customer_id): Path<String>,
    body: Result<Json<CartChanges>, JsonRejection>,
) -> AppResult<Json<ModifyResult>> {
    let Json(changes) = body.map_err(|e| AppError::BadRequest(e.body_text()))?;

    Ok(Json(state.services.modify_cart(
        &customer_id,
        &changes.items_to_add,
        &changes.items_to_remove,
    )))
}
