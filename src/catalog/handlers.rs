//! REST API handlers for catalog lookups

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use super::models::*;
use crate::error::{AppError, AppResult};
use crate::state::SharedState;

/// Store used when an availability query names none
const DEFAULT_STORE: &str = "pickup";

/// Creates routes for catalog operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/api/products", get(list_products))
        .route("/api/recommendations", get(recommendations))
        .route("/api/availability/:product_id", get(availability))
}

#[derive(Debug, Deserialize)]
struct StoreQuery {
    store_id: Option<String>,
}

/// Endpoint: GET /api/products?department=
async fn list_products(
    State(state): State<SharedState>,
    query: Result<Query<ListProductsArgs>, QueryRejection>,
) -> AppResult<Json<ProductListResult>> {
    let Query(args) = query.map_err(|e| AppError::BadRequest(e.body_text()))?;
    Ok(Json(state.services.list_products(args.department.as_deref())))
}

/// Endpoint: GET /api/recommendations?plant_type=&customer_id=
async fn recommendations(
    State(state): State<SharedState>,
    query: Result<Query<RecommendationArgs>, QueryRejection>,
) -> AppResult<Json<RecommendationResult>> {
    let Query(args) = query.map_err(|e| AppError::BadRequest(e.body_text()))?;
    Ok(Json(
        state.services.recommend(&args.plant_type, &args.customer_id),
    ))
}

/// Endpoint: GET /api/availability/:product_id?store_id=
async fn availability(
    State(state): State<SharedState>,
    Path(product_id): Path<String>,
    Query(query): Query<StoreQuery>,
) -> Json<AvailabilityResult> {
    let store_id = query.store_id.as_deref().unwrap_or(DEFAULT_STORE);
    Json(state.services.check_availability(&product_id, store_id))
}
