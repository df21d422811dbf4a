//! Integration tests for the REST front end
//!
//! These drive the same router the server binary runs and check the JSON
//! each endpoint returns, including the error envelopes.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use futures_util::future::join_all;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::util::ServiceExt; // for `oneshot`

use garden_services::router::create_app_router;
use garden_services::state::AppState;

fn create_test_app() -> axum::Router {
    create_app_router(Arc::new(AppState::new()))
}

async fn get_json(app: &axum::Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    read_response(app.clone().oneshot(request).await.unwrap()).await
}

async fn post_raw(app: &axum::Router, uri: &str, body: String) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();
    read_response(app.clone().oneshot(request).await.unwrap()).await
}

async fn read_response(response: axum::response::Response) -> (StatusCode, Value) {
    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(json!({}));
    (status, body)
}

#[tokio::test]
async fn test_health_check() {
    let app = create_test_app();

    let (status, body) = get_json(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "customer-services-agent");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_list_products() {
    let app = create_test_app();

    let (status, body) = get_json(&app, "/api/products").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["department"], "all");
    assert_eq!(body["total_products"], 11);
    assert!(body.get("error").is_none());

    let (_, body) = get_json(&app, "/api/products?department=Seeds").await;
    assert_eq!(body["department"], "seeds");
    assert_eq!(body["total_products"], 3);
    assert_eq!(body["products"][0]["product_id"], "seed-101");
    assert_eq!(body["products"][0]["price"], 3.99);
}

#[tokio::test]
async fn test_list_products_unknown_department() {
    let app = create_test_app();

    let (status, body) = get_json(&app, "/api/products?department=nonexistent").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["department"], "nonexistent");
    assert_eq!(body["total_products"], 0);
    assert_eq!(body["products"], json!([]));
    assert!(body["error"].as_str().unwrap().contains("nonexistent"));
    assert_eq!(
        body["available_departments"],
        json!(["tools", "seeds", "decor", "irrigation"])
    );
}

#[tokio::test]
async fn test_recommendations() {
    let app = create_test_app();

    let (status, body) = get_json(
        &app,
        "/api/recommendations?plant_type=Tomatoes&customer_id=c9",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["customer_id"], "c9");
    assert_eq!(body["total_recommendations"], 3);
    assert_eq!(body["recommendations"][2]["product_id"], "supp-101");
    assert!(body.get("note").is_none());
}

#[tokio::test]
async fn test_recommendations_missing_query_is_bad_request() {
    let app = create_test_app();

    let (status, body) = get_json(&app, "/api/recommendations?plant_type=roses").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().starts_with("Bad Request"));
}

#[tokio::test]
async fn test_availability() {
    let app = create_test_app();

    let (status, body) = get_json(&app, "/api/availability/tool-003").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["store"], "pickup");
    assert_eq!(body["quantity"], 12);
    assert_eq!(body["status"], "in_stock");

    let (_, body) = get_json(&app, "/api/availability/decor-202?store_id=store-12").await;
    assert_eq!(body["available"], false);
    assert_eq!(body["store"], "store-12");
    assert_eq!(body["message"], "Out of stock at store-12");
}

#[tokio::test]
async fn test_get_cart_seeds_new_customer() {
    let app = create_test_app();

    let (status, body) = get_json(&app, "/api/carts/new-customer").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["customer_id"], "new-customer");
    assert_eq!(body["items"].as_array().unwrap().len(), 2);
    assert_eq!(body["items"][0]["product_id"], "soil-123");
    assert_eq!(body["subtotal"], 25.97);
    assert_eq!(body["tax"], 2.08);
    assert_eq!(body["total"], 28.05);
    assert_eq!(body["item_count"], 3);
    assert_eq!(body["unique_items"], 2);
    assert_eq!(body["last_updated"], "2024-01-15T10:30:00Z");
}

#[tokio::test]
async fn test_modify_cart() {
    let app = create_test_app();

    let (status, body) = post_raw(
        &app,
        "/api/carts/cust-7",
        json!({
            "items_to_remove": [{ "product_id": "soil-123", "quantity": 5 }],
            "items_to_add": [{ "product_id": "fert-321", "quantity": 2 }]
        })
        .to_string(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");
    assert_eq!(body["modifications"]["items_removed"][0]["quantity"], 2);
    assert_eq!(body["modifications"]["items_added"][0]["total_price"], 27.98);
    assert_eq!(body["cart_summary"]["unique_items"], 2);

    let (_, cart) = get_json(&app, "/api/carts/cust-7").await;
    let ids: Vec<_> = cart["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["product_id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, ["seed-101", "fert-321"]);
}

#[tokio::test]
async fn test_modify_cart_bad_body() {
    let app = create_test_app();

    let (status, body) = post_raw(&app, "/api/carts/cust-8", "not json".into()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_unknown_route() {
    let app = create_test_app();

    let (status, body) = get_json(&app, "/api/does-not-exist").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Not Found");
}

#[tokio::test]
async fn test_concurrent_additions_are_not_lost() {
    let app = create_test_app();

    let tasks = (0..16).map(|_| {
        let app = app.clone();
        tokio::spawn(async move {
            post_raw(
                &app,
                "/api/carts/busy",
                json!({ "items_to_add": [{ "product_id": "tool-002", "quantity": 1 }] })
                    .to_string(),
            )
            .await
        })
    });

    for outcome in join_all(tasks).await {
        let (status, body) = outcome.unwrap();
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "success");
    }

    let (_, cart) = get_json(&app, "/api/carts/busy").await;
    let shears = cart["items"]
        .as_array()
        .unwrap()
        .iter()
        .find(|i| i["product_id"] == "tool-002")
        .unwrap()
        .clone();
    assert_eq!(shears["quantity"], 16);
    assert_eq!(cart["item_count"], 19);
}
