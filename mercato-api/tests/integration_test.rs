use std::sync::Arc;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use mercato_api::{app, AppState};
use mercato_catalog::{CommissionRateTable, CommissionRule};
use mercato_offer::{Promotion, SelectionPolicy};
use mercato_order::PricingSnapshot;
use mercato_shared::{Platform, PromotionPlatform};
use mercato_store::app_config::PricingConfig;
use mercato_store::SnapshotStore;
use serde_json::{json, Value};
use tower::ServiceExt;

fn test_app(policy: SelectionPolicy) -> (Router, Arc<SnapshotStore>) {
    let snapshot = PricingSnapshot::new(
        CommissionRateTable::new()
            .with_rule(Platform::Personalized, "Electronics", CommissionRule::fixed(5.0))
            .with_rule(Platform::Corporate, "Office", CommissionRule::percentage(10.0)),
        vec![
            Promotion::new("Retail launch", PromotionPlatform::Personalized, 10.0),
            Promotion::new("Retail clearance", PromotionPlatform::Personalized, 30.0),
        ],
    );
    let store = Arc::new(SnapshotStore::new(snapshot));
    let pricing = PricingConfig {
        selection_policy: policy,
        ..PricingConfig::default()
    };
    (app(AppState::new(store.clone(), pricing)), store)
}

async fn send(app: Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    let request = match body {
        Some(body) => builder.body(Body::from(body.to_string())).unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

fn approx(value: &Value, expected: f64) -> bool {
    (value.as_f64().unwrap() - expected).abs() < 1e-9
}

#[tokio::test]
async fn test_health() {
    let (app, _) = test_app(SelectionPolicy::FirstMatch);
    let (status, body) = send(app, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_resolve_end_to_end_scenario() {
    let (app, _) = test_app(SelectionPolicy::FirstMatch);
    let (status, body) = send(
        app,
        "POST",
        "/v1/prices/resolve",
        Some(json!({
            "product": {"price": 50.0, "category": "Electronics"},
            "platform": "personalized"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(approx(&body["original_price"], 55.0));
    assert!(approx(&body["final_price"], 49.5));
    assert_eq!(body["has_discount"], true);
    assert_eq!(body["discount_value"], 10.0);
    assert_eq!(body["display"]["final_price"], "49.50");
    assert!(body["promotion_id"].is_string());
}

#[tokio::test]
async fn test_resolve_uses_highest_reward_policy() {
    let (app, _) = test_app(SelectionPolicy::HighestReward);
    let (status, body) = send(
        app,
        "POST",
        "/v1/prices/resolve",
        Some(json!({
            "product": {"price": 50.0, "category": "Electronics"},
            "quantity": 1,
            "platform": "personalized"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["discount_value"], 30.0);
    assert!(approx(&body["final_price"], 38.5));
}

#[tokio::test]
async fn test_resolve_rejects_invalid_quantity() {
    let (app, _) = test_app(SelectionPolicy::FirstMatch);
    let (status, body) = send(
        app,
        "POST",
        "/v1/prices/resolve",
        Some(json!({
            "product": {"price": 50.0, "category": "Electronics"},
            "quantity": 0,
            "platform": "personalized"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("Quantity"));
}

#[tokio::test]
async fn test_corporate_not_affected_by_retail_promotions() {
    let (app, _) = test_app(SelectionPolicy::FirstMatch);
    let (status, body) = send(
        app,
        "POST",
        "/v1/prices/resolve",
        Some(json!({
            "product": {"price": 10.0, "category": "Office"},
            "platform": "corporate"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(approx(&body["original_price"], 11.0));
    assert!(approx(&body["final_price"], 11.0));
    assert_eq!(body["has_discount"], false);
    assert!(body["promotion_id"].is_null());
}

#[tokio::test]
async fn test_cart_quote() {
    let (app, _) = test_app(SelectionPolicy::FirstMatch);
    let (status, body) = send(
        app,
        "POST",
        "/v1/cart/quote",
        Some(json!({
            "platform": "personalized",
            "lines": [
                {"product": {"price": 50.0, "category": "Electronics"}, "quantity": 2}
            ]
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["lines"].as_array().unwrap().len(), 1);
    assert!(approx(&body["subtotal"], 99.0));
    assert_eq!(body["display"]["original_subtotal"], "110.00");
    assert_eq!(body["display"]["savings"], "11.00");
}

#[tokio::test]
async fn test_compare_and_bid_preview() {
    let (app, _) = test_app(SelectionPolicy::FirstMatch);
    let (status, body) = send(
        app.clone(),
        "POST",
        "/v1/compare",
        Some(json!({
            "platform": "corporate",
            "quantity": 100,
            "products": [
                {"name": "Flat", "price": 10.0, "category": "Office"},
                {"name": "Bulk", "price": 12.0, "category": "Office",
                 "tier_prices": [{"quantity": 100, "price": 8.0}]}
            ]
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["cheapest"], 1);

    let (status, body) = send(
        app,
        "POST",
        "/v1/bids/preview",
        Some(json!({
            "product": {"price": 10.0, "category": "Office",
                        "tier_prices": [{"quantity": 100, "price": 9.0}, {"quantity": 500, "price": 8.0}]},
            "quantity": 150
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["next_tier"]["quantity"], 500);
    assert_eq!(body["next_tier"]["units_needed"], 350);
    assert_eq!(body["display_total"], "1485.00");
}

#[tokio::test]
async fn test_snapshot_replacement() {
    let (app, store) = test_app(SelectionPolicy::FirstMatch);

    let (status, body) = send(
        app.clone(),
        "PUT",
        "/v1/snapshot",
        Some(json!({
            "commission_rates": [],
            "promotions": [
                {"product_scope": "all", "platform": "both", "reward_percentage": 50.0}
            ]
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["version"], 1);
    assert_eq!(store.version(), 1);

    let (_, body) = send(
        app.clone(),
        "POST",
        "/v1/prices/resolve",
        Some(json!({
            "product": {"price": 50.0, "category": "Electronics"},
            "platform": "corporate"
        })),
    )
    .await;
    assert!(approx(&body["final_price"], 25.0));

    let (status, _) = send(
        app,
        "PUT",
        "/v1/snapshot",
        Some(json!({
            "promotions": [
                {"product_scope": "all", "platform": "both", "reward_percentage": 140.0}
            ]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(store.version(), 1);
}
