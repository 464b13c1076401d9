//! Integration tests for the rental pricing engine HTTP API.
//!
//! This test suite covers:
//! - Per-category pricing and points
//! - Combined statements and totals
//! - Rental order preservation
//! - Rule listing
//! - Error cases

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;
use tower::ServiceExt;

use rental_engine::api::{AppState, create_router};
use rental_engine::config::ConfigLoader;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_router_for_test() -> Router {
    let registry = ConfigLoader::load("./config/pricing.yaml").expect("Failed to load config");
    create_router(AppState::new(registry))
}

fn decimal(value: &Value) -> Decimal {
    Decimal::from_str(value.as_str().expect("decimal should be a string")).unwrap()
}

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

async fn post_statement(router: Router, body: Value) -> (StatusCode, Value) {
    post_raw(router, body.to_string()).await
}

async fn post_raw(router: Router, body: String) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/statement")
                .header("Content-Type", "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

fn rental(title: &str, category: &str, days_rented: i64) -> Value {
    json!({ "title": title, "category": category, "days_rented": days_rented })
}

fn request(rentals: Vec<Value>) -> Value {
    json!({ "customer": "Scott", "rentals": rentals })
}

async fn single_line(category: &str, days_rented: i64) -> (Decimal, u64) {
    let (status, body) = post_statement(
        create_router_for_test(),
        request(vec![rental("Movie", category, days_rented)]),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "unexpected body: {}", body);

    let line = &body["statement"]["lines"][0];
    (decimal(&line["due"]), line["points"].as_u64().unwrap())
}

// =============================================================================
// Per-category pricing
// =============================================================================

#[tokio::test]
async fn test_regular_three_days() {
    assert_eq!(single_line("REGULAR", 3).await, (dec("3.5"), 1));
}

#[tokio::test]
async fn test_regular_within_included_days() {
    assert_eq!(single_line("REGULAR", 2).await, (dec("4"), 1));
}

#[tokio::test]
async fn test_new_release_four_days() {
    assert_eq!(single_line("NEW_RELEASE", 4).await, (dec("12"), 2));
}

#[tokio::test]
async fn test_new_release_single_day_has_no_bonus() {
    assert_eq!(single_line("NEW_RELEASE", 1).await, (dec("3"), 1));
}

#[tokio::test]
async fn test_childrens_five_days() {
    assert_eq!(single_line("CHILDRENS", 5).await, (dec("4.5"), 1));
}

#[tokio::test]
async fn test_childrens_at_included_days() {
    assert_eq!(single_line("CHILDRENS", 3).await, (dec("4.5"), 1));
}

#[tokio::test]
async fn test_classic_six_days() {
    assert_eq!(single_line("CLASSIC", 6).await, (dec("6"), 1));
}

#[tokio::test]
async fn test_category_spelling_is_normalized() {
    assert_eq!(single_line("new release", 4).await, (dec("12"), 2));
}

// =============================================================================
// Combined statements
// =============================================================================

#[tokio::test]
async fn test_all_four_categories_combined() {
    let (status, body) = post_statement(
        create_router_for_test(),
        request(vec![
            rental("First Movie", "REGULAR", 3),
            rental("Second Movie", "NEW_RELEASE", 4),
            rental("Third Movie", "CHILDRENS", 5),
            rental("Fourth Movie", "CLASSIC", 6),
        ]),
    )
    .await;

    assert_eq!(status, StatusCode::OK);

    let statement = &body["statement"];
    assert_eq!(statement["customer"], "Scott");
    assert_eq!(decimal(&statement["totals"]["total_due"]), dec("26.0"));
    assert_eq!(statement["totals"]["total_points"], 5);

    let lines = statement["lines"].as_array().unwrap();
    let line_sum: Decimal = lines.iter().map(|l| decimal(&l["due"])).sum();
    assert_eq!(line_sum, dec("26.0"));

    let report = body["report"].as_str().unwrap();
    assert!(report.starts_with("Rental record for Scott\n"));
    assert!(report.contains("Fourth Movie\tcost 6\n"));
    assert!(report.contains("The total amount owed is 26\n"));
    assert!(report.contains("you have earned 5 frequent renter points."));
}

#[tokio::test]
async fn test_lines_follow_rental_order() {
    let (status, body) = post_statement(
        create_router_for_test(),
        request(vec![
            rental("Zulu", "CLASSIC", 1),
            rental("Alpha", "REGULAR", 1),
            rental("Mike", "CHILDRENS", 1),
        ]),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let titles: Vec<&str> = body["statement"]["lines"]
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Zulu", "Alpha", "Mike"]);
}

#[tokio::test]
async fn test_empty_rentals_produce_zero_totals() {
    let (status, body) = post_statement(create_router_for_test(), request(vec![])).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(decimal(&body["statement"]["totals"]["total_due"]), Decimal::ZERO);
    assert_eq!(body["statement"]["totals"]["total_points"], 0);
}

#[tokio::test]
async fn test_response_metadata_present() {
    let (_, body) = post_statement(
        create_router_for_test(),
        request(vec![rental("First Movie", "REGULAR", 3)]),
    )
    .await;

    assert!(body["statement_id"].as_str().is_some());
    assert!(body["generated_at"].as_str().is_some());
    assert_eq!(body["engine_version"], env!("CARGO_PKG_VERSION"));
}

// =============================================================================
// Rule listing
// =============================================================================

#[tokio::test]
async fn test_rules_endpoint_lists_registered_rules() {
    let response = create_router_for_test()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/rules")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&body_bytes).unwrap();

    let categories: Vec<&str> = body["rules"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["category"].as_str().unwrap())
        .collect();
    assert_eq!(categories, vec!["CHILDRENS", "CLASSIC", "NEW_RELEASE", "REGULAR"]);

    let new_release = &body["rules"][2];
    assert_eq!(new_release["bonus_points"]["min_days"], 2);
    assert!(new_release.get("discount_tier").is_none());
}

// =============================================================================
// Error cases
// =============================================================================

#[tokio::test]
async fn test_unknown_category_rejects_whole_statement() {
    let (status, body) = post_statement(
        create_router_for_test(),
        request(vec![
            rental("First Movie", "REGULAR", 3),
            rental("Lost Movie", "HORROR", 2),
        ]),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "UNKNOWN_CATEGORY");
    assert!(body["message"].as_str().unwrap().contains("HORROR"));
    assert!(body.get("statement").is_none());
}

#[tokio::test]
async fn test_zero_days_rejected() {
    let (status, body) = post_statement(
        create_router_for_test(),
        request(vec![rental("First Movie", "REGULAR", 0)]),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_DURATION");
}

#[tokio::test]
async fn test_negative_days_rejected() {
    let (status, body) = post_statement(
        create_router_for_test(),
        request(vec![rental("First Movie", "REGULAR", -2)]),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "MALFORMED_JSON");
}

#[tokio::test]
async fn test_empty_title_rejected() {
    let (status, body) = post_statement(
        create_router_for_test(),
        request(vec![rental("", "REGULAR", 2)]),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_RENTAL");
}

#[tokio::test]
async fn test_missing_customer_is_validation_error() {
    let (status, body) = post_statement(
        create_router_for_test(),
        json!({ "rentals": [] }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_malformed_json_rejected() {
    let (status, body) = post_raw(create_router_for_test(), "{ not json".to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "MALFORMED_JSON");
}

#[tokio::test]
async fn test_points_total_overflow_rejects_statement() {
    let registry = ConfigLoader::from_yaml_str(
        r#"
rules:
  PROMO:
    base_price: "1"
    bonus_points:
      points: 3000000000
      min_days: 1
"#,
    )
    .expect("Failed to parse config");
    let router = create_router(AppState::new(registry));

    let (status, body) = post_statement(
        router,
        request(vec![rental("First Movie", "PROMO", 1), rental("Second Movie", "PROMO", 1)]),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "AMOUNT_OVERFLOW");
    assert!(body.get("statement").is_none());
}
