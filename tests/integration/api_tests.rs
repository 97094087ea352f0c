//! API integration tests
//!
//! These run against a live server with seeded master data.

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080/api/v1";

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_catalog_lists() {
    let client = Client::new();

    for path in ["catalog/packages", "catalog/vehicles", "catalog/buses"] {
        let response = client
            .get(format!("{}/{}", BASE_URL, path))
            .send()
            .await
            .expect("Failed to send request");

        assert!(response.status().is_success());

        let body: Value = response.json().await.expect("Failed to parse response");
        assert!(body.is_array());
    }
}

#[tokio::test]
#[ignore]
async fn test_create_booking_and_list() {
    let client = Client::new();

    let response = client
        .post(format!("{}/bookings", BASE_URL))
        .json(&json!({
            "resource_type": "tour",
            "package_id": "PKG-A",
            "title": "Golden Triangle",
            "date": "2026-09-10",
            "guest_spec": "2 Adults, 1 Child"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.expect("Failed to parse response");
    let booking_id = body["id"].as_str().expect("No booking ID").to_string();

    let response = client
        .get(format!("{}/bookings/{}", BASE_URL, booking_id))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
}

#[tokio::test]
#[ignore]
async fn test_tour_month_view() {
    let client = Client::new();

    let response = client
        .get(format!(
            "{}/availability/tour/month?year=2026&month=9",
            BASE_URL
        ))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    let cells = body.as_array().expect("Expected an array of slots");
    assert_eq!(cells.len(), 30);
    assert!(cells[0]["status"].is_string());
}

#[tokio::test]
#[ignore]
async fn test_block_day_via_override() {
    let client = Client::new();

    let response = client
        .put(format!("{}/overrides/15", BASE_URL))
        .json(&json!({ "blocked": true }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let response = client
        .get(format!(
            "{}/availability/tour/day?date=2026-09-15",
            BASE_URL
        ))
        .send()
        .await
        .expect("Failed to send request");

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "blocked");
}

#[tokio::test]
#[ignore]
async fn test_unknown_class_is_rejected() {
    let client = Client::new();

    let response = client
        .get(format!(
            "{}/availability/spaceship/day?date=2026-09-15",
            BASE_URL
        ))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}
