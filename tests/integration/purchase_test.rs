//! Integration tests for the payment-gated purchase and extension flows.

use chrono::{Days, Utc};
use http::StatusCode;

use crate::helpers::{CONTRACT, TestApp, record, transfer_record};

#[tokio::test]
async fn test_purchase_requires_tx_hash() {
    let app = TestApp::new();

    let response = app
        .request("POST", "/purchase", Some(serde_json::json!({})), &[])
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body_text, "Missing tx_hash in body");
}

#[tokio::test]
async fn test_purchase_ten_usdt_grants_ninety_days() {
    let app = TestApp::with_transactions(vec![("tx1", transfer_record(10_000_000))]);

    let response = app
        .request(
            "POST",
            "/purchase",
            Some(serde_json::json!({ "tx_hash": "tx1" })),
            &[],
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "{}", response.body_text);

    let body = response.json();
    assert_eq!(body["days_granted"], 90);
    assert_eq!(body["amount_paid"], 10.0);
    let expected = Utc::now().date_naive() + Days::new(90);
    assert_eq!(body["expires"], expected.format("%Y-%m-%d").to_string());

    // The license exists, unbound, with purchase provenance visible.
    let key = body["license_key"].as_str().unwrap();
    let check = app
        .request("GET", &format!("/check?key={key}"), None, &[])
        .await;
    let check_body = check.json();
    assert!(check_body["bound_mac"].is_null());
    assert!(!check_body["purchase_date"].is_null());
    assert!(check_body["last_extended"].is_null());
}

#[tokio::test]
async fn test_purchase_with_mac_pre_binds_license() {
    let app = TestApp::with_transactions(vec![("tx1", transfer_record(5_000_000))]);

    let response = app
        .request(
            "POST",
            "/purchase",
            Some(serde_json::json!({ "tx_hash": "tx1", "mac": "AA:BB" })),
            &[],
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["days_granted"], 30);

    let key = response.json()["license_key"].as_str().unwrap().to_string();
    let validate = app
        .request(
            "POST",
            "/validate",
            Some(serde_json::json!({ "key": key, "mac": "AA:BB" })),
            &[],
        )
        .await;
    assert_eq!(validate.body_text, "License valid");
}

#[tokio::test]
async fn test_purchase_unknown_transaction() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/purchase",
            Some(serde_json::json!({ "tx_hash": "missing" })),
            &[],
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_purchase_below_minimum() {
    let app = TestApp::with_transactions(vec![("tx1", transfer_record(4_990_000))]);

    let response = app
        .request(
            "POST",
            "/purchase",
            Some(serde_json::json!({ "tx_hash": "tx1" })),
            &[],
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.body_text.contains("minimum"));
}

#[tokio::test]
async fn test_purchase_rejects_failed_transaction() {
    let app = TestApp::with_transactions(vec![(
        "tx1",
        record("REVERT", "TriggerSmartContract", CONTRACT, String::new()),
    )]);

    let response = app
        .request(
            "POST",
            "/purchase",
            Some(serde_json::json!({ "tx_hash": "tx1" })),
            &[],
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_purchase_replay_conflicts() {
    let app = TestApp::with_transactions(vec![("tx1", transfer_record(10_000_000))]);

    let first = app
        .request(
            "POST",
            "/purchase",
            Some(serde_json::json!({ "tx_hash": "tx1" })),
            &[],
        )
        .await;
    assert_eq!(first.status, StatusCode::OK);
    let key = first.json()["license_key"].as_str().unwrap().to_string();

    let replay = app
        .request(
            "POST",
            "/purchase",
            Some(serde_json::json!({ "tx_hash": "tx1" })),
            &[],
        )
        .await;
    assert_eq!(replay.status, StatusCode::CONFLICT);

    // The original license was not touched by the replay.
    let check = app
        .request("GET", &format!("/check?key={key}"), None, &[])
        .await;
    assert_eq!(check.json()["days_remaining"], 90);
}

#[tokio::test]
async fn test_extend_requires_both_fields() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/extend",
            Some(serde_json::json!({ "tx_hash": "tx1" })),
            &[],
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body_text, "Missing tx_hash or license_key in body");
}

#[tokio::test]
async fn test_extend_active_license() {
    let app = TestApp::with_transactions(vec![
        ("tx1", transfer_record(10_000_000)),
        ("tx2", transfer_record(20_000_000)),
    ]);

    let purchase = app
        .request(
            "POST",
            "/purchase",
            Some(serde_json::json!({ "tx_hash": "tx1" })),
            &[],
        )
        .await;
    let key = purchase.json()["license_key"].as_str().unwrap().to_string();

    let extend = app
        .request(
            "POST",
            "/extend",
            Some(serde_json::json!({ "tx_hash": "tx2", "license_key": key })),
            &[],
        )
        .await;
    assert_eq!(extend.status, StatusCode::OK, "{}", extend.body_text);

    let body = extend.json();
    assert_eq!(body["days_added"], 180);
    assert_eq!(body["amount_paid"], 20.0);
    assert_eq!(body["extended_from"], "previous_expiration");
    let expected = Utc::now().date_naive() + Days::new(90 + 180);
    assert_eq!(
        body["new_expiration"],
        expected.format("%Y-%m-%d").to_string()
    );

    // Extension provenance shows up on /check.
    let check = app
        .request("GET", &format!("/check?key={key}"), None, &[])
        .await;
    assert!(!check.json()["last_extended"].is_null());
}

#[tokio::test]
async fn test_extend_expired_license_counts_from_today() {
    let app = TestApp::with_transactions(vec![("tx1", transfer_record(10_000_000))]);

    let five_days_ago = Utc::now().date_naive() - Days::new(5);
    let key = app
        .create_license(Some(&five_days_ago.format("%Y-%m-%d").to_string()))
        .await;

    let extend = app
        .request(
            "POST",
            "/extend",
            Some(serde_json::json!({ "tx_hash": "tx1", "license_key": key })),
            &[],
        )
        .await;
    assert_eq!(extend.status, StatusCode::OK);

    let body = extend.json();
    assert_eq!(body["extended_from"], "today");
    let expected = Utc::now().date_naive() + Days::new(90);
    assert_eq!(
        body["new_expiration"],
        expected.format("%Y-%m-%d").to_string()
    );
}

#[tokio::test]
async fn test_extend_unknown_license() {
    let app = TestApp::with_transactions(vec![("tx1", transfer_record(10_000_000))]);

    let response = app
        .request(
            "POST",
            "/extend",
            Some(serde_json::json!({ "tx_hash": "tx1", "license_key": "missing" })),
            &[],
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_extend_cannot_reuse_consumed_transaction() {
    let app = TestApp::with_transactions(vec![("tx1", transfer_record(10_000_000))]);

    let purchase = app
        .request(
            "POST",
            "/purchase",
            Some(serde_json::json!({ "tx_hash": "tx1" })),
            &[],
        )
        .await;
    let key = purchase.json()["license_key"].as_str().unwrap().to_string();

    let extend = app
        .request(
            "POST",
            "/extend",
            Some(serde_json::json!({ "tx_hash": "tx1", "license_key": key })),
            &[],
        )
        .await;
    assert_eq!(extend.status, StatusCode::CONFLICT);
}
