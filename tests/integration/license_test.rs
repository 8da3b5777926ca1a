//! Integration tests for license creation, validation, and status.

use chrono::{Days, Utc};
use http::StatusCode;

use crate::helpers::{ADMIN_KEY, TestApp};

#[tokio::test]
async fn test_create_requires_admin_key() {
    let app = TestApp::new();

    let response = app
        .request("POST", "/create", Some(serde_json::json!({})), &[])
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let response = app
        .request(
            "POST",
            "/create",
            Some(serde_json::json!({})),
            &[("x-admin-key", "wrong-key")],
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_returns_license_key() {
    let app = TestApp::new();
    let key = app.create_license(None).await;
    assert!(!key.is_empty());

    // Default validity is 14 days.
    let response = app
        .request("GET", &format!("/check?key={key}"), None, &[])
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let body = response.json();
    assert_eq!(body["days_remaining"], 14);
    assert_eq!(body["is_expired"], false);
    assert!(body["bound_mac"].is_null());
}

#[tokio::test]
async fn test_create_accepts_expiration_override() {
    let app = TestApp::new();
    let key = app.create_license(Some("2030-06-15")).await;

    let response = app
        .request("GET", &format!("/check?key={key}"), None, &[])
        .await;
    assert_eq!(response.json()["expiration"], "2030-06-15");
}

#[tokio::test]
async fn test_create_rejects_malformed_expiration() {
    let app = TestApp::new();

    for raw in ["2024-13-99", "2024-06-15-extra", "soon"] {
        let response = app
            .request(
                "POST",
                "/create",
                Some(serde_json::json!({ "expiration": raw })),
                &[("x-admin-key", ADMIN_KEY)],
            )
            .await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "accepted {raw:?}");
    }
}

#[tokio::test]
async fn test_create_honors_ip_allow_list() {
    let app = TestApp::with_allowed_ips(vec!["10.0.0.1"]);

    let blocked = app
        .request(
            "POST",
            "/create",
            Some(serde_json::json!({})),
            &[("x-admin-key", ADMIN_KEY), ("x-forwarded-for", "10.9.9.9")],
        )
        .await;
    assert_eq!(blocked.status, StatusCode::FORBIDDEN);

    let allowed = app
        .request(
            "POST",
            "/create",
            Some(serde_json::json!({})),
            &[("x-admin-key", ADMIN_KEY), ("x-forwarded-for", "10.0.0.1")],
        )
        .await;
    assert_eq!(allowed.status, StatusCode::OK);
}

#[tokio::test]
async fn test_test_license_requires_mac() {
    let app = TestApp::new();

    let response = app
        .request("POST", "/test", Some(serde_json::json!({})), &[])
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_test_license_lifecycle() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/test",
            Some(serde_json::json!({ "mac": "AA:BB:CC" })),
            &[],
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let body = response.json();
    let key = body["license_key"].as_str().unwrap().to_string();
    let expected = Utc::now().date_naive() + Days::new(7);
    assert_eq!(body["expires"], expected.format("%Y-%m-%d").to_string());

    // The trial license is already bound to the device.
    let response = app
        .request(
            "POST",
            "/validate",
            Some(serde_json::json!({ "key": key, "mac": "AA:BB:CC" })),
            &[],
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body_text, "License valid");

    // A second trial for the same device conflicts.
    let response = app
        .request(
            "POST",
            "/test",
            Some(serde_json::json!({ "mac": "AA:BB:CC" })),
            &[],
        )
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_validate_requires_both_fields() {
    let app = TestApp::new();

    for body in [
        serde_json::json!({}),
        serde_json::json!({ "key": "some-key" }),
        serde_json::json!({ "mac": "AA:BB" }),
    ] {
        let response = app.request("POST", "/validate", Some(body), &[]).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.body_text, "Missing key or mac in body");
    }
}

#[tokio::test]
async fn test_validate_unknown_key() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/validate",
            Some(serde_json::json!({ "key": "nope", "mac": "AA:BB" })),
            &[],
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_validate_binds_once_then_enforces_device() {
    let app = TestApp::new();
    let key = app.create_license(None).await;

    let first = app
        .request(
            "POST",
            "/validate",
            Some(serde_json::json!({ "key": key, "mac": "AA:BB" })),
            &[],
        )
        .await;
    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(first.body_text, "License valid and bound to this device");

    let second = app
        .request(
            "POST",
            "/validate",
            Some(serde_json::json!({ "key": key, "mac": "AA:BB" })),
            &[],
        )
        .await;
    assert_eq!(second.status, StatusCode::OK);
    assert_eq!(second.body_text, "License valid");

    let mismatch = app
        .request(
            "POST",
            "/validate",
            Some(serde_json::json!({ "key": key, "mac": "CC:DD" })),
            &[],
        )
        .await;
    assert_eq!(mismatch.status, StatusCode::FORBIDDEN);

    // The mismatch did not steal the binding.
    let check = app
        .request("GET", &format!("/check?key={key}"), None, &[])
        .await;
    assert_eq!(check.json()["bound_mac"], "AA:BB");
}

#[tokio::test]
async fn test_validate_expired_license() {
    let app = TestApp::new();
    let yesterday = Utc::now().date_naive() - Days::new(1);
    let key = app
        .create_license(Some(&yesterday.format("%Y-%m-%d").to_string()))
        .await;

    let response = app
        .request(
            "POST",
            "/validate",
            Some(serde_json::json!({ "key": key, "mac": "AA:BB" })),
            &[],
        )
        .await;
    assert_eq!(response.status, StatusCode::GONE);
}

#[tokio::test]
async fn test_check_requires_key() {
    let app = TestApp::new();
    let response = app.request("GET", "/check", None, &[]).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_check_unknown_key() {
    let app = TestApp::new();
    let response = app.request("GET", "/check?key=nope", None, &[]).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_check_reports_expired_license() {
    let app = TestApp::new();
    let last_week = Utc::now().date_naive() - Days::new(7);
    let key = app
        .create_license(Some(&last_week.format("%Y-%m-%d").to_string()))
        .await;

    let response = app
        .request("GET", &format!("/check?key={key}"), None, &[])
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let body = response.json();
    assert_eq!(body["is_expired"], true);
    assert_eq!(body["days_remaining"], 0);
}

#[tokio::test]
async fn test_unmatched_route_is_404() {
    let app = TestApp::new();
    let response = app.request("GET", "/licenses", None, &[]).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    // Wrong method on a known path is still a 404.
    let response = app.request("GET", "/validate", None, &[]).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_health() {
    let app = TestApp::new();
    let response = app.request("GET", "/health", None, &[]).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["status"], "ok");
}
