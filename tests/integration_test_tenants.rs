mod common;

use axum::http::StatusCode;
use common::{parse_body, TestApp};
use serde_json::json;

#[tokio::test]
async fn test_health() {
    let app = TestApp::new().await;
    let res = app.request("GET", "/health", None).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_gym_lookup_by_slug() {
    let app = TestApp::new().await;
    let id = app.create_gym("iron-temple").await;

    let res = app.request("GET", "/api/v1/gyms/by-slug/iron-temple", None).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;
    assert_eq!(body["id"], id.as_str());

    let res = app.request("GET", "/api/v1/gyms/by-slug/nope", None).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_duplicate_slug_conflicts() {
    let app = TestApp::new().await;
    app.create_gym("dup").await;

    let res = app.request(
        "POST",
        "/api/v1/gyms",
        Some(json!({"name": "Other", "slug": "dup"})),
    ).await;
    assert_eq!(res.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_unknown_gym_is_not_found() {
    let app = TestApp::new().await;
    app.create_gym("known").await;

    let res = app.request("GET", "/api/v1/not-a-gym/clients", None).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_clients_are_tenant_scoped() {
    let app = TestApp::new().await;
    let gym1 = app.create_gym("t1").await;
    let gym2 = app.create_gym("t2").await;

    let res = app.request(
        "POST",
        &format!("/api/v1/{}/clients", gym1),
        Some(json!({"name": "Only In One", "email": "o@o.com"})),
    ).await;
    assert_eq!(res.status(), StatusCode::OK);
    let client_id = parse_body(res).await["id"].as_str().unwrap().to_string();

    let res = app.request("GET", &format!("/api/v1/{}/clients", gym2), None).await;
    let list = parse_body(res).await;
    assert!(list.as_array().unwrap().is_empty());

    // Cross-tenant reads miss.
    let res = app.request("GET", &format!("/api/v1/{}/clients/{}", gym2, client_id), None).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_boundary_validation() {
    let app = TestApp::new().await;
    let gym = app.create_gym("val").await;

    // Negative plan price.
    let res = app.request(
        "POST",
        &format!("/api/v1/{}/plans", gym),
        Some(json!({"name": "Bad", "price_cents": -100, "duration_months": 1})),
    ).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    // Negative payment amount.
    let res = app.request(
        "POST",
        &format!("/api/v1/{}/payments", gym),
        Some(json!({"amount_cents": -5, "status": "PAID"})),
    ).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    // Unknown payment status.
    let res = app.request(
        "POST",
        &format!("/api/v1/{}/payments", gym),
        Some(json!({"amount_cents": 100, "status": "MAYBE"})),
    ).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    // Class ending before it starts.
    let res = app.request(
        "POST",
        &format!("/api/v1/{}/classes", gym),
        Some(json!({
            "title": "Backwards", "date": "2024-05-06",
            "start_time": "10:00", "end_time": "09:00", "capacity": 5
        })),
    ).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    // Unknown user type.
    let res = app.request(
        "POST",
        &format!("/api/v1/{}/clients", gym),
        Some(json!({"name": "X", "email": "x@x.com", "user_type": "WIZARD"})),
    ).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_client_delete() {
    let app = TestApp::new().await;
    let gym = app.create_gym("del").await;

    let res = app.request(
        "POST",
        &format!("/api/v1/{}/clients", gym),
        Some(json!({"name": "Gone Soon", "email": "g@g.com"})),
    ).await;
    let client_id = parse_body(res).await["id"].as_str().unwrap().to_string();

    let res = app.request("DELETE", &format!("/api/v1/{}/clients/{}", gym, client_id), None).await;
    assert_eq!(res.status(), StatusCode::OK);

    let res = app.request("DELETE", &format!("/api/v1/{}/clients/{}", gym, client_id), None).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_plan_archive_hides_from_default_listing() {
    let app = TestApp::new().await;
    let gym = app.create_gym("arch").await;

    let res = app.request(
        "POST",
        &format!("/api/v1/{}/plans", gym),
        Some(json!({"name": "Old", "price_cents": 1000, "duration_months": 1})),
    ).await;
    let plan_id = parse_body(res).await["id"].as_str().unwrap().to_string();

    app.request("POST", &format!("/api/v1/{}/plans/{}/archive", gym, plan_id), None).await;

    let res = app.request("GET", &format!("/api/v1/{}/plans", gym), None).await;
    assert!(parse_body(res).await.as_array().unwrap().is_empty());

    let res = app.request("GET", &format!("/api/v1/{}/plans?include_archived=true", gym), None).await;
    let list = parse_body(res).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
    assert_eq!(list[0]["archived"], true);
}
