mod common;

use axum::http::StatusCode;
use common::{parse_body, TestApp};
use serde_json::json;

async fn create_class(app: &TestApp, gym_id: &str, title: &str, capacity: i32) -> String {
    let res = app.request(
        "POST",
        &format!("/api/v1/{}/classes", gym_id),
        Some(json!({
            "title": title, "date": "2024-05-06",
            "start_time": "09:00", "end_time": "10:00",
            "capacity": capacity
        })),
    ).await;
    assert_eq!(res.status(), StatusCode::OK);
    parse_body(res).await["id"].as_str().unwrap().to_string()
}

async fn create_client(app: &TestApp, gym_id: &str, n: usize) -> String {
    let res = app.request(
        "POST",
        &format!("/api/v1/{}/clients", gym_id),
        Some(json!({"name": format!("Member {}", n), "email": format!("m{}@m.com", n)})),
    ).await;
    assert_eq!(res.status(), StatusCode::OK);
    parse_body(res).await["id"].as_str().unwrap().to_string()
}

async fn register(app: &TestApp, gym_id: &str, class_id: &str, client_id: &str) -> StatusCode {
    let res = app.request(
        "POST",
        &format!("/api/v1/{}/classes/{}/signups", gym_id, class_id),
        Some(json!({"client_id": client_id})),
    ).await;
    res.status()
}

#[tokio::test]
async fn test_fill_rate_three_quarters() {
    let app = TestApp::new().await;
    let gym = app.create_gym("cap1").await;
    let class = create_class(&app, &gym, "Spin", 20).await;

    for n in 0..15 {
        let client = create_client(&app, &gym, n).await;
        assert_eq!(register(&app, &gym, &class, &client).await, StatusCode::OK);
    }

    let res = app.request("GET", &format!("/api/v1/{}/classes/{}", gym, class), None).await;
    let body = parse_body(res).await;
    assert_eq!(body["enrollment"]["filled"], 15);
    assert_eq!(body["enrollment"]["capacity"], 20);
    assert_eq!(body["enrollment"]["fill_rate"], 0.75);
}

#[tokio::test]
async fn test_zero_capacity_rejected_at_boundary() {
    let app = TestApp::new().await;
    let gym = app.create_gym("cap2").await;

    let res = app.request(
        "POST",
        &format!("/api/v1/{}/classes", gym),
        Some(json!({
            "title": "Ghost", "date": "2024-05-06",
            "start_time": "09:00", "end_time": "10:00",
            "capacity": 0
        })),
    ).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_duplicate_signup_conflicts() {
    let app = TestApp::new().await;
    let gym = app.create_gym("cap3").await;
    let class = create_class(&app, &gym, "Yoga", 10).await;
    let client = create_client(&app, &gym, 0).await;

    assert_eq!(register(&app, &gym, &class, &client).await, StatusCode::OK);
    assert_eq!(register(&app, &gym, &class, &client).await, StatusCode::CONFLICT);

    // Still exactly one signup.
    let res = app.request("GET", &format!("/api/v1/{}/classes/{}/signups", gym, class), None).await;
    let list = parse_body(res).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_unregister_frees_a_spot() {
    let app = TestApp::new().await;
    let gym = app.create_gym("cap4").await;
    let class = create_class(&app, &gym, "HIIT", 10).await;
    let client = create_client(&app, &gym, 0).await;

    register(&app, &gym, &class, &client).await;

    let res = app.request(
        "DELETE",
        &format!("/api/v1/{}/classes/{}/signups/{}", gym, class, client),
        None,
    ).await;
    assert_eq!(res.status(), StatusCode::OK);

    let res = app.request("GET", &format!("/api/v1/{}/classes/{}", gym, class), None).await;
    let body = parse_body(res).await;
    assert_eq!(body["enrollment"]["filled"], 0);

    // Removing a signup that does not exist is a NotFound, not a crash.
    let res = app.request(
        "DELETE",
        &format!("/api/v1/{}/classes/{}/signups/{}", gym, class, client),
        None,
    ).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_summary_aggregates_fill_rate() {
    let app = TestApp::new().await;
    let gym = app.create_gym("cap5").await;

    // 5/10 and 10/10 filled: aggregate 15/20.
    let half = create_class(&app, &gym, "Half", 10).await;
    let full = create_class(&app, &gym, "Full", 10).await;

    for n in 0..15 {
        let client = create_client(&app, &gym, n).await;
        let class = if n < 5 { &half } else { &full };
        assert_eq!(register(&app, &gym, class, &client).await, StatusCode::OK);
    }

    let res = app.request("GET", &format!("/api/v1/{}/reports/summary", gym), None).await;
    let body = parse_body(res).await;
    assert_eq!(body["class_fill_rate"], 0.75);
    assert_eq!(body["client_count"], 15);
}

#[tokio::test]
async fn test_list_classes_embeds_enrollment() {
    let app = TestApp::new().await;
    let gym = app.create_gym("cap6").await;
    let class = create_class(&app, &gym, "Pilates", 4).await;
    let client = create_client(&app, &gym, 0).await;
    register(&app, &gym, &class, &client).await;

    let res = app.request("GET", &format!("/api/v1/{}/classes", gym), None).await;
    let list = parse_body(res).await;
    assert_eq!(list[0]["enrollment"]["filled"], 1);
    assert_eq!(list[0]["enrollment"]["fill_rate"], 0.25);
}
