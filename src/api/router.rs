use axum::{
    body::Body,
    extract::Request,
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use crate::state::AppState;
use crate::api::handlers::{class, client, gym, health, payment, plan, report, schedule};
use tower_http::{
    trace::TraceLayer,
    classify::ServerErrorsFailureClass,
};
use tracing::{error, info, info_span, Span};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // Gyms (tenants)
        .route("/api/v1/gyms", post(gym::create_gym))
        .route("/api/v1/gyms/by-slug/{slug}", get(gym::get_gym_by_slug))

        // Clients
        .route("/api/v1/{gym_id}/clients", post(client::create_client).get(client::list_clients))
        .route("/api/v1/{gym_id}/clients/{client_id}", get(client::get_client).put(client::update_client).delete(client::delete_client))

        // Plans
        .route("/api/v1/{gym_id}/plans", post(plan::create_plan).get(plan::list_plans))
        .route("/api/v1/{gym_id}/plans/{plan_id}", put(plan::update_plan))
        .route("/api/v1/{gym_id}/plans/{plan_id}/archive", post(plan::archive_plan))

        // Payments
        .route("/api/v1/{gym_id}/payments", post(payment::create_payment).get(payment::list_payments))

        // Classes & Signups
        .route("/api/v1/{gym_id}/classes", post(class::create_class).get(class::list_classes))
        .route("/api/v1/{gym_id}/classes/{class_id}", get(class::get_class).delete(class::delete_class))
        .route("/api/v1/{gym_id}/classes/{class_id}/signups", post(class::register_signup).get(class::list_signups))
        .route("/api/v1/{gym_id}/classes/{class_id}/signups/{client_id}", delete(class::unregister_signup))

        // Weekly coach schedule
        .route("/api/v1/{gym_id}/schedule", put(schedule::assign_coach).delete(schedule::unassign_coach))
        .route("/api/v1/{gym_id}/schedule/week", get(schedule::get_week))
        .route("/api/v1/{gym_id}/roles", get(schedule::list_roles).post(schedule::create_role))
        .route("/api/v1/{gym_id}/roles/{role_id}", delete(schedule::delete_role))

        // Reports
        .route("/api/v1/{gym_id}/reports/revenue", get(report::revenue_report))
        .route("/api/v1/{gym_id}/reports/summary", get(report::summary_report))

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                        gym_id = tracing::field::Empty,
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .with_state(state)
}
