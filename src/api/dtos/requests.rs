use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct CreateGymRequest {
    pub name: String,
    pub slug: String,
}

#[derive(Deserialize)]
pub struct CreateClientRequest {
    pub name: String,
    pub email: String,
    pub user_type: Option<String>,
    pub payment_plan_id: Option<String>,
    pub plan_start_date: Option<DateTime<Utc>>,
    pub plan_end_date: Option<DateTime<Utc>>,
    pub tags: Option<Vec<String>>,
}

#[derive(Deserialize)]
pub struct UpdateClientRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub user_type: Option<String>,
    pub payment_plan_id: Option<String>,
    pub plan_start_date: Option<DateTime<Utc>>,
    pub plan_end_date: Option<DateTime<Utc>>,
    pub tags: Option<Vec<String>>,
}

#[derive(Deserialize)]
pub struct CreatePlanRequest {
    pub name: String,
    pub price_cents: i64,
    pub duration_months: i32,
}

#[derive(Deserialize)]
pub struct UpdatePlanRequest {
    pub name: Option<String>,
    pub price_cents: Option<i64>,
    pub duration_months: Option<i32>,
}

#[derive(Deserialize)]
pub struct CreatePaymentRequest {
    pub client_id: Option<String>,
    pub plan_id: Option<String>,
    pub amount_cents: i64,
    pub status: String,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Deserialize)]
pub struct CreateClassRequest {
    pub title: String,
    pub coach_id: Option<String>,
    pub date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    pub capacity: i32,
}

#[derive(Deserialize)]
pub struct CreateSignupRequest {
    pub client_id: String,
}

#[derive(Deserialize)]
pub struct AssignScheduleRequest {
    pub date: NaiveDate,
    pub role: String,
    pub coach_id: String,
}

#[derive(Deserialize)]
pub struct CreateRoleRequest {
    pub name: String,
}
