use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

pub const USER_TYPE_OWNER: &str = "OWNER";
pub const USER_TYPE_COACH: &str = "COACH";
pub const USER_TYPE_USER: &str = "USER";

/// A gym member (or staff account). Plan fields are nullable: a client with
/// no `payment_plan_id` simply has no subscription.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Client {
    pub id: String,
    pub gym_id: String,
    pub name: String,
    pub email: String,
    pub user_type: String,
    pub payment_plan_id: Option<String>,
    pub plan_start_date: Option<DateTime<Utc>>,
    pub plan_end_date: Option<DateTime<Utc>>,
    /// JSON-encoded array of free-form tag strings.
    pub tags_json: String,
    pub created_at: DateTime<Utc>,
}

pub struct NewClientParams {
    pub gym_id: String,
    pub name: String,
    pub email: String,
    pub user_type: String,
    pub payment_plan_id: Option<String>,
    pub plan_start_date: Option<DateTime<Utc>>,
    pub plan_end_date: Option<DateTime<Utc>>,
    pub tags: Vec<String>,
}

impl Client {
    pub fn new(params: NewClientParams) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            gym_id: params.gym_id,
            name: params.name,
            email: params.email,
            user_type: params.user_type,
            payment_plan_id: params.payment_plan_id,
            plan_start_date: params.plan_start_date,
            plan_end_date: params.plan_end_date,
            tags_json: serde_json::to_string(&params.tags).unwrap_or_else(|_| "[]".to_string()),
            created_at: Utc::now(),
        }
    }

    pub fn tags(&self) -> Vec<String> {
        serde_json::from_str(&self.tags_json).unwrap_or_default()
    }
}
