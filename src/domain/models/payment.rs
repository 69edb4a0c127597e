use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

pub const PAYMENT_STATUS_PAID: &str = "PAID";
pub const PAYMENT_STATUS_PENDING: &str = "PENDING";
pub const PAYMENT_STATUS_FAILED: &str = "FAILED";

/// Append-only payment record. Only `PAID` rows count towards revenue.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Payment {
    pub id: String,
    pub gym_id: String,
    pub client_id: Option<String>,
    pub plan_id: Option<String>,
    pub amount_cents: i64,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

pub struct NewPaymentParams {
    pub gym_id: String,
    pub client_id: Option<String>,
    pub plan_id: Option<String>,
    pub amount_cents: i64,
    pub status: String,
    pub created_at: Option<DateTime<Utc>>,
}

impl Payment {
    pub fn new(params: NewPaymentParams) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            gym_id: params.gym_id,
            client_id: params.client_id,
            plan_id: params.plan_id,
            amount_cents: params.amount_cents,
            status: params.status,
            created_at: params.created_at.unwrap_or_else(Utc::now),
        }
    }
}
