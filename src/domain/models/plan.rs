use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Sentinel for plans that never expire.
pub const DURATION_LIFETIME: i32 = -1;
/// One-time purchases (drop-in passes etc.).
pub const DURATION_ONE_TIME: i32 = 0;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Plan {
    pub id: String,
    pub gym_id: String,
    pub name: String,
    pub price_cents: i64,
    pub duration_months: i32,
    pub archived: bool,
    pub created_at: DateTime<Utc>,
}

impl Plan {
    pub fn new(gym_id: String, name: String, price_cents: i64, duration_months: i32) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            gym_id,
            name,
            price_cents,
            duration_months,
            archived: false,
            created_at: Utc::now(),
        }
    }
}
