use serde::{Deserialize, Serialize};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct GymClass {
    pub id: String,
    pub gym_id: String,
    pub title: String,
    pub coach_id: Option<String>,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub capacity: i32,
    pub created_at: DateTime<Utc>,
}

pub struct NewClassParams {
    pub gym_id: String,
    pub title: String,
    pub coach_id: Option<String>,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub capacity: i32,
}

impl GymClass {
    pub fn new(params: NewClassParams) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            gym_id: params.gym_id,
            title: params.title,
            coach_id: params.coach_id,
            date: params.date,
            start_time: params.start_time,
            end_time: params.end_time,
            capacity: params.capacity,
            created_at: Utc::now(),
        }
    }
}

/// Registration of a client for a class. Unique per (class, client); the
/// database constraint, not the caller, enforces that.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Signup {
    pub id: String,
    pub gym_id: String,
    pub class_id: String,
    pub client_id: String,
    pub created_at: DateTime<Utc>,
}

impl Signup {
    pub fn new(gym_id: String, class_id: String, client_id: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            gym_id,
            class_id,
            client_id,
            created_at: Utc::now(),
        }
    }
}
