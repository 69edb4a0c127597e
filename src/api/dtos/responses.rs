use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use std::collections::HashMap;

use crate::domain::models::class::GymClass;
use crate::domain::models::client::Client;
use crate::domain::services::capacity::Enrollment;
use crate::domain::services::membership::{MembershipStatus, StatusCounts};

/// Client record with its derived membership status. The status is computed
/// from the snapshot at response time, never stored.
#[derive(Serialize)]
pub struct ClientResponse {
    pub id: String,
    pub gym_id: String,
    pub name: String,
    pub email: String,
    pub user_type: String,
    pub payment_plan_id: Option<String>,
    pub plan_start_date: Option<DateTime<Utc>>,
    pub plan_end_date: Option<DateTime<Utc>>,
    pub tags: Vec<String>,
    pub status: MembershipStatus,
    pub created_at: DateTime<Utc>,
}

impl ClientResponse {
    pub fn from_client(client: Client, status: MembershipStatus) -> Self {
        let tags = client.tags();
        Self {
            id: client.id,
            gym_id: client.gym_id,
            name: client.name,
            email: client.email,
            user_type: client.user_type,
            payment_plan_id: client.payment_plan_id,
            plan_start_date: client.plan_start_date,
            plan_end_date: client.plan_end_date,
            tags,
            status,
            created_at: client.created_at,
        }
    }
}

#[derive(Serialize)]
pub struct ClassResponse {
    #[serde(flatten)]
    pub class: GymClass,
    pub enrollment: Enrollment,
}

#[derive(Serialize)]
pub struct WeekScheduleResponse {
    pub week_start: NaiveDate,
    /// "{role}_{date}" keys, coach ids as values.
    pub assignments: HashMap<String, String>,
}

#[derive(Serialize)]
pub struct SummaryResponse {
    pub client_count: i64,
    pub statuses: StatusCounts,
    pub class_fill_rate: f64,
}
