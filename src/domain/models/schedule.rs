use serde::{Deserialize, Serialize};
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// One cell of the weekly role grid. At most one coach per
/// (gym_id, date, role); assign overwrites, it never duplicates.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct ScheduleAssignment {
    pub id: String,
    pub gym_id: String,
    pub date: NaiveDate,
    pub role: String,
    pub coach_id: String,
    pub created_at: DateTime<Utc>,
}

impl ScheduleAssignment {
    pub fn new(gym_id: String, date: NaiveDate, role: String, coach_id: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            gym_id,
            date,
            role,
            coach_id,
            created_at: Utc::now(),
        }
    }

    /// Grid key used by the weekly schedule view, e.g. "Coach_2024-05-06".
    pub fn grid_key(&self) -> String {
        format!("{}_{}", self.role, self.date)
    }
}

/// Tenant-configurable role label. Persisted independently from the
/// assignments that reference it by name.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Role {
    pub id: String,
    pub gym_id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl Role {
    pub fn new(gym_id: String, name: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            gym_id,
            name,
            created_at: Utc::now(),
        }
    }
}
