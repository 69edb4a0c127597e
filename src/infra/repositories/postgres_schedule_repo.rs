use crate::domain::{models::schedule::ScheduleAssignment, ports::ScheduleRepository};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{Duration, NaiveDate};
use sqlx::PgPool;

pub struct PostgresScheduleRepo {
    pool: PgPool,
}

impl PostgresScheduleRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ScheduleRepository for PostgresScheduleRepo {
    async fn assign(&self, assignment: &ScheduleAssignment) -> Result<ScheduleAssignment, AppError> {
        sqlx::query_as::<_, ScheduleAssignment>(
            r#"INSERT INTO schedule_assignments (id, gym_id, date, role, coach_id, created_at)
               VALUES ($1, $2, $3, $4, $5, $6)
               ON CONFLICT(gym_id, date, role) DO UPDATE SET
               coach_id=excluded.coach_id
               RETURNING *"#
        )
            .bind(&assignment.id)
            .bind(&assignment.gym_id)
            .bind(assignment.date)
            .bind(&assignment.role)
            .bind(&assignment.coach_id)
            .bind(assignment.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn unassign(&self, gym_id: &str, date: NaiveDate, role: &str) -> Result<(), AppError> {
        sqlx::query("DELETE FROM schedule_assignments WHERE gym_id = $1 AND date = $2 AND role = $3")
            .bind(gym_id)
            .bind(date)
            .bind(role)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(())
    }

    async fn list_week(&self, gym_id: &str, week_start: NaiveDate) -> Result<Vec<ScheduleAssignment>, AppError> {
        let week_end = week_start + Duration::days(6);

        sqlx::query_as::<_, ScheduleAssignment>(
            "SELECT * FROM schedule_assignments WHERE gym_id = $1 AND date >= $2 AND date <= $3 ORDER BY date, role"
        )
            .bind(gym_id)
            .bind(week_start)
            .bind(week_end)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn count_by_role(&self, gym_id: &str, role: &str) -> Result<i64, AppError> {
        let (count,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM schedule_assignments WHERE gym_id = $1 AND role = $2"
        )
            .bind(gym_id)
            .bind(role)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(count)
    }
}
