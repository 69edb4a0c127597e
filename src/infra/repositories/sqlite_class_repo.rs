use crate::domain::{models::class::GymClass, ports::ClassRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteClassRepo {
    pool: SqlitePool,
}

impl SqliteClassRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClassRepository for SqliteClassRepo {
    async fn create(&self, class: &GymClass) -> Result<GymClass, AppError> {
        sqlx::query_as::<_, GymClass>(
            r#"INSERT INTO classes (id, gym_id, title, coach_id, date, start_time, end_time, capacity, created_at)
               VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?) RETURNING *"#
        )
            .bind(&class.id)
            .bind(&class.gym_id)
            .bind(&class.title)
            .bind(&class.coach_id)
            .bind(class.date)
            .bind(class.start_time)
            .bind(class.end_time)
            .bind(class.capacity)
            .bind(class.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, gym_id: &str, id: &str) -> Result<Option<GymClass>, AppError> {
        sqlx::query_as::<_, GymClass>(
            "SELECT * FROM classes WHERE gym_id = ? AND id = ?",
        )
            .bind(gym_id)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_gym(&self, gym_id: &str) -> Result<Vec<GymClass>, AppError> {
        sqlx::query_as::<_, GymClass>(
            "SELECT * FROM classes WHERE gym_id = ? ORDER BY date, start_time",
        )
            .bind(gym_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn delete(&self, gym_id: &str, id: &str) -> Result<(), AppError> {
        let res = sqlx::query("DELETE FROM classes WHERE gym_id = ? AND id = ?")
            .bind(gym_id)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if res.rows_affected() == 0 {
            return Err(AppError::NotFound("Class not found".into()));
        }
        Ok(())
    }
}
