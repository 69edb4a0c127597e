use crate::domain::{models::class::Signup, ports::SignupRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteSignupRepo {
    pool: SqlitePool,
}

impl SqliteSignupRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SignupRepository for SqliteSignupRepo {
    async fn create(&self, signup: &Signup) -> Result<Signup, AppError> {
        // Duplicate (class_id, client_id) hits the unique constraint and
        // surfaces as 409 via the AppError::Database mapping.
        sqlx::query_as::<_, Signup>(
            r#"INSERT INTO signups (id, gym_id, class_id, client_id, created_at)
               VALUES (?, ?, ?, ?, ?) RETURNING *"#
        )
            .bind(&signup.id)
            .bind(&signup.gym_id)
            .bind(&signup.class_id)
            .bind(&signup.client_id)
            .bind(signup.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_class(&self, class_id: &str) -> Result<Vec<Signup>, AppError> {
        sqlx::query_as::<_, Signup>(
            "SELECT * FROM signups WHERE class_id = ? ORDER BY created_at",
        )
            .bind(class_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_gym(&self, gym_id: &str) -> Result<Vec<Signup>, AppError> {
        sqlx::query_as::<_, Signup>(
            "SELECT * FROM signups WHERE gym_id = ? ORDER BY created_at",
        )
            .bind(gym_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn delete(&self, class_id: &str, client_id: &str) -> Result<(), AppError> {
        let res = sqlx::query("DELETE FROM signups WHERE class_id = ? AND client_id = ?")
            .bind(class_id)
            .bind(client_id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if res.rows_affected() == 0 {
            return Err(AppError::NotFound("Signup not found".into()));
        }
        Ok(())
    }
}
