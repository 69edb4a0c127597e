use crate::domain::{models::class::Signup, ports::SignupRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresSignupRepo {
    pool: PgPool,
}

impl PostgresSignupRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SignupRepository for PostgresSignupRepo {
    async fn create(&self, signup: &Signup) -> Result<Signup, AppError> {
        sqlx::query_as::<_, Signup>(
            r#"INSERT INTO signups (id, gym_id, class_id, client_id, created_at)
               VALUES ($1, $2, $3, $4, $5) RETURNING *"#
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
            "SELECT * FROM signups WHERE class_id = $1 ORDER BY created_at",
        )
            .bind(class_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_gym(&self, gym_id: &str) -> Result<Vec<Signup>, AppError> {
        sqlx::query_as::<_, Signup>(
            "SELECT * FROM signups WHERE gym_id = $1 ORDER BY created_at",
        )
            .bind(gym_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn delete(&self, class_id: &str, client_id: &str) -> Result<(), AppError> {
        let res = sqlx::query("DELETE FROM signups WHERE class_id = $1 AND client_id = $2")
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
