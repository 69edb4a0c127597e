use crate::domain::{models::payment::Payment, ports::PaymentRepository};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

pub struct PostgresPaymentRepo {
    pool: PgPool,
}

impl PostgresPaymentRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PaymentRepository for PostgresPaymentRepo {
    async fn create(&self, payment: &Payment) -> Result<Payment, AppError> {
        sqlx::query_as::<_, Payment>(
            r#"INSERT INTO payments (id, gym_id, client_id, plan_id, amount_cents, status, created_at)
               VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING *"#
        )
            .bind(&payment.id)
            .bind(&payment.gym_id)
            .bind(&payment.client_id)
            .bind(&payment.plan_id)
            .bind(payment.amount_cents)
            .bind(&payment.status)
            .bind(payment.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_gym(&self, gym_id: &str) -> Result<Vec<Payment>, AppError> {
        sqlx::query_as::<_, Payment>(
            "SELECT * FROM payments WHERE gym_id = $1 ORDER BY created_at DESC",
        )
            .bind(gym_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_since(&self, gym_id: &str, since: DateTime<Utc>) -> Result<Vec<Payment>, AppError> {
        sqlx::query_as::<_, Payment>(
            "SELECT * FROM payments WHERE gym_id = $1 AND created_at >= $2 ORDER BY created_at",
        )
            .bind(gym_id)
            .bind(since)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
