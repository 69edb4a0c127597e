use crate::domain::{models::client::Client, ports::ClientRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteClientRepo {
    pool: SqlitePool,
}

impl SqliteClientRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClientRepository for SqliteClientRepo {
    async fn create(&self, client: &Client) -> Result<Client, AppError> {
        sqlx::query_as::<_, Client>(
            r#"INSERT INTO clients (id, gym_id, name, email, user_type, payment_plan_id, plan_start_date, plan_end_date, tags_json, created_at)
               VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?) RETURNING *"#
        )
            .bind(&client.id)
            .bind(&client.gym_id)
            .bind(&client.name)
            .bind(&client.email)
            .bind(&client.user_type)
            .bind(&client.payment_plan_id)
            .bind(client.plan_start_date)
            .bind(client.plan_end_date)
            .bind(&client.tags_json)
            .bind(client.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, gym_id: &str, id: &str) -> Result<Option<Client>, AppError> {
        sqlx::query_as::<_, Client>(
            "SELECT * FROM clients WHERE gym_id = ? AND id = ?",
        )
            .bind(gym_id)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_gym(&self, gym_id: &str) -> Result<Vec<Client>, AppError> {
        sqlx::query_as::<_, Client>(
            "SELECT * FROM clients WHERE gym_id = ? ORDER BY created_at",
        )
            .bind(gym_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, client: &Client) -> Result<Client, AppError> {
        sqlx::query_as::<_, Client>(
            r#"UPDATE clients SET name=?, email=?, user_type=?, payment_plan_id=?, plan_start_date=?, plan_end_date=?, tags_json=?
               WHERE gym_id=? AND id=? RETURNING *"#
        )
            .bind(&client.name)
            .bind(&client.email)
            .bind(&client.user_type)
            .bind(&client.payment_plan_id)
            .bind(client.plan_start_date)
            .bind(client.plan_end_date)
            .bind(&client.tags_json)
            .bind(&client.gym_id)
            .bind(&client.id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn delete(&self, gym_id: &str, id: &str) -> Result<(), AppError> {
        let res = sqlx::query("DELETE FROM clients WHERE gym_id = ? AND id = ?")
            .bind(gym_id)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if res.rows_affected() == 0 {
            return Err(AppError::NotFound("Client not found".into()));
        }
        Ok(())
    }
}
