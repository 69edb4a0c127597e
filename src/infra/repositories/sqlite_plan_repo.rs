use crate::domain::{models::plan::Plan, ports::PlanRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqlitePlanRepo {
    pool: SqlitePool,
}

impl SqlitePlanRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PlanRepository for SqlitePlanRepo {
    async fn create(&self, plan: &Plan) -> Result<Plan, AppError> {
        sqlx::query_as::<_, Plan>(
            r#"INSERT INTO plans (id, gym_id, name, price_cents, duration_months, archived, created_at)
               VALUES (?, ?, ?, ?, ?, ?, ?) RETURNING *"#
        )
            .bind(&plan.id)
            .bind(&plan.gym_id)
            .bind(&plan.name)
            .bind(plan.price_cents)
            .bind(plan.duration_months)
            .bind(plan.archived)
            .bind(plan.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, gym_id: &str, id: &str) -> Result<Option<Plan>, AppError> {
        sqlx::query_as::<_, Plan>(
            "SELECT * FROM plans WHERE gym_id = ? AND id = ?",
        )
            .bind(gym_id)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_gym(&self, gym_id: &str, include_archived: bool) -> Result<Vec<Plan>, AppError> {
        let sql = if include_archived {
            "SELECT * FROM plans WHERE gym_id = ? ORDER BY created_at"
        } else {
            "SELECT * FROM plans WHERE gym_id = ? AND archived = 0 ORDER BY created_at"
        };

        sqlx::query_as::<_, Plan>(sql)
            .bind(gym_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, plan: &Plan) -> Result<Plan, AppError> {
        sqlx::query_as::<_, Plan>(
            "UPDATE plans SET name=?, price_cents=?, duration_months=? WHERE gym_id=? AND id=? RETURNING *"
        )
            .bind(&plan.name)
            .bind(plan.price_cents)
            .bind(plan.duration_months)
            .bind(&plan.gym_id)
            .bind(&plan.id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn set_archived(&self, gym_id: &str, id: &str, archived: bool) -> Result<Plan, AppError> {
        sqlx::query_as::<_, Plan>(
            "UPDATE plans SET archived=? WHERE gym_id=? AND id=? RETURNING *"
        )
            .bind(archived)
            .bind(gym_id)
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
