use crate::domain::{models::plan::Plan, ports::PlanRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresPlanRepo {
    pool: PgPool,
}

impl PostgresPlanRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PlanRepository for PostgresPlanRepo {
    async fn create(&self, plan: &Plan) -> Result<Plan, AppError> {
        sqlx::query_as::<_, Plan>(
            r#"INSERT INTO plans (id, gym_id, name, price_cents, duration_months, archived, created_at)
               VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING *"#
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
            "SELECT * FROM plans WHERE gym_id = $1 AND id = $2",
        )
            .bind(gym_id)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_gym(&self, gym_id: &str, include_archived: bool) -> Result<Vec<Plan>, AppError> {
        let sql = if include_archived {
            "SELECT * FROM plans WHERE gym_id = $1 ORDER BY created_at"
        } else {
            "SELECT * FROM plans WHERE gym_id = $1 AND archived = FALSE ORDER BY created_at"
        };

        sqlx::query_as::<_, Plan>(sql)
            .bind(gym_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, plan: &Plan) -> Result<Plan, AppError> {
        sqlx::query_as::<_, Plan>(
            "UPDATE plans SET name=$1, price_cents=$2, duration_months=$3 WHERE gym_id=$4 AND id=$5 RETURNING *"
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
            "UPDATE plans SET archived=$1 WHERE gym_id=$2 AND id=$3 RETURNING *"
        )
            .bind(archived)
            .bind(gym_id)
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
