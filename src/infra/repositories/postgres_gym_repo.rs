use crate::domain::{models::gym::Gym, ports::GymRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresGymRepo {
    pool: PgPool,
}

impl PostgresGymRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GymRepository for PostgresGymRepo {
    async fn create(&self, gym: &Gym) -> Result<Gym, AppError> {
        sqlx::query_as::<_, Gym>(
            "INSERT INTO gyms (id, name, slug, created_at) VALUES ($1, $2, $3, $4) RETURNING *"
        )
            .bind(&gym.id)
            .bind(&gym.name)
            .bind(&gym.slug)
            .bind(gym.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Gym>, AppError> {
        sqlx::query_as::<_, Gym>(
            "SELECT * FROM gyms WHERE id = $1",
        )
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Gym>, AppError> {
        sqlx::query_as::<_, Gym>(
            "SELECT * FROM gyms WHERE slug = $1",
        )
            .bind(slug)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
