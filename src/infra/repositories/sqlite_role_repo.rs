use crate::domain::{models::schedule::Role, ports::RoleRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteRoleRepo {
    pool: SqlitePool,
}

impl SqliteRoleRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RoleRepository for SqliteRoleRepo {
    async fn create(&self, role: &Role) -> Result<Role, AppError> {
        sqlx::query_as::<_, Role>(
            "INSERT INTO roles (id, gym_id, name, created_at) VALUES (?, ?, ?, ?) RETURNING *"
        )
            .bind(&role.id)
            .bind(&role.gym_id)
            .bind(&role.name)
            .bind(role.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, gym_id: &str, id: &str) -> Result<Option<Role>, AppError> {
        sqlx::query_as::<_, Role>(
            "SELECT * FROM roles WHERE gym_id = ? AND id = ?",
        )
            .bind(gym_id)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_gym(&self, gym_id: &str) -> Result<Vec<Role>, AppError> {
        sqlx::query_as::<_, Role>(
            "SELECT * FROM roles WHERE gym_id = ? ORDER BY name",
        )
            .bind(gym_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn delete(&self, gym_id: &str, id: &str) -> Result<(), AppError> {
        let res = sqlx::query("DELETE FROM roles WHERE gym_id = ? AND id = ?")
            .bind(gym_id)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if res.rows_affected() == 0 {
            return Err(AppError::NotFound("Role not found".into()));
        }
        Ok(())
    }
}
