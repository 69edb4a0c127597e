use axum::{extract::{Path, State}, response::IntoResponse, Json};
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::requests::CreateGymRequest;
use crate::domain::models::gym::Gym;
use crate::error::AppError;
use crate::state::AppState;

pub async fn create_gym(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateGymRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.name.trim().is_empty() || payload.slug.trim().is_empty() {
        return Err(AppError::Validation("name and slug are required".into()));
    }

    let gym = Gym::new(payload.name, payload.slug);
    let saved = state.gym_repo.create(&gym).await?;
    info!("Created gym {} ({})", saved.slug, saved.id);
    Ok(Json(saved))
}

pub async fn get_gym_by_slug(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let gym = state.gym_repo.find_by_slug(&slug).await?
        .ok_or(AppError::NotFound("Gym not found".into()))?;
    Ok(Json(gym))
}
