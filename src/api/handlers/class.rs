use axum::{extract::{Path, State}, response::IntoResponse, Json};
use chrono::NaiveTime;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::requests::{CreateClassRequest, CreateSignupRequest};
use crate::api::dtos::responses::ClassResponse;
use crate::api::extractors::gym::GymId;
use crate::domain::models::class::{GymClass, NewClassParams, Signup};
use crate::domain::services::capacity::{enrollment, Enrollment};
use crate::error::AppError;
use crate::state::AppState;

fn parse_time(value: &str, field: &str) -> Result<NaiveTime, AppError> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .map_err(|_| AppError::Validation(format!("{} must be HH:MM", field)))
}

pub async fn create_class(
    State(state): State<Arc<AppState>>,
    GymId(gym_id): GymId,
    Json(payload): Json<CreateClassRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.capacity < 1 {
        return Err(AppError::Validation("capacity must be positive".into()));
    }

    let start_time = parse_time(&payload.start_time, "start_time")?;
    let end_time = parse_time(&payload.end_time, "end_time")?;
    if end_time <= start_time {
        return Err(AppError::Validation("end_time must be after start_time".into()));
    }

    if let Some(coach_id) = &payload.coach_id {
        state.client_repo.find_by_id(&gym_id, coach_id).await?
            .ok_or(AppError::NotFound("Coach not found".into()))?;
    }

    let class = GymClass::new(NewClassParams {
        gym_id,
        title: payload.title,
        coach_id: payload.coach_id,
        date: payload.date,
        start_time,
        end_time,
        capacity: payload.capacity,
    });

    let saved = state.class_repo.create(&class).await?;
    info!("Created class {} on {} in gym {}", saved.id, saved.date, saved.gym_id);
    Ok(Json(saved))
}

pub async fn list_classes(
    State(state): State<Arc<AppState>>,
    GymId(gym_id): GymId,
) -> Result<impl IntoResponse, AppError> {
    let classes = state.class_repo.list_by_gym(&gym_id).await?;
    let signups = state.signup_repo.list_by_gym(&gym_id).await?;

    // One pass over the signups; no per-class rescans.
    let mut filled_by_class: HashMap<&str, i64> = HashMap::new();
    for signup in &signups {
        *filled_by_class.entry(signup.class_id.as_str()).or_insert(0) += 1;
    }

    let body: Vec<ClassResponse> = classes
        .into_iter()
        .map(|c| {
            let filled = filled_by_class.get(c.id.as_str()).copied().unwrap_or(0);
            let enrollment = Enrollment::from_parts(filled, c.capacity);
            ClassResponse { class: c, enrollment }
        })
        .collect();

    Ok(Json(body))
}

pub async fn get_class(
    State(state): State<Arc<AppState>>,
    GymId(gym_id): GymId,
    Path((_, class_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let class = state.class_repo.find_by_id(&gym_id, &class_id).await?
        .ok_or(AppError::NotFound("Class not found".into()))?;

    let signups = state.signup_repo.list_by_class(&class.id).await?;
    let enrollment = enrollment(&class, &signups);

    Ok(Json(ClassResponse { class, enrollment }))
}

pub async fn delete_class(
    State(state): State<Arc<AppState>>,
    GymId(gym_id): GymId,
    Path((_, class_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    state.class_repo.delete(&gym_id, &class_id).await?;
    info!("Deleted class {} from gym {}", class_id, gym_id);
    Ok(Json(serde_json::json!({"status": "deleted"})))
}

pub async fn register_signup(
    State(state): State<Arc<AppState>>,
    GymId(gym_id): GymId,
    Path((_, class_id)): Path<(String, String)>,
    Json(payload): Json<CreateSignupRequest>,
) -> Result<impl IntoResponse, AppError> {
    let class = state.class_repo.find_by_id(&gym_id, &class_id).await?
        .ok_or(AppError::NotFound("Class not found".into()))?;

    state.client_repo.find_by_id(&gym_id, &payload.client_id).await?
        .ok_or(AppError::NotFound("Client not found".into()))?;

    let signup = Signup::new(gym_id, class.id, payload.client_id);
    let saved = state.signup_repo.create(&signup).await?;
    info!("Registered client {} for class {}", saved.client_id, saved.class_id);
    Ok(Json(saved))
}

pub async fn list_signups(
    State(state): State<Arc<AppState>>,
    GymId(gym_id): GymId,
    Path((_, class_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    state.class_repo.find_by_id(&gym_id, &class_id).await?
        .ok_or(AppError::NotFound("Class not found".into()))?;

    let signups = state.signup_repo.list_by_class(&class_id).await?;
    Ok(Json(signups))
}

pub async fn unregister_signup(
    State(state): State<Arc<AppState>>,
    GymId(gym_id): GymId,
    Path((_, class_id, client_id)): Path<(String, String, String)>,
) -> Result<impl IntoResponse, AppError> {
    state.class_repo.find_by_id(&gym_id, &class_id).await?
        .ok_or(AppError::NotFound("Class not found".into()))?;

    state.signup_repo.delete(&class_id, &client_id).await?;
    info!("Unregistered client {} from class {}", client_id, class_id);
    Ok(Json(serde_json::json!({"status": "unregistered"})))
}
