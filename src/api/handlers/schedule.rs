use axum::{extract::{Path, Query, State}, response::IntoResponse, Json};
use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::requests::{AssignScheduleRequest, CreateRoleRequest};
use crate::api::dtos::responses::WeekScheduleResponse;
use crate::api::extractors::gym::GymId;
use crate::domain::models::schedule::{Role, ScheduleAssignment};
use crate::error::AppError;
use crate::state::AppState;

fn parse_date(value: &str, field: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| AppError::Validation(format!("{} must be YYYY-MM-DD", field)))
}

/// Upsert into the weekly grid. Assigning an occupied (date, role) cell
/// replaces the coach; the database constraint guarantees a single row per
/// key even under concurrent assigns.
pub async fn assign_coach(
    State(state): State<Arc<AppState>>,
    GymId(gym_id): GymId,
    Json(payload): Json<AssignScheduleRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.role.trim().is_empty() {
        return Err(AppError::Validation("role is required".into()));
    }

    let assignment = ScheduleAssignment::new(gym_id, payload.date, payload.role, payload.coach_id);
    let saved = state.schedule_repo.assign(&assignment).await?;
    info!("Assigned coach {} to {} on {}", saved.coach_id, saved.role, saved.date);
    Ok(Json(saved))
}

pub async fn unassign_coach(
    State(state): State<Arc<AppState>>,
    GymId(gym_id): GymId,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    let date_str = params.get("date").ok_or(AppError::Validation("date required".into()))?;
    let role = params.get("role").ok_or(AppError::Validation("role required".into()))?;
    let date = parse_date(date_str, "date")?;

    state.schedule_repo.unassign(&gym_id, date, role).await?;
    info!("Unassigned {} on {} in gym {}", role, date, gym_id);
    Ok(Json(serde_json::json!({"status": "unassigned"})))
}

pub async fn get_week(
    State(state): State<Arc<AppState>>,
    GymId(gym_id): GymId,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    let start_str = params.get("start").ok_or(AppError::Validation("start required".into()))?;
    let week_start = parse_date(start_str, "start")?;

    let rows = state.schedule_repo.list_week(&gym_id, week_start).await?;

    let assignments: HashMap<String, String> = rows
        .into_iter()
        .map(|a| (a.grid_key(), a.coach_id))
        .collect();

    Ok(Json(WeekScheduleResponse { week_start, assignments }))
}

pub async fn create_role(
    State(state): State<Arc<AppState>>,
    GymId(gym_id): GymId,
    Json(payload): Json<CreateRoleRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.name.trim().is_empty() {
        return Err(AppError::Validation("name is required".into()));
    }

    let role = Role::new(gym_id, payload.name);
    let saved = state.role_repo.create(&role).await?;
    info!("Created role {} in gym {}", saved.name, saved.gym_id);
    Ok(Json(saved))
}

pub async fn list_roles(
    State(state): State<Arc<AppState>>,
    GymId(gym_id): GymId,
) -> Result<impl IntoResponse, AppError> {
    let roles = state.role_repo.list_by_gym(&gym_id).await?;
    Ok(Json(roles))
}

/// A role with live assignments cannot be removed; the grid would be left
/// with cells referencing a label that no longer exists.
pub async fn delete_role(
    State(state): State<Arc<AppState>>,
    GymId(gym_id): GymId,
    Path((_, role_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let role = state.role_repo.find_by_id(&gym_id, &role_id).await?
        .ok_or(AppError::NotFound("Role not found".into()))?;

    let in_use = state.schedule_repo.count_by_role(&gym_id, &role.name).await?;
    if in_use > 0 {
        return Err(AppError::Conflict(format!(
            "Role {} has {} assignments; unassign them first", role.name, in_use
        )));
    }

    state.role_repo.delete(&gym_id, &role_id).await?;
    info!("Deleted role {} from gym {}", role.name, gym_id);
    Ok(Json(serde_json::json!({"status": "deleted"})))
}
