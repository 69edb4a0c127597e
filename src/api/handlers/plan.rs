use axum::{extract::{Path, Query, State}, response::IntoResponse, Json};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::requests::{CreatePlanRequest, UpdatePlanRequest};
use crate::api::extractors::gym::GymId;
use crate::domain::models::plan::{Plan, DURATION_LIFETIME};
use crate::error::AppError;
use crate::state::AppState;

fn validate_plan(price_cents: i64, duration_months: i32) -> Result<(), AppError> {
    if price_cents < 0 {
        return Err(AppError::Validation("price_cents must not be negative".into()));
    }
    if duration_months < DURATION_LIFETIME {
        return Err(AppError::Validation("duration_months must be -1 (lifetime), 0 (one-time) or positive".into()));
    }
    Ok(())
}

pub async fn create_plan(
    State(state): State<Arc<AppState>>,
    GymId(gym_id): GymId,
    Json(payload): Json<CreatePlanRequest>,
) -> Result<impl IntoResponse, AppError> {
    validate_plan(payload.price_cents, payload.duration_months)?;

    let plan = Plan::new(gym_id, payload.name, payload.price_cents, payload.duration_months);
    let saved = state.plan_repo.create(&plan).await?;
    info!("Created plan {} in gym {}", saved.id, saved.gym_id);
    Ok(Json(saved))
}

pub async fn list_plans(
    State(state): State<Arc<AppState>>,
    GymId(gym_id): GymId,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    let include_archived = params
        .get("include_archived")
        .is_some_and(|v| v == "true");

    let plans = state.plan_repo.list_by_gym(&gym_id, include_archived).await?;
    Ok(Json(plans))
}

pub async fn update_plan(
    State(state): State<Arc<AppState>>,
    GymId(gym_id): GymId,
    Path((_, plan_id)): Path<(String, String)>,
    Json(payload): Json<UpdatePlanRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut plan = state.plan_repo.find_by_id(&gym_id, &plan_id).await?
        .ok_or(AppError::NotFound("Plan not found".into()))?;

    if let Some(name) = payload.name {
        plan.name = name;
    }
    if let Some(price) = payload.price_cents {
        plan.price_cents = price;
    }
    if let Some(duration) = payload.duration_months {
        plan.duration_months = duration;
    }

    validate_plan(plan.price_cents, plan.duration_months)?;

    let saved = state.plan_repo.update(&plan).await?;
    info!("Updated plan {} in gym {}", saved.id, saved.gym_id);
    Ok(Json(saved))
}

/// Plans are archived, never hard-deleted: payments and clients keep
/// referencing them.
pub async fn archive_plan(
    State(state): State<Arc<AppState>>,
    GymId(gym_id): GymId,
    Path((_, plan_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    state.plan_repo.find_by_id(&gym_id, &plan_id).await?
        .ok_or(AppError::NotFound("Plan not found".into()))?;

    let saved = state.plan_repo.set_archived(&gym_id, &plan_id, true).await?;
    info!("Archived plan {} in gym {}", saved.id, saved.gym_id);
    Ok(Json(saved))
}
