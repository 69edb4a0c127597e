use axum::{extract::{Path, State}, response::IntoResponse, Json};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::requests::{CreateClientRequest, UpdateClientRequest};
use crate::api::dtos::responses::ClientResponse;
use crate::api::extractors::gym::GymId;
use crate::domain::models::client::{Client, NewClientParams, USER_TYPE_COACH, USER_TYPE_OWNER, USER_TYPE_USER};
use crate::domain::services::membership::resolve_status;
use crate::error::AppError;
use crate::state::AppState;

fn validate_user_type(user_type: &str) -> Result<(), AppError> {
    match user_type {
        USER_TYPE_OWNER | USER_TYPE_COACH | USER_TYPE_USER => Ok(()),
        other => Err(AppError::Validation(format!("Unknown user_type: {}", other))),
    }
}

fn validate_plan_dates(
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
) -> Result<(), AppError> {
    if let (Some(s), Some(e)) = (start, end) {
        if e < s {
            return Err(AppError::Validation("plan_end_date must not precede plan_start_date".into()));
        }
    }
    Ok(())
}

pub async fn create_client(
    State(state): State<Arc<AppState>>,
    GymId(gym_id): GymId,
    Json(payload): Json<CreateClientRequest>,
) -> Result<impl IntoResponse, AppError> {
    let user_type = payload.user_type.unwrap_or_else(|| USER_TYPE_USER.to_string());
    validate_user_type(&user_type)?;
    validate_plan_dates(payload.plan_start_date, payload.plan_end_date)?;

    if let Some(plan_id) = &payload.payment_plan_id {
        state.plan_repo.find_by_id(&gym_id, plan_id).await?
            .ok_or(AppError::NotFound("Plan not found".into()))?;
    }

    let client = Client::new(NewClientParams {
        gym_id,
        name: payload.name,
        email: payload.email,
        user_type,
        payment_plan_id: payload.payment_plan_id,
        plan_start_date: payload.plan_start_date,
        plan_end_date: payload.plan_end_date,
        tags: payload.tags.unwrap_or_default(),
    });

    let saved = state.client_repo.create(&client).await?;
    info!("Created client {} in gym {}", saved.id, saved.gym_id);

    let status = resolve_status(&saved, Utc::now());
    Ok(Json(ClientResponse::from_client(saved, status)))
}

pub async fn list_clients(
    State(state): State<Arc<AppState>>,
    GymId(gym_id): GymId,
) -> Result<impl IntoResponse, AppError> {
    let clients = state.client_repo.list_by_gym(&gym_id).await?;

    let now = Utc::now();
    let body: Vec<ClientResponse> = clients
        .into_iter()
        .map(|c| {
            let status = resolve_status(&c, now);
            ClientResponse::from_client(c, status)
        })
        .collect();

    Ok(Json(body))
}

pub async fn get_client(
    State(state): State<Arc<AppState>>,
    GymId(gym_id): GymId,
    Path((_, client_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let client = state.client_repo.find_by_id(&gym_id, &client_id).await?
        .ok_or(AppError::NotFound("Client not found".into()))?;

    let status = resolve_status(&client, Utc::now());
    Ok(Json(ClientResponse::from_client(client, status)))
}

pub async fn update_client(
    State(state): State<Arc<AppState>>,
    GymId(gym_id): GymId,
    Path((_, client_id)): Path<(String, String)>,
    Json(payload): Json<UpdateClientRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut client = state.client_repo.find_by_id(&gym_id, &client_id).await?
        .ok_or(AppError::NotFound("Client not found".into()))?;

    if let Some(name) = payload.name {
        client.name = name;
    }
    if let Some(email) = payload.email {
        client.email = email;
    }
    if let Some(user_type) = payload.user_type {
        validate_user_type(&user_type)?;
        client.user_type = user_type;
    }
    if let Some(plan_id) = payload.payment_plan_id {
        state.plan_repo.find_by_id(&gym_id, &plan_id).await?
            .ok_or(AppError::NotFound("Plan not found".into()))?;
        client.payment_plan_id = Some(plan_id);
    }
    if payload.plan_start_date.is_some() {
        client.plan_start_date = payload.plan_start_date;
    }
    if payload.plan_end_date.is_some() {
        client.plan_end_date = payload.plan_end_date;
    }
    if let Some(tags) = payload.tags {
        client.tags_json = serde_json::to_string(&tags)
            .map_err(|_| AppError::Validation("Invalid tags".into()))?;
    }

    validate_plan_dates(client.plan_start_date, client.plan_end_date)?;

    let saved = state.client_repo.update(&client).await?;
    info!("Updated client {} in gym {}", saved.id, saved.gym_id);

    let status = resolve_status(&saved, Utc::now());
    Ok(Json(ClientResponse::from_client(saved, status)))
}

pub async fn delete_client(
    State(state): State<Arc<AppState>>,
    GymId(gym_id): GymId,
    Path((_, client_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    state.client_repo.delete(&gym_id, &client_id).await?;
    info!("Deleted client {} from gym {}", client_id, gym_id);
    Ok(Json(serde_json::json!({"status": "deleted"})))
}
