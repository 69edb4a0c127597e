use axum::{extract::State, response::IntoResponse, Json};
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::requests::CreatePaymentRequest;
use crate::api::extractors::gym::GymId;
use crate::domain::models::payment::{
    NewPaymentParams, Payment, PAYMENT_STATUS_FAILED, PAYMENT_STATUS_PAID, PAYMENT_STATUS_PENDING,
};
use crate::error::AppError;
use crate::state::AppState;

pub async fn create_payment(
    State(state): State<Arc<AppState>>,
    GymId(gym_id): GymId,
    Json(payload): Json<CreatePaymentRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.amount_cents < 0 {
        return Err(AppError::Validation("amount_cents must not be negative".into()));
    }
    match payload.status.as_str() {
        PAYMENT_STATUS_PAID | PAYMENT_STATUS_PENDING | PAYMENT_STATUS_FAILED => {}
        other => return Err(AppError::Validation(format!("Unknown payment status: {}", other))),
    }

    if let Some(plan_id) = &payload.plan_id {
        state.plan_repo.find_by_id(&gym_id, plan_id).await?
            .ok_or(AppError::NotFound("Plan not found".into()))?;
    }

    let payment = Payment::new(NewPaymentParams {
        gym_id,
        client_id: payload.client_id,
        plan_id: payload.plan_id,
        amount_cents: payload.amount_cents,
        status: payload.status,
        created_at: payload.created_at,
    });

    let saved = state.payment_repo.create(&payment).await?;
    info!("Recorded payment {} ({} cents) in gym {}", saved.id, saved.amount_cents, saved.gym_id);
    Ok(Json(saved))
}

pub async fn list_payments(
    State(state): State<Arc<AppState>>,
    GymId(gym_id): GymId,
) -> Result<impl IntoResponse, AppError> {
    let payments = state.payment_repo.list_by_gym(&gym_id).await?;
    Ok(Json(payments))
}
