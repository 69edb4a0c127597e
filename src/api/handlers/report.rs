use axum::{extract::{Query, State}, response::IntoResponse, Json};
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;

use crate::api::dtos::responses::SummaryResponse;
use crate::api::extractors::gym::GymId;
use crate::domain::models::client::Client;
use crate::domain::services::capacity::{aggregate_fill_rate, Enrollment};
use crate::domain::services::membership::{count_statuses, is_active, resolve_status};
use crate::domain::services::revenue::{aggregate, month_windows};
use crate::error::AppError;
use crate::state::AppState;

const DEFAULT_WINDOW_MONTHS: u32 = 6;
const MAX_WINDOW_MONTHS: u32 = 24;

pub async fn revenue_report(
    State(state): State<Arc<AppState>>,
    GymId(gym_id): GymId,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    let months: u32 = match params.get("months") {
        Some(raw) => raw.parse()
            .map_err(|_| AppError::Validation("months must be a number".into()))?,
        None => DEFAULT_WINDOW_MONTHS,
    };
    if months == 0 || months > MAX_WINDOW_MONTHS {
        return Err(AppError::Validation(format!("months must be between 1 and {}", MAX_WINDOW_MONTHS)));
    }

    let now = Utc::now();
    let windows = month_windows(now.date_naive(), months);

    let since = windows
        .first()
        .and_then(|w| w.start.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
        .unwrap_or(now);

    let payments = state.payment_repo.list_since(&gym_id, since).await?;
    let plans = state.plan_repo.list_by_gym(&gym_id, true).await?;
    let clients = state.client_repo.list_by_gym(&gym_id).await?;

    let active_clients: Vec<Client> = clients
        .into_iter()
        .filter(|c| is_active(resolve_status(c, now)))
        .collect();

    let report = aggregate(&plans, &payments, &active_clients, &windows);
    Ok(Json(report))
}

pub async fn summary_report(
    State(state): State<Arc<AppState>>,
    GymId(gym_id): GymId,
) -> Result<impl IntoResponse, AppError> {
    let clients = state.client_repo.list_by_gym(&gym_id).await?;
    let classes = state.class_repo.list_by_gym(&gym_id).await?;
    let signups = state.signup_repo.list_by_gym(&gym_id).await?;

    let statuses = count_statuses(&clients, Utc::now());

    let mut filled_by_class: HashMap<&str, i64> = HashMap::new();
    for signup in &signups {
        *filled_by_class.entry(signup.class_id.as_str()).or_insert(0) += 1;
    }

    let enrollments: Vec<Enrollment> = classes
        .iter()
        .map(|c| Enrollment::from_parts(
            filled_by_class.get(c.id.as_str()).copied().unwrap_or(0),
            c.capacity,
        ))
        .collect();

    Ok(Json(SummaryResponse {
        client_count: clients.len() as i64,
        statuses,
        class_fill_rate: aggregate_fill_rate(&enrollments),
    }))
}
