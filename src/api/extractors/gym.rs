use axum::{
    extract::{FromRequestParts, Path},
    http::{request::Parts, StatusCode},
};
use std::collections::HashMap;
use crate::state::AppState;
use std::sync::Arc;

/// Tenant scoping: resolves the `gym_id` path segment and rejects requests
/// for gyms that do not exist.
pub struct GymId(pub String);

impl FromRequestParts<Arc<AppState>> for GymId {
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, state: &Arc<AppState>) -> Result<Self, Self::Rejection> {
        let params: Path<HashMap<String, String>> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| StatusCode::BAD_REQUEST)?;

        let gym_id = params.get("gym_id").ok_or(StatusCode::BAD_REQUEST)?;

        match state.gym_repo.find_by_id(gym_id).await {
            Ok(Some(_)) => Ok(GymId(gym_id.clone())),
            Ok(None) => Err(StatusCode::NOT_FOUND),
            Err(_) => Err(StatusCode::INTERNAL_SERVER_ERROR),
        }
    }
}
