use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use tracing::{error, info};

use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::models::UserProfile;
use crate::services::user_service;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/profile", get(profile))
}

pub async fn profile(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<UserProfile>, AppError> {
    info!("GET /api/user/profile - {}", user.user_id);
    let profile = user_service::profile(&state.store, state.quotes.as_ref(), user.user_id)
        .await
        .map_err(|e| {
            error!("Failed to fetch profile for {}: {}", user.user_id, e);
            e
        })?;
    Ok(Json(profile))
}
