use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use tracing::{error, info};

use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::models::{RecommendationParams, RecommendationResponse};
use crate::services::recommendation_service;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(get_recommendations))
}

pub async fn get_recommendations(
    State(state): State<AppState>,
    user: AuthUser,
    Query(params): Query<RecommendationParams>,
) -> Result<Json<RecommendationResponse>, AppError> {
    info!("GET /api/recommendations - {}", user.user_id);
    let response = recommendation_service::recommend(
        &state.store,
        state.quotes.as_ref(),
        user.user_id,
        params,
    )
    .await
    .map_err(|e| {
        error!("Failed to build recommendations for {}: {}", user.user_id, e);
        e
    })?;
    Ok(Json(response))
}
