use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use tracing::{error, info};

use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::models::{PortfolioStats, PortfolioView};
use crate::services::portfolio_service;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_portfolio))
        .route("/stats", get(get_stats))
}

pub async fn get_portfolio(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<PortfolioView>, AppError> {
    info!("GET /api/portfolio - {}", user.user_id);
    let portfolio = portfolio_service::view(&state.store, state.quotes.as_ref(), user.user_id)
        .await
        .map_err(|e| {
            error!("Failed to fetch portfolio for {}: {}", user.user_id, e);
            e
        })?;
    Ok(Json(portfolio))
}

pub async fn get_stats(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<PortfolioStats>, AppError> {
    info!("GET /api/portfolio/stats - {}", user.user_id);
    let stats = portfolio_service::stats(&state.store, state.quotes.as_ref(), user.user_id)
        .await
        .map_err(|e| {
            error!("Failed to fetch portfolio stats for {}: {}", user.user_id, e);
            e
        })?;
    Ok(Json(stats))
}
