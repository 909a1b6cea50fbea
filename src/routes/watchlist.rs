use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use tracing::{error, info};

use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::models::WatchlistResponse;
use crate::services::watchlist_service;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_watchlist))
        .route("/:symbol", post(add_symbol).delete(remove_symbol))
}

pub async fn get_watchlist(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<WatchlistResponse>, AppError> {
    info!("GET /api/watchlist - {}", user.user_id);
    let watchlist = watchlist_service::list(&state.store, state.quotes.as_ref(), user.user_id)
        .await
        .map_err(|e| {
            error!("Failed to fetch watchlist for {}: {}", user.user_id, e);
            e
        })?;
    Ok(Json(watchlist))
}

pub async fn add_symbol(
    State(state): State<AppState>,
    user: AuthUser,
    Path(symbol): Path<String>,
) -> Result<Json<WatchlistResponse>, AppError> {
    info!("POST /api/watchlist/{} - {}", symbol, user.user_id);
    let watchlist =
        watchlist_service::add(&state.store, state.quotes.as_ref(), user.user_id, &symbol)
            .await
            .map_err(|e| {
                error!("Failed to watch {} for {}: {}", symbol, user.user_id, e);
                e
            })?;
    Ok(Json(watchlist))
}

pub async fn remove_symbol(
    State(state): State<AppState>,
    user: AuthUser,
    Path(symbol): Path<String>,
) -> Result<Json<WatchlistResponse>, AppError> {
    info!("DELETE /api/watchlist/{} - {}", symbol, user.user_id);
    let watchlist =
        watchlist_service::remove(&state.store, state.quotes.as_ref(), user.user_id, &symbol)
            .await
            .map_err(|e| {
                error!("Failed to unwatch {} for {}: {}", symbol, user.user_id, e);
                e
            })?;
    Ok(Json(watchlist))
}
