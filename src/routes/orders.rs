use axum::extract::{Query, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use tracing::{error, info};

use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::models::{HistoryParams, HistoryResponse, OrderReceipt, OrderRequest};
use crate::services::order_service;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/buy", post(buy))
        .route("/sell", post(sell))
        .route("/history", get(history))
}

pub async fn buy(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<OrderRequest>,
) -> Result<Json<OrderReceipt>, AppError> {
    info!(
        "POST /api/orders/buy - {} buying {} x {}",
        user.user_id, input.quantity, input.symbol
    );
    let receipt = order_service::buy(&state.store, state.quotes.as_ref(), user.user_id, input)
        .await
        .map_err(|e| {
            error!("Buy order failed for {}: {}", user.user_id, e);
            e
        })?;
    Ok(Json(receipt))
}

pub async fn sell(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<OrderRequest>,
) -> Result<Json<OrderReceipt>, AppError> {
    info!(
        "POST /api/orders/sell - {} selling {} x {}",
        user.user_id, input.quantity, input.symbol
    );
    let receipt = order_service::sell(&state.store, state.quotes.as_ref(), user.user_id, input)
        .await
        .map_err(|e| {
            error!("Sell order failed for {}: {}", user.user_id, e);
            e
        })?;
    Ok(Json(receipt))
}

pub async fn history(
    State(state): State<AppState>,
    user: AuthUser,
    Query(params): Query<HistoryParams>,
) -> Result<Json<HistoryResponse>, AppError> {
    info!("GET /api/orders/history - {}", user.user_id);
    let page = order_service::history(&state.store, user.user_id, params).map_err(|e| {
        error!("Failed to fetch order history for {}: {}", user.user_id, e);
        e
    })?;
    Ok(Json(page))
}
