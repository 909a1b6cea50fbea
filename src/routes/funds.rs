use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use tracing::{error, info};

use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::models::{FundsReceipt, FundsRequest};
use crate::services::funds_service;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/deposit", post(deposit))
        .route("/withdraw", post(withdraw))
}

pub async fn deposit(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<FundsRequest>,
) -> Result<Json<FundsReceipt>, AppError> {
    info!(
        "POST /api/funds/deposit - {} depositing {}",
        user.user_id, input.amount
    );
    let receipt = funds_service::deposit(&state.store, user.user_id, input).map_err(|e| {
        error!("Deposit failed for {}: {}", user.user_id, e);
        e
    })?;
    Ok(Json(receipt))
}

pub async fn withdraw(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<FundsRequest>,
) -> Result<Json<FundsReceipt>, AppError> {
    info!(
        "POST /api/funds/withdraw - {} withdrawing {}",
        user.user_id, input.amount
    );
    let receipt = funds_service::withdraw(&state.store, user.user_id, input).map_err(|e| {
        error!("Withdrawal failed for {}: {}", user.user_id, e);
        e
    })?;
    Ok(Json(receipt))
}
