use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use tracing::{error, info};

use crate::errors::AppError;
use crate::models::{AuthResponse, LoginRequest, RegisterRequest};
use crate::services::user_service;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    info!("POST /api/auth/register - Registering {}", input.email);
    let response = user_service::register(
        &state.store,
        &state.auth,
        state.config.starting_cash,
        input,
    )
    .map_err(|e| {
        error!("Registration failed: {}", e);
        e
    })?;
    Ok(Json(response))
}

pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    info!("POST /api/auth/login - Login attempt for {}", input.email);
    let response = user_service::login(&state.store, &state.auth, input).map_err(|e| {
        error!("Login failed: {}", e);
        e
    })?;
    Ok(Json(response))
}
