use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use tracing::{error, info};

use crate::errors::AppError;
use crate::models::{MarketEntry, MarketQuery};
use crate::services::market_service;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_stocks))
        .route("/:symbol", get(get_stock))
        .route("/search/:query", get(search_stocks))
}

pub async fn list_stocks(
    State(state): State<AppState>,
    Query(query): Query<MarketQuery>,
) -> Result<Json<Vec<MarketEntry>>, AppError> {
    info!("GET /api/market - Listing stocks");
    let entries = market_service::list(state.quotes.as_ref(), query)
        .await
        .map_err(|e| {
            error!("Failed to list stocks: {}", e);
            e
        })?;
    Ok(Json(entries))
}

pub async fn get_stock(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
) -> Result<Json<MarketEntry>, AppError> {
    info!("GET /api/market/{} - Fetching quote", symbol);
    let entry = market_service::get(state.quotes.as_ref(), &symbol)
        .await
        .map_err(|e| {
            error!("Failed to fetch quote for {}: {}", symbol, e);
            e
        })?;
    Ok(Json(entry))
}

pub async fn search_stocks(
    State(state): State<AppState>,
    Path(query): Path<String>,
) -> Result<Json<Vec<MarketEntry>>, AppError> {
    info!("GET /api/market/search/{} - Searching", query);
    let entries = market_service::search(state.quotes.as_ref(), &query)
        .await
        .map_err(|e| {
            error!("Search failed for {:?}: {}", query, e);
            e
        })?;
    Ok(Json(entries))
}
