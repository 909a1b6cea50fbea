use axum::Router;
use tower_http::cors::CorsLayer;

use crate::routes::{
    auth, funds, health, market, orders, portfolio, recommendations, users, watchlist,
};
use crate::state::AppState;

pub fn create_app(state: AppState) -> Router {
    Router::<AppState>::new()
        .nest("/health", health::router())
        .nest("/api/auth", auth::router())
        .nest("/api/user", users::router())
        .nest("/api/portfolio", portfolio::router())
        .nest("/api/orders", orders::router())
        .nest("/api/funds", funds::router())
        .nest("/api/market", market::router())
        .nest("/api/watchlist", watchlist::router())
        .nest("/api/recommendations", recommendations::router())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
