pub mod funds_service;
pub mod market_service;
pub mod order_service;
pub mod portfolio_service;
pub mod recommendation_service;
pub mod user_service;
pub mod watchlist_service;

use std::collections::HashMap;

use crate::external::QuoteSource;

/// Snapshot the whole catalog's prices for a revalue pass.
pub(crate) async fn price_map(quotes: &dyn QuoteSource) -> HashMap<String, f64> {
    quotes
        .quotes()
        .await
        .into_iter()
        .map(|q| (q.symbol, q.price))
        .collect()
}
