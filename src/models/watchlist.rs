use serde::Serialize;

use crate::models::market::{Instrument, Quote, RiskLevel};

/// One watched symbol joined with its catalog row and latest quote.
#[derive(Debug, Clone, Serialize)]
pub struct WatchlistEntry {
    pub symbol: String,
    pub name: String,
    pub sector: String,
    pub risk_level: RiskLevel,
    pub price: f64,
    pub change_percent: f64,
    pub added_at: chrono::DateTime<chrono::Utc>,
}

impl WatchlistEntry {
    pub fn from_parts(
        instrument: &Instrument,
        quote: &Quote,
        added_at: chrono::DateTime<chrono::Utc>,
    ) -> Self {
        Self {
            symbol: instrument.symbol.clone(),
            name: instrument.name.clone(),
            sector: instrument.sector.clone(),
            risk_level: instrument.risk_level,
            price: quote.price,
            change_percent: quote.change_percent,
            added_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct WatchlistResponse {
    pub count: usize,
    pub entries: Vec<WatchlistEntry>,
}
