use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::engine::{PortfolioTotals, Position};
use crate::models::market::{Instrument, RiskLevel};

// One holding as served over the API: the accounting fields plus the derived
// values and the catalog metadata the UI renders alongside them.
#[derive(Debug, Clone, Serialize)]
pub struct PositionView {
    pub symbol: String,
    pub name: String,
    pub sector: String,
    pub risk_level: RiskLevel,
    pub quantity: u32,
    pub average_cost: f64,
    pub total_invested: f64,
    pub current_price: f64,
    pub current_value: f64,
    pub profit_loss: f64,
    pub profit_loss_percent: f64,
}

impl PositionView {
    pub fn from_position(position: &Position, instrument: Option<&Instrument>) -> Self {
        Self {
            symbol: position.symbol.clone(),
            name: instrument
                .map(|i| i.name.clone())
                .unwrap_or_else(|| position.symbol.clone()),
            sector: instrument
                .map(|i| i.sector.clone())
                .unwrap_or_else(|| "Diversified".to_string()),
            risk_level: instrument.map(|i| i.risk_level).unwrap_or(RiskLevel::Medium),
            quantity: position.quantity,
            average_cost: position.average_cost,
            total_invested: position.total_invested,
            current_price: position.current_price,
            current_value: position.current_value(),
            profit_loss: position.profit_loss(),
            profit_loss_percent: position.profit_loss_percent(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PortfolioView {
    pub holdings: Vec<PositionView>,
    #[serde(flatten)]
    pub totals: PortfolioTotals,
    pub cash_balance: f64,
}

#[derive(Debug, Serialize)]
pub struct PortfolioStats {
    #[serde(flatten)]
    pub totals: PortfolioTotals,
    pub cash_balance: f64,
    pub holdings_count: usize,
    pub sector_allocation: HashMap<String, f64>,
    pub risk_allocation: HashMap<String, f64>,
    pub top_gainers: Vec<PositionView>,
    pub top_losers: Vec<PositionView>,
}

#[derive(Debug, Deserialize)]
pub struct FundsRequest {
    pub amount: f64,
}

#[derive(Debug, Serialize)]
pub struct FundsReceipt {
    pub transaction_id: uuid::Uuid,
    pub amount: f64,
    pub cash_balance: f64,
}
