use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "low" => Some(RiskLevel::Low),
            "medium" => Some(RiskLevel::Medium),
            "high" => Some(RiskLevel::High),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarketCap {
    #[serde(rename = "Large Cap")]
    Large,
    #[serde(rename = "Mid Cap")]
    Mid,
    #[serde(rename = "Small Cap")]
    Small,
}

impl MarketCap {
    pub fn as_str(&self) -> &'static str {
        match self {
            MarketCap::Large => "Large Cap",
            MarketCap::Mid => "Mid Cap",
            MarketCap::Small => "Small Cap",
        }
    }
}

// Catalog metadata for one listed instrument. `base_price` anchors the
// simulated quote walk and never reaches API responses.
#[derive(Debug, Clone, Serialize)]
pub struct Instrument {
    pub symbol: String,
    pub name: String,
    pub sector: String,
    pub risk_level: RiskLevel,
    pub market_cap: MarketCap,
    #[serde(skip_serializing)]
    pub base_price: f64,
}

/// A point-in-time price observation for one symbol.
#[derive(Debug, Clone, Serialize)]
pub struct Quote {
    pub symbol: String,
    pub price: f64,
    pub change: f64,
    pub change_percent: f64,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Catalog entry joined with its latest quote, as served by the market routes.
#[derive(Debug, Clone, Serialize)]
pub struct MarketEntry {
    pub symbol: String,
    pub name: String,
    pub sector: String,
    pub risk_level: RiskLevel,
    pub market_cap: MarketCap,
    pub price: f64,
    pub change: f64,
    pub change_percent: f64,
}

impl MarketEntry {
    pub fn from_parts(instrument: &Instrument, quote: &Quote) -> Self {
        Self {
            symbol: instrument.symbol.clone(),
            name: instrument.name.clone(),
            sector: instrument.sector.clone(),
            risk_level: instrument.risk_level,
            market_cap: instrument.market_cap,
            price: quote.price,
            change: quote.change,
            change_percent: quote.change_percent,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct MarketQuery {
    pub sector: Option<String>,
    pub risk_level: Option<String>,
    pub market_cap: Option<String>,
    pub sort_by: Option<String>,
    pub order: Option<String>,
}
