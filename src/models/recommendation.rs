use serde::{Deserialize, Serialize};

use crate::models::market::{MarketEntry, RiskLevel};

// One suggested instrument with its score and a human-readable rationale.
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    #[serde(flatten)]
    pub entry: MarketEntry,
    pub score: u32,
    pub reason: String,
}

#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub count: usize,
    pub risk_level: RiskLevel,
    pub recommendations: Vec<Recommendation>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RecommendationParams {
    pub risk_level: Option<String>,
}
