use std::collections::{BTreeSet, HashMap};

use uuid::Uuid;

use crate::errors::AppError;
use crate::external::QuoteSource;
use crate::models::{
    Instrument, MarketCap, MarketEntry, Quote, Recommendation, RecommendationParams,
    RecommendationResponse, RiskLevel,
};
use crate::store::{Account, Store};

const MAX_RECOMMENDATIONS: usize = 8;
const MIN_RISK_MATCHES: usize = 5;

/// Suggest catalog instruments the caller does not already hold or watch,
/// scored against a target risk level. The target comes from the
/// `risk_level` query parameter when given, otherwise from the risk level
/// carrying the most value in the caller's holdings, defaulting to Medium.
pub async fn recommend(
    store: &Store,
    quotes: &dyn QuoteSource,
    user_id: Uuid,
    params: RecommendationParams,
) -> Result<RecommendationResponse, AppError> {
    let target = match params.risk_level.as_deref() {
        Some(raw) => RiskLevel::parse(raw).ok_or_else(|| {
            AppError::Validation(format!(
                "Invalid risk_level: {raw}. Must be one of Low, Medium, High"
            ))
        })?,
        None => store.with_account(user_id, |acct| dominant_risk(acct, quotes))?,
    };

    let excluded: BTreeSet<String> = store.with_account(user_id, |acct| {
        acct.portfolio
            .positions
            .keys()
            .chain(acct.watchlist.keys())
            .cloned()
            .collect()
    })?;

    let quote_map: HashMap<String, Quote> = quotes
        .quotes()
        .await
        .into_iter()
        .map(|q| (q.symbol.clone(), q))
        .collect();

    let instruments = quotes.instruments();
    let mut candidates: Vec<&Instrument> = instruments
        .iter()
        .filter(|i| !excluded.contains(&i.symbol))
        .collect();
    // Prefer exact risk matches; broaden only when too few remain.
    let matching: Vec<&Instrument> = candidates
        .iter()
        .copied()
        .filter(|i| i.risk_level == target)
        .collect();
    if matching.len() >= MIN_RISK_MATCHES {
        candidates = matching;
    }

    let mut recommendations: Vec<Recommendation> = candidates
        .into_iter()
        .filter_map(|i| quote_map.get(&i.symbol).map(|q| score(i, q, target)))
        .collect();
    recommendations.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then_with(|| a.entry.symbol.cmp(&b.entry.symbol))
    });
    recommendations.truncate(MAX_RECOMMENDATIONS);

    Ok(RecommendationResponse {
        count: recommendations.len(),
        risk_level: target,
        recommendations,
    })
}

/// The risk level carrying the most current value in the holdings.
fn dominant_risk(acct: &Account, quotes: &dyn QuoteSource) -> RiskLevel {
    let mut weights = [
        (RiskLevel::Low, 0.0),
        (RiskLevel::Medium, 0.0),
        (RiskLevel::High, 0.0),
    ];
    for pos in acct.portfolio.positions.values() {
        if let Some(instrument) = quotes.instrument(&pos.symbol) {
            for slot in weights.iter_mut() {
                if slot.0 == instrument.risk_level {
                    slot.1 += pos.current_value();
                }
            }
        }
    }
    weights
        .iter()
        .filter(|(_, w)| *w > 0.0)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(r, _)| *r)
        .unwrap_or(RiskLevel::Medium)
}

fn score(instrument: &Instrument, quote: &Quote, target: RiskLevel) -> Recommendation {
    let mut score = 50u32;
    let mut reasons = Vec::new();

    if instrument.risk_level == target {
        score += 20;
        reasons.push(format!(
            "Matches your {} risk tolerance",
            target.as_str().to_lowercase()
        ));
    }
    if instrument.market_cap == MarketCap::Large {
        score += 15;
        reasons.push("Established large-cap company".to_string());
    }
    if instrument.risk_level == RiskLevel::Low {
        score += 10;
        reasons.push("Low volatility for stable returns".to_string());
    }
    if quote.change_percent > 0.0 {
        score += 5;
        reasons.push("Trading above its last observed price".to_string());
    }

    let reason = if reasons.is_empty() {
        "Reasonable fit given the current catalog".to_string()
    } else {
        reasons.join(". ")
    };

    Recommendation {
        entry: MarketEntry::from_parts(instrument, quote),
        score,
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::external::StaticQuoteSource;
    use crate::models::{OrderRequest, User};
    use crate::services::{order_service, watchlist_service};

    fn seeded_store(cash: f64) -> (Store, Uuid) {
        let store = Store::new();
        let user = User::new("T".into(), "t@example.com".into(), "1".into(), "h".into());
        let id = user.id;
        store.insert_user(user, cash).unwrap();
        (store, id)
    }

    #[tokio::test]
    async fn test_invalid_risk_level_is_rejected() {
        let (store, user_id) = seeded_store(0.0);
        let quotes = StaticQuoteSource::new();
        let err = recommend(
            &store,
            &quotes,
            user_id,
            RecommendationParams {
                risk_level: Some("extreme".into()),
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_risk_filter_and_cap() {
        let (store, user_id) = seeded_store(0.0);
        let quotes = StaticQuoteSource::new();
        let response = recommend(
            &store,
            &quotes,
            user_id,
            RecommendationParams {
                risk_level: Some("low".into()),
            },
        )
        .await
        .unwrap();
        assert!(response.count >= MIN_RISK_MATCHES);
        assert!(response.count <= MAX_RECOMMENDATIONS);
        assert!(response
            .recommendations
            .iter()
            .all(|r| r.entry.risk_level == RiskLevel::Low));
        assert!(response
            .recommendations
            .windows(2)
            .all(|w| w[0].score >= w[1].score));
    }

    #[tokio::test]
    async fn test_held_and_watched_symbols_are_excluded() {
        let (store, user_id) = seeded_store(100_000.0);
        let quotes = StaticQuoteSource::new().with_price("TCS", 3000.0);
        order_service::buy(
            &store,
            &quotes,
            user_id,
            OrderRequest {
                symbol: "TCS".into(),
                quantity: 5,
            },
        )
        .await
        .unwrap();
        watchlist_service::add(&store, &quotes, user_id, "ITC")
            .await
            .unwrap();

        let response = recommend(
            &store,
            &quotes,
            user_id,
            RecommendationParams {
                risk_level: Some("Low".into()),
            },
        )
        .await
        .unwrap();
        assert!(response
            .recommendations
            .iter()
            .all(|r| r.entry.symbol != "TCS" && r.entry.symbol != "ITC"));
    }

    #[tokio::test]
    async fn test_target_defaults_to_dominant_holding_risk() {
        let (store, user_id) = seeded_store(1_000_000.0);
        let quotes = StaticQuoteSource::new()
            .with_price("BAJFINANCE", 6800.0)
            .with_price("SBIN", 600.0);
        // High-risk value dwarfs the Medium-risk lot.
        for (symbol, qty) in [("BAJFINANCE", 100), ("SBIN", 10)] {
            order_service::buy(
                &store,
                &quotes,
                user_id,
                OrderRequest {
                    symbol: symbol.into(),
                    quantity: qty,
                },
            )
            .await
            .unwrap();
        }

        let response = recommend(&store, &quotes, user_id, RecommendationParams::default())
            .await
            .unwrap();
        assert_eq!(response.risk_level, RiskLevel::High);
    }

    #[tokio::test]
    async fn test_empty_account_defaults_to_medium() {
        let (store, user_id) = seeded_store(0.0);
        let quotes = StaticQuoteSource::new();
        let response = recommend(&store, &quotes, user_id, RecommendationParams::default())
            .await
            .unwrap();
        assert_eq!(response.risk_level, RiskLevel::Medium);
        assert!(response.count <= MAX_RECOMMENDATIONS);
    }
}
