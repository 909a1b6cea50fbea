use std::collections::HashMap;

use uuid::Uuid;

use crate::errors::AppError;
use crate::external::QuoteSource;
use crate::models::{PortfolioStats, PortfolioView, PositionView};
use crate::store::Store;

/// Revalue the caller's holdings against fresh quotes and serve the result.
/// The refreshed prices are written back so a later read without quotes
/// still sees the last observed values.
pub async fn view(
    store: &Store,
    quotes: &dyn QuoteSource,
    user_id: Uuid,
) -> Result<PortfolioView, AppError> {
    let prices = super::price_map(quotes).await;

    store
        .with_account_mut(user_id, |acct| {
            acct.portfolio.revalue(|s| prices.get(s).copied());
            let holdings: Vec<_> = acct
                .portfolio
                .positions
                .values()
                .map(|p| PositionView::from_position(p, quotes.instrument(&p.symbol).as_ref()))
                .collect();
            PortfolioView {
                totals: acct.portfolio.summary(),
                cash_balance: acct.portfolio.cash_balance,
                holdings,
            }
        })
        .map_err(AppError::from)
}

pub async fn stats(
    store: &Store,
    quotes: &dyn QuoteSource,
    user_id: Uuid,
) -> Result<PortfolioStats, AppError> {
    let portfolio = view(store, quotes, user_id).await?;

    let mut sector_allocation: HashMap<String, f64> = HashMap::new();
    let mut risk_allocation: HashMap<String, f64> = HashMap::new();
    for holding in &portfolio.holdings {
        *sector_allocation.entry(holding.sector.clone()).or_default() += holding.current_value;
        *risk_allocation
            .entry(holding.risk_level.as_str().to_string())
            .or_default() += holding.current_value;
    }

    let mut ranked = portfolio.holdings.clone();
    ranked.sort_by(|a, b| {
        b.profit_loss_percent
            .partial_cmp(&a.profit_loss_percent)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    let top_gainers: Vec<_> = ranked.iter().take(5).cloned().collect();
    let top_losers: Vec<_> = ranked.iter().rev().take(5).cloned().collect();

    Ok(PortfolioStats {
        totals: portfolio.totals,
        cash_balance: portfolio.cash_balance,
        holdings_count: portfolio.holdings.len(),
        sector_allocation,
        risk_allocation,
        top_gainers,
        top_losers,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::external::StaticQuoteSource;
    use crate::models::{OrderRequest, User};
    use crate::services::order_service;

    async fn seeded(cash: f64) -> (Store, Uuid) {
        let store = Store::new();
        let user = User::new("T".into(), "t@example.com".into(), "1".into(), "h".into());
        let id = user.id;
        store.insert_user(user, cash).unwrap();
        (store, id)
    }

    #[tokio::test]
    async fn test_view_revalues_against_current_quotes() {
        let (store, user_id) = seeded(100_000.0).await;
        let quotes = StaticQuoteSource::new().with_price("TCS", 3000.0);
        order_service::buy(
            &store,
            &quotes,
            user_id,
            OrderRequest {
                symbol: "TCS".into(),
                quantity: 10,
            },
        )
        .await
        .unwrap();

        let quotes = StaticQuoteSource::new().with_price("TCS", 3300.0);
        let portfolio = view(&store, &quotes, user_id).await.unwrap();
        assert_eq!(portfolio.holdings.len(), 1);
        let holding = &portfolio.holdings[0];
        assert!((holding.current_price - 3300.0).abs() < 1e-9);
        assert!((holding.profit_loss - 3000.0).abs() < 1e-9);
        assert!((holding.profit_loss_percent - 10.0).abs() < 1e-9);
        assert!((portfolio.totals.total_profit_loss - 3000.0).abs() < 1e-9);
        assert!((portfolio.cash_balance - 70_000.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_stats_allocations_split_by_sector_and_risk() {
        let (store, user_id) = seeded(100_000.0).await;
        let quotes = StaticQuoteSource::new()
            .with_price("TCS", 3000.0)
            .with_price("SBIN", 500.0);
        for (symbol, qty) in [("TCS", 10), ("SBIN", 20)] {
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

        let stats = stats(&store, &quotes, user_id).await.unwrap();
        assert_eq!(stats.holdings_count, 2);
        assert!((stats.sector_allocation["IT"] - 30_000.0).abs() < 1e-9);
        assert!((stats.sector_allocation["Banking"] - 10_000.0).abs() < 1e-9);
        assert!((stats.risk_allocation["Low"] - 30_000.0).abs() < 1e-9);
        assert!((stats.risk_allocation["Medium"] - 10_000.0).abs() < 1e-9);
        assert!(stats.top_gainers.len() <= 5);
    }

    #[tokio::test]
    async fn test_empty_portfolio_view_is_clean() {
        let (store, user_id) = seeded(500.0).await;
        let quotes = StaticQuoteSource::new();
        let portfolio = view(&store, &quotes, user_id).await.unwrap();
        assert!(portfolio.holdings.is_empty());
        assert!(portfolio.totals.total_invested.abs() < 1e-9);
        assert!((portfolio.cash_balance - 500.0).abs() < 1e-9);
    }
}
