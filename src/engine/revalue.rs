use serde::Serialize;

use super::portfolio::Portfolio;

/// Portfolio-level rollup of the per-position derived values.
#[derive(Debug, Clone, Serialize)]
pub struct PortfolioTotals {
    pub total_invested: f64,
    pub current_value: f64,
    pub total_profit_loss: f64,
    pub total_profit_loss_percent: f64,
}

impl Portfolio {
    /// Refresh every position's `current_price` from the supplied lookup.
    /// A symbol the lookup does not know keeps its prior price, falling back
    /// to the average cost only when no price was ever observed (so P&L
    /// reads as zero rather than nonsense). Never touches cash or quantities,
    /// and applying the same lookup twice is a no-op.
    pub fn revalue<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<f64>,
    {
        for pos in self.positions.values_mut() {
            match lookup(&pos.symbol) {
                Some(price) => pos.current_price = price,
                None if pos.current_price <= 0.0 => pos.current_price = pos.average_cost,
                None => {}
            }
        }
    }

    pub fn summary(&self) -> PortfolioTotals {
        let total_invested: f64 = self.positions.values().map(|p| p.total_invested).sum();
        let current_value: f64 = self.positions.values().map(|p| p.current_value()).sum();
        let total_profit_loss = current_value - total_invested;
        let total_profit_loss_percent = if total_invested > 0.0 {
            total_profit_loss / total_invested * 100.0
        } else {
            0.0
        };
        PortfolioTotals {
            total_invested,
            current_value,
            total_profit_loss,
            total_profit_loss_percent,
        }
    }
}
