use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::error::EngineError;
use super::position::Position;

// A user's holdings plus available cash. Mutated only through the buy, sell,
// deposit and withdraw operations below; every operation validates all of its
// preconditions before touching any state, so partial application is never
// observable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Portfolio {
    pub positions: BTreeMap<String, Position>,
    pub cash_balance: f64,
}

/// Outcome of an executed buy or sell.
#[derive(Debug, Clone, Serialize)]
pub struct Fill {
    pub symbol: String,
    pub quantity: u32,
    pub price: f64,
    pub total_amount: f64,
    /// Realized P&L against the released cost basis. Sells only.
    pub realized_pnl: Option<f64>,
    /// Remaining position after the fill; `None` when fully liquidated.
    pub position: Option<Position>,
}

impl Portfolio {
    pub fn new(starting_cash: f64) -> Self {
        Self {
            positions: BTreeMap::new(),
            cash_balance: starting_cash,
        }
    }

    fn check_quantity(quantity: i64) -> Result<u32, EngineError> {
        u32::try_from(quantity)
            .ok()
            .filter(|q| *q > 0)
            .ok_or(EngineError::InvalidQuantity)
    }

    /// Buy `quantity` shares at `price`. Creates the position or merges the
    /// lot under the weighted-average cost rule, then debits cash.
    pub fn apply_buy(
        &mut self,
        symbol: &str,
        quantity: i64,
        price: f64,
    ) -> Result<Fill, EngineError> {
        let quantity = Self::check_quantity(quantity)?;
        let cost = quantity as f64 * price;
        if cost > self.cash_balance {
            return Err(EngineError::InsufficientFunds {
                needed: cost,
                available: self.cash_balance,
            });
        }

        let position = self
            .positions
            .entry(symbol.to_string())
            .and_modify(|p| p.add_lot(quantity, price))
            .or_insert_with(|| Position::open(symbol, quantity, price));
        position.current_price = price;
        let position = position.clone();

        self.cash_balance -= cost;

        Ok(Fill {
            symbol: symbol.to_string(),
            quantity,
            price,
            total_amount: cost,
            realized_pnl: None,
            position: Some(position),
        })
    }

    /// Sell `quantity` shares at `price`. Releases cost basis proportionally,
    /// removes the position on full liquidation and credits the proceeds.
    pub fn apply_sell(
        &mut self,
        symbol: &str,
        quantity: i64,
        price: f64,
    ) -> Result<Fill, EngineError> {
        let quantity = Self::check_quantity(quantity)?;
        let position = self
            .positions
            .get_mut(symbol)
            .ok_or_else(|| EngineError::PositionNotFound(symbol.to_string()))?;
        if quantity > position.quantity {
            return Err(EngineError::InsufficientShares {
                held: position.quantity,
            });
        }

        let proceeds = quantity as f64 * price;
        let sold_invested = position.release_lot(quantity);
        position.current_price = price;

        let remaining = (position.quantity > 0).then(|| position.clone());
        if remaining.is_none() {
            self.positions.remove(symbol);
        }

        self.cash_balance += proceeds;

        Ok(Fill {
            symbol: symbol.to_string(),
            quantity,
            price,
            total_amount: proceeds,
            realized_pnl: Some(proceeds - sold_invested),
            position: remaining,
        })
    }

    /// Credit `amount` to available cash. Returns the new balance.
    pub fn deposit(&mut self, amount: f64) -> Result<f64, EngineError> {
        if amount <= 0.0 || !amount.is_finite() {
            return Err(EngineError::InvalidAmount);
        }
        self.cash_balance += amount;
        Ok(self.cash_balance)
    }

    /// Debit `amount` from available cash. Returns the new balance.
    pub fn withdraw(&mut self, amount: f64) -> Result<f64, EngineError> {
        if amount <= 0.0 || !amount.is_finite() {
            return Err(EngineError::InvalidAmount);
        }
        if amount > self.cash_balance {
            return Err(EngineError::InsufficientFunds {
                needed: amount,
                available: self.cash_balance,
            });
        }
        self.cash_balance -= amount;
        Ok(self.cash_balance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn assert_cost_basis_consistent(portfolio: &Portfolio) {
        for pos in portfolio.positions.values() {
            assert!(
                (pos.total_invested - pos.quantity as f64 * pos.average_cost).abs() < 1e-6,
                "cost basis drifted for {}: invested {} vs {} * {}",
                pos.symbol,
                pos.total_invested,
                pos.quantity,
                pos.average_cost
            );
        }
        assert!(portfolio.cash_balance >= 0.0);
    }

    #[test]
    fn test_first_buy_opens_position_and_debits_cash() {
        let mut p = Portfolio::new(2000.0);
        let fill = p.apply_buy("X", 10, 100.0).unwrap();
        let pos = fill.position.unwrap();
        assert_eq!(pos.quantity, 10);
        assert!((pos.average_cost - 100.0).abs() < EPS);
        assert!((pos.total_invested - 1000.0).abs() < EPS);
        assert!((p.cash_balance - 1000.0).abs() < EPS);
        assert_cost_basis_consistent(&p);
    }

    #[test]
    fn test_second_buy_recomputes_weighted_average() {
        let mut p = Portfolio::new(3000.0);
        p.apply_buy("X", 10, 100.0).unwrap();
        let fill = p.apply_buy("X", 10, 200.0).unwrap();
        let pos = fill.position.unwrap();
        assert_eq!(pos.quantity, 20);
        assert!((pos.average_cost - 150.0).abs() < EPS);
        assert!((pos.total_invested - 3000.0).abs() < EPS);
        assert!(p.cash_balance.abs() < EPS);
        assert_cost_basis_consistent(&p);
    }

    #[test]
    fn test_buy_beyond_cash_is_rejected_without_mutation() {
        let mut p = Portfolio::new(1000.0);
        p.apply_buy("X", 10, 100.0).unwrap();
        let err = p.apply_buy("X", 10, 200.0).unwrap_err();
        assert!(matches!(err, EngineError::InsufficientFunds { .. }));
        // Nothing moved: same position, same cash.
        assert_eq!(p.positions["X"].quantity, 10);
        assert!(p.cash_balance.abs() < EPS);
    }

    #[test]
    fn test_partial_sell_releases_basis_proportionally() {
        let mut p = Portfolio::new(3000.0);
        p.apply_buy("X", 10, 100.0).unwrap();
        p.apply_buy("X", 10, 200.0).unwrap();
        let fill = p.apply_sell("X", 5, 200.0).unwrap();
        assert!((fill.total_amount - 1000.0).abs() < EPS);
        assert!((fill.realized_pnl.unwrap() - 250.0).abs() < EPS);
        let pos = fill.position.unwrap();
        assert_eq!(pos.quantity, 15);
        assert!((pos.total_invested - 2250.0).abs() < EPS);
        assert!((pos.average_cost - 150.0).abs() < EPS);
        assert_cost_basis_consistent(&p);
    }

    #[test]
    fn test_full_sell_removes_position() {
        let mut p = Portfolio::new(3000.0);
        p.apply_buy("X", 20, 150.0).unwrap();
        p.apply_sell("X", 5, 200.0).unwrap();
        let cash_before = p.cash_balance;
        let fill = p.apply_sell("X", 15, 180.0).unwrap();
        assert!(fill.position.is_none());
        assert!(p.positions.is_empty());
        assert!((p.cash_balance - (cash_before + 15.0 * 180.0)).abs() < EPS);
    }

    #[test]
    fn test_full_sell_conserves_realized_pnl() {
        let mut p = Portfolio::new(5000.0);
        p.apply_buy("X", 10, 100.0).unwrap();
        p.apply_buy("X", 10, 300.0).unwrap();
        let invested_before = p.positions["X"].total_invested;
        let fill = p.apply_sell("X", 20, 250.0).unwrap();
        // Realized P&L of a full liquidation is proceeds minus the entire
        // cost basis held just before the sell.
        assert!((fill.realized_pnl.unwrap() - (fill.total_amount - invested_before)).abs() < EPS);
    }

    #[test]
    fn test_sell_unknown_symbol_fails() {
        let mut p = Portfolio::new(1000.0);
        let err = p.apply_sell("GHOST", 5, 100.0).unwrap_err();
        assert_eq!(err, EngineError::PositionNotFound("GHOST".into()));
    }

    #[test]
    fn test_sell_more_than_held_fails() {
        let mut p = Portfolio::new(2000.0);
        p.apply_buy("X", 10, 100.0).unwrap();
        let err = p.apply_sell("X", 11, 100.0).unwrap_err();
        assert_eq!(err, EngineError::InsufficientShares { held: 10 });
        assert_eq!(p.positions["X"].quantity, 10);
    }

    #[test]
    fn test_zero_and_negative_quantities_rejected_never_clamped() {
        let mut p = Portfolio::new(2000.0);
        assert_eq!(p.apply_buy("X", 0, 100.0).unwrap_err(), EngineError::InvalidQuantity);
        assert_eq!(p.apply_buy("X", -5, 100.0).unwrap_err(), EngineError::InvalidQuantity);
        p.apply_buy("X", 5, 100.0).unwrap();
        assert_eq!(p.apply_sell("X", 0, 100.0).unwrap_err(), EngineError::InvalidQuantity);
        assert_eq!(p.apply_sell("X", -1, 100.0).unwrap_err(), EngineError::InvalidQuantity);
    }

    #[test]
    fn test_rebuy_after_full_sell_starts_fresh_lot() {
        let mut p = Portfolio::new(10_000.0);
        p.apply_buy("X", 10, 100.0).unwrap();
        p.apply_sell("X", 10, 120.0).unwrap();
        let fill = p.apply_buy("X", 4, 500.0).unwrap();
        let pos = fill.position.unwrap();
        // The old average cost does not leak into the new lot.
        assert!((pos.average_cost - 500.0).abs() < EPS);
        assert!((pos.total_invested - 2000.0).abs() < EPS);
    }

    #[test]
    fn test_deposit_and_withdraw() {
        let mut p = Portfolio::new(0.0);
        assert_eq!(p.deposit(-50.0), Err(EngineError::InvalidAmount));
        assert_eq!(p.deposit(0.0), Err(EngineError::InvalidAmount));
        assert!((p.deposit(500.0).unwrap() - 500.0).abs() < EPS);
        assert!(matches!(
            p.withdraw(600.0),
            Err(EngineError::InsufficientFunds { .. })
        ));
        assert!((p.withdraw(200.0).unwrap() - 300.0).abs() < EPS);
        assert_eq!(p.withdraw(-1.0), Err(EngineError::InvalidAmount));
    }

    #[test]
    fn test_cost_basis_invariant_over_mixed_sequence() {
        let mut p = Portfolio::new(100_000.0);
        p.apply_buy("A", 10, 250.0).unwrap();
        p.apply_buy("B", 3, 1200.0).unwrap();
        p.apply_buy("A", 7, 310.0).unwrap();
        p.apply_sell("A", 12, 280.0).unwrap();
        p.apply_buy("B", 2, 1100.0).unwrap();
        p.apply_sell("B", 5, 1300.0).unwrap();
        p.apply_buy("A", 1, 260.0).unwrap();
        assert_cost_basis_consistent(&p);
    }
}
