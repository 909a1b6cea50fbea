use serde::{Deserialize, Serialize};

// One holding in a single instrument: share count plus the cost basis of the
// shares currently held. `average_cost` is the weighted average price paid
// per currently-held share, not the historical purchase price.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Position {
    pub symbol: String,
    pub quantity: u32,
    pub average_cost: f64,
    pub total_invested: f64,
    pub current_price: f64,
}

impl Position {
    pub fn open(symbol: &str, quantity: u32, price: f64) -> Self {
        Self {
            symbol: symbol.to_string(),
            quantity,
            average_cost: price,
            total_invested: quantity as f64 * price,
            current_price: price,
        }
    }

    /// Merge a new lot into the holding under the weighted-average cost rule:
    /// the average shifts proportionally to the size of the new lot relative
    /// to the old.
    pub fn add_lot(&mut self, quantity: u32, price: f64) {
        let cost = quantity as f64 * price;
        self.quantity += quantity;
        self.total_invested += cost;
        self.average_cost = self.total_invested / self.quantity as f64;
    }

    /// Release `quantity` shares, returning the cost basis released. The
    /// basis comes out proportionally to the fraction of the lot sold, so
    /// the average cost of the remaining shares is unchanged. The caller is
    /// responsible for removing the position when quantity reaches zero.
    pub fn release_lot(&mut self, quantity: u32) -> f64 {
        let sold_invested = (quantity as f64 / self.quantity as f64) * self.total_invested;
        self.quantity -= quantity;
        self.total_invested -= sold_invested;
        sold_invested
    }

    pub fn current_value(&self) -> f64 {
        self.quantity as f64 * self.current_price
    }

    pub fn profit_loss(&self) -> f64 {
        self.current_value() - self.total_invested
    }

    pub fn profit_loss_percent(&self) -> f64 {
        if self.total_invested > 0.0 {
            self.profit_loss() / self.total_invested * 100.0
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_open_sets_cost_basis_from_price() {
        let pos = Position::open("TCS", 10, 100.0);
        assert_eq!(pos.quantity, 10);
        assert!((pos.average_cost - 100.0).abs() < EPS);
        assert!((pos.total_invested - 1000.0).abs() < EPS);
        assert!((pos.profit_loss()).abs() < EPS);
    }

    #[test]
    fn test_add_lot_shifts_average_proportionally() {
        let mut pos = Position::open("TCS", 10, 100.0);
        pos.add_lot(10, 200.0);
        assert_eq!(pos.quantity, 20);
        assert!((pos.average_cost - 150.0).abs() < EPS);
        assert!((pos.total_invested - 3000.0).abs() < EPS);
    }

    #[test]
    fn test_release_lot_keeps_average_cost() {
        let mut pos = Position::open("TCS", 20, 150.0);
        let released = pos.release_lot(5);
        assert!((released - 750.0).abs() < EPS);
        assert_eq!(pos.quantity, 15);
        assert!((pos.total_invested - 2250.0).abs() < EPS);
        assert!((pos.average_cost - 150.0).abs() < EPS);
    }

    #[test]
    fn test_profit_loss_percent_zero_when_nothing_invested() {
        let mut pos = Position::open("TCS", 1, 0.0);
        pos.current_price = 10.0;
        assert!((pos.profit_loss_percent()).abs() < EPS);
    }
}
