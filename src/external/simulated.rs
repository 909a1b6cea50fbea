use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use rand::Rng;

use super::catalog::nse_catalog;
use super::quote_source::{QuoteError, QuoteSource};
use crate::models::{Instrument, Quote};

// Random-walk quote generator over the fixed catalog. Each observation
// drifts a few percent from the last one, anchored so prices cannot walk
// below 5% of the listing's base price.
pub struct SimulatedQuoteSource {
    catalog: HashMap<String, Instrument>,
    last_prices: RwLock<HashMap<String, f64>>,
}

const MAX_DRIFT: f64 = 0.02;

impl SimulatedQuoteSource {
    pub fn new() -> Self {
        let catalog: HashMap<String, Instrument> = nse_catalog()
            .into_iter()
            .map(|i| (i.symbol.clone(), i))
            .collect();
        Self {
            catalog,
            last_prices: RwLock::new(HashMap::new()),
        }
    }

    fn next_price(&self, instrument: &Instrument) -> (f64, f64) {
        let mut last = self.last_prices.write();
        let prev = last
            .get(&instrument.symbol)
            .copied()
            .unwrap_or(instrument.base_price);
        let drift = rand::rng().random_range(-MAX_DRIFT..MAX_DRIFT);
        let floor = instrument.base_price * 0.05;
        let price = ((prev * (1.0 + drift)).max(floor) * 100.0).round() / 100.0;
        last.insert(instrument.symbol.clone(), price);
        (price, prev)
    }

    fn quote_for(&self, instrument: &Instrument) -> Quote {
        let (price, prev) = self.next_price(instrument);
        let change = price - prev;
        Quote {
            symbol: instrument.symbol.clone(),
            price,
            change,
            change_percent: if prev > 0.0 { change / prev * 100.0 } else { 0.0 },
            timestamp: chrono::Utc::now(),
        }
    }
}

impl Default for SimulatedQuoteSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl QuoteSource for SimulatedQuoteSource {
    async fn quote(&self, symbol: &str) -> Result<Quote, QuoteError> {
        let symbol = symbol.to_uppercase();
        let instrument = self
            .catalog
            .get(&symbol)
            .ok_or_else(|| QuoteError::SymbolNotFound(symbol.clone()))?;
        Ok(self.quote_for(instrument))
    }

    async fn quotes(&self) -> Vec<Quote> {
        self.catalog.values().map(|i| self.quote_for(i)).collect()
    }

    fn instrument(&self, symbol: &str) -> Option<Instrument> {
        self.catalog.get(&symbol.to_uppercase()).cloned()
    }

    fn instruments(&self) -> Vec<Instrument> {
        self.catalog.values().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unknown_symbol_is_rejected() {
        let source = SimulatedQuoteSource::new();
        let err = source.quote("NOPE").await.unwrap_err();
        assert_eq!(err, QuoteError::SymbolNotFound("NOPE".into()));
    }

    #[tokio::test]
    async fn test_lookup_is_case_insensitive() {
        let source = SimulatedQuoteSource::new();
        let quote = source.quote("reliance").await.unwrap();
        assert_eq!(quote.symbol, "RELIANCE");
        assert!(quote.price > 0.0);
    }

    #[tokio::test]
    async fn test_prices_stay_near_the_walk() {
        let source = SimulatedQuoteSource::new();
        let mut prev = source.quote("TCS").await.unwrap().price;
        for _ in 0..50 {
            let quote = source.quote("TCS").await.unwrap();
            assert!(quote.price > 0.0);
            assert!((quote.price - prev).abs() <= prev * MAX_DRIFT + 0.01);
            prev = quote.price;
        }
    }
}
