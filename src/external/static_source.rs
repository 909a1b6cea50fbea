use std::collections::HashMap;

use async_trait::async_trait;

use super::catalog::nse_catalog;
use super::quote_source::{QuoteError, QuoteSource};
use crate::models::{Instrument, Quote};

// Deterministic quote source: every symbol trades at its catalog base price,
// optionally overridden per symbol. Used by the test suites and selectable
// via QUOTE_SOURCE=static for reproducible demos.
pub struct StaticQuoteSource {
    catalog: HashMap<String, Instrument>,
    overrides: HashMap<String, f64>,
}

impl StaticQuoteSource {
    pub fn new() -> Self {
        Self {
            catalog: nse_catalog()
                .into_iter()
                .map(|i| (i.symbol.clone(), i))
                .collect(),
            overrides: HashMap::new(),
        }
    }

    pub fn with_price(mut self, symbol: &str, price: f64) -> Self {
        self.overrides.insert(symbol.to_uppercase(), price);
        self
    }

    fn price_of(&self, instrument: &Instrument) -> f64 {
        self.overrides
            .get(&instrument.symbol)
            .copied()
            .unwrap_or(instrument.base_price)
    }

    fn quote_for(&self, instrument: &Instrument) -> Quote {
        Quote {
            symbol: instrument.symbol.clone(),
            price: self.price_of(instrument),
            change: 0.0,
            change_percent: 0.0,
            timestamp: chrono::Utc::now(),
        }
    }
}

impl Default for StaticQuoteSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl QuoteSource for StaticQuoteSource {
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
