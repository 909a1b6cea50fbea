use async_trait::async_trait;
use thiserror::Error;

use crate::models::{Instrument, Quote};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuoteError {
    #[error("Unknown symbol: {0}")]
    SymbolNotFound(String),
}

/// Supplier of current prices and catalog metadata for the instruments the
/// platform trades. Injected everywhere a price is needed so the accounting
/// core never generates or fetches prices itself.
#[async_trait]
pub trait QuoteSource: Send + Sync {
    async fn quote(&self, symbol: &str) -> Result<Quote, QuoteError>;

    /// Quotes for the entire catalog.
    async fn quotes(&self) -> Vec<Quote>;

    fn instrument(&self, symbol: &str) -> Option<Instrument>;

    fn instruments(&self) -> Vec<Instrument>;
}
