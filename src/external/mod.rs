pub mod catalog;
pub mod quote_source;
pub mod simulated;
pub mod static_source;

pub use quote_source::{QuoteError, QuoteSource};
pub use simulated::SimulatedQuoteSource;
pub use static_source::StaticQuoteSource;
