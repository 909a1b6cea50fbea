mod error;
mod portfolio;
mod position;
mod revalue;

pub use error::EngineError;
pub use portfolio::{Fill, Portfolio};
pub use position::Position;
pub use revalue::PortfolioTotals;
