use thiserror::Error;

/// Failure kinds for portfolio mutations. All of these are caller input or
/// state errors: nothing here is transient, and none are retried.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error("Quantity must be a positive whole number of shares")]
    InvalidQuantity,

    #[error("Amount must be greater than 0")]
    InvalidAmount,

    #[error("Insufficient funds: need {needed:.2} but only {available:.2} available")]
    InsufficientFunds { needed: f64, available: f64 },

    #[error("Insufficient shares: only {held} held")]
    InsufficientShares { held: u32 },

    #[error("No position held in {0}")]
    PositionNotFound(String),

    #[error("Unknown symbol: {0}")]
    SymbolNotFound(String),
}
