mod market;
mod order;
mod portfolio;
mod recommendation;
mod user;
mod watchlist;

pub use market::{Instrument, MarketCap, MarketEntry, MarketQuery, Quote, RiskLevel};
pub use order::{
    HistoryParams, HistoryResponse, OrderReceipt, OrderRequest, Transaction, TransactionKind,
};
pub use portfolio::{FundsReceipt, FundsRequest, PortfolioStats, PortfolioView, PositionView};
pub use recommendation::{Recommendation, RecommendationParams, RecommendationResponse};
pub use user::{AuthResponse, LoginRequest, RegisterRequest, User, UserProfile, UserView};
pub use watchlist::{WatchlistEntry, WatchlistResponse};
