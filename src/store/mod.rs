mod accounts;
mod users;

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use thiserror::Error;
use uuid::Uuid;

use crate::engine::Portfolio;
use crate::models::{Transaction, User};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("User already exists with this email")]
    DuplicateEmail,
    #[error("Account not found")]
    AccountNotFound,
}

/// One user's trading account: the portfolio plus its append-only
/// transaction log. Mutated only while holding the map entry's write guard,
/// which serializes buy/sell/deposit/withdraw per user.
pub struct Account {
    pub portfolio: Portfolio,
    pub transactions: Vec<Transaction>,
    /// Watched symbols, keyed by symbol with the time each was added.
    pub watchlist: BTreeMap<String, DateTime<Utc>>,
}

impl Account {
    pub fn new(starting_cash: f64) -> Self {
        Self {
            portfolio: Portfolio::new(starting_cash),
            transactions: Vec::new(),
            watchlist: BTreeMap::new(),
        }
    }
}

/// The authoritative in-memory state, keyed by user id. Durable persistence
/// is a collaborator's concern; this is the single source of truth the
/// accounting engine mutates.
pub struct Store {
    users: DashMap<Uuid, User>,
    emails: DashMap<String, Uuid>,
    accounts: DashMap<Uuid, Account>,
}

impl Store {
    pub fn new() -> Self {
        Self {
            users: DashMap::new(),
            emails: DashMap::new(),
            accounts: DashMap::new(),
        }
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
