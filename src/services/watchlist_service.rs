use chrono::Utc;
use uuid::Uuid;

use crate::errors::AppError;
use crate::external::{QuoteError, QuoteSource};
use crate::models::{WatchlistEntry, WatchlistResponse};
use crate::store::Store;

/// Watch a symbol. The symbol must exist in the catalog, and watching it
/// twice is rejected rather than silently deduplicated.
pub async fn add(
    store: &Store,
    quotes: &dyn QuoteSource,
    user_id: Uuid,
    symbol: &str,
) -> Result<WatchlistResponse, AppError> {
    let instrument = quotes
        .instrument(symbol)
        .ok_or_else(|| AppError::Quote(QuoteError::SymbolNotFound(symbol.to_uppercase())))?;

    store.with_account_mut(user_id, |acct| {
        if acct.watchlist.contains_key(&instrument.symbol) {
            return Err(AppError::Validation("Already in watchlist".into()));
        }
        acct.watchlist.insert(instrument.symbol.clone(), Utc::now());
        Ok(())
    })??;

    list(store, quotes, user_id).await
}

pub async fn remove(
    store: &Store,
    quotes: &dyn QuoteSource,
    user_id: Uuid,
    symbol: &str,
) -> Result<WatchlistResponse, AppError> {
    let symbol = symbol.to_uppercase();
    store.with_account_mut(user_id, |acct| {
        acct.watchlist
            .remove(&symbol)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(format!("Watched symbol {symbol}")))
    })??;

    list(store, quotes, user_id).await
}

/// The watchlist joined with fresh quotes, in symbol order.
pub async fn list(
    store: &Store,
    quotes: &dyn QuoteSource,
    user_id: Uuid,
) -> Result<WatchlistResponse, AppError> {
    let watched = store.with_account(user_id, |acct| acct.watchlist.clone())?;

    let mut entries = Vec::with_capacity(watched.len());
    for (symbol, added_at) in watched {
        let Some(instrument) = quotes.instrument(&symbol) else {
            continue;
        };
        let quote = quotes.quote(&symbol).await?;
        entries.push(WatchlistEntry::from_parts(&instrument, &quote, added_at));
    }

    Ok(WatchlistResponse {
        count: entries.len(),
        entries,
    })
}
