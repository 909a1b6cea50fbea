use uuid::Uuid;

use crate::errors::AppError;
use crate::external::QuoteSource;
use crate::models::{
    HistoryParams, HistoryResponse, OrderReceipt, OrderRequest, Transaction, TransactionKind,
};
use crate::store::Store;

const DEFAULT_HISTORY_LIMIT: usize = 50;

/// Execute a buy at the quote source's current price. The quote is fetched
/// before the account lock is taken; the portfolio mutation and the BUY
/// record append then happen atomically under the lock.
pub async fn buy(
    store: &Store,
    quotes: &dyn QuoteSource,
    user_id: Uuid,
    input: OrderRequest,
) -> Result<OrderReceipt, AppError> {
    let quote = quotes.quote(&input.symbol).await?;

    store.with_account_mut(user_id, |acct| {
        let fill = acct
            .portfolio
            .apply_buy(&quote.symbol, input.quantity, quote.price)?;
        let record = Transaction::trade(user_id, TransactionKind::Buy, &fill);
        let order_id = record.id;
        acct.transactions.push(record);
        Ok(OrderReceipt {
            order_id,
            fill,
            cash_balance: acct.portfolio.cash_balance,
        })
    })?
}

/// Execute a sell at the quote source's current price. Same locking shape
/// as `buy`; the SELL record carries the realized P&L of the fill.
pub async fn sell(
    store: &Store,
    quotes: &dyn QuoteSource,
    user_id: Uuid,
    input: OrderRequest,
) -> Result<OrderReceipt, AppError> {
    let quote = quotes.quote(&input.symbol).await?;

    store.with_account_mut(user_id, |acct| {
        let fill = acct
            .portfolio
            .apply_sell(&quote.symbol, input.quantity, quote.price)?;
        let record = Transaction::trade(user_id, TransactionKind::Sell, &fill);
        let order_id = record.id;
        acct.transactions.push(record);
        Ok(OrderReceipt {
            order_id,
            fill,
            cash_balance: acct.portfolio.cash_balance,
        })
    })?
}

/// Newest-first page of the account's transaction log.
pub fn history(
    store: &Store,
    user_id: Uuid,
    params: HistoryParams,
) -> Result<HistoryResponse, AppError> {
    let limit = params.limit.unwrap_or(DEFAULT_HISTORY_LIMIT).max(1);
    let page = params.page.unwrap_or(1).max(1);

    store.with_account(user_id, |acct| {
        let total = acct.transactions.len();
        let transactions: Vec<_> = acct
            .transactions
            .iter()
            .rev()
            .skip((page - 1).saturating_mul(limit))
            .take(limit)
            .cloned()
            .collect();
        HistoryResponse {
            count: transactions.len(),
            total,
            page,
            pages: total.div_ceil(limit),
            transactions,
        }
    })
    .map_err(AppError::from)
}
