use uuid::Uuid;

use crate::errors::AppError;
use crate::models::{FundsReceipt, FundsRequest, Transaction, TransactionKind};
use crate::store::Store;

pub fn deposit(store: &Store, user_id: Uuid, input: FundsRequest) -> Result<FundsReceipt, AppError> {
    apply(store, user_id, input.amount, TransactionKind::Deposit)
}

pub fn withdraw(
    store: &Store,
    user_id: Uuid,
    input: FundsRequest,
) -> Result<FundsReceipt, AppError> {
    apply(store, user_id, input.amount, TransactionKind::Withdrawal)
}

fn apply(
    store: &Store,
    user_id: Uuid,
    amount: f64,
    kind: TransactionKind,
) -> Result<FundsReceipt, AppError> {
    store.with_account_mut(user_id, |acct| {
        let cash_balance = match kind {
            TransactionKind::Deposit => acct.portfolio.deposit(amount)?,
            TransactionKind::Withdrawal => acct.portfolio.withdraw(amount)?,
            TransactionKind::Buy | TransactionKind::Sell => {
                return Err(AppError::Validation("Not a cash flow operation".into()))
            }
        };
        let record = Transaction::cash_flow(user_id, kind, amount);
        let transaction_id = record.id;
        acct.transactions.push(record);
        Ok(FundsReceipt {
            transaction_id,
            amount,
            cash_balance,
        })
    })?
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::EngineError;
    use crate::models::User;

    fn seeded_store(cash: f64) -> (Store, Uuid) {
        let store = Store::new();
        let user = User::new("T".into(), "t@example.com".into(), "1".into(), "h".into());
        let id = user.id;
        store.insert_user(user, cash).unwrap();
        (store, id)
    }

    #[test]
    fn test_deposit_credits_and_logs() {
        let (store, user_id) = seeded_store(0.0);
        let receipt = deposit(&store, user_id, FundsRequest { amount: 2500.0 }).unwrap();
        assert!((receipt.cash_balance - 2500.0).abs() < 1e-9);
        store
            .with_account(user_id, |acct| {
                assert_eq!(acct.transactions.len(), 1);
                assert_eq!(acct.transactions[0].kind, TransactionKind::Deposit);
            })
            .unwrap();
    }

    #[test]
    fn test_invalid_amount_and_overdraw_are_rejected() {
        let (store, user_id) = seeded_store(100.0);
        assert!(matches!(
            deposit(&store, user_id, FundsRequest { amount: -50.0 }).unwrap_err(),
            AppError::Engine(EngineError::InvalidAmount)
        ));
        assert!(matches!(
            withdraw(&store, user_id, FundsRequest { amount: 500.0 }).unwrap_err(),
            AppError::Engine(EngineError::InsufficientFunds { .. })
        ));
        // Failed operations leave no record behind.
        store
            .with_account(user_id, |acct| assert!(acct.transactions.is_empty()))
            .unwrap();
    }

    #[test]
    fn test_trade_kinds_are_rejected_as_cash_flows() {
        let (store, user_id) = seeded_store(100.0);
        let err = apply(&store, user_id, 50.0, TransactionKind::Buy).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        store
            .with_account(user_id, |acct| {
                assert!((acct.portfolio.cash_balance - 100.0).abs() < 1e-9);
                assert!(acct.transactions.is_empty());
            })
            .unwrap();
    }
}
