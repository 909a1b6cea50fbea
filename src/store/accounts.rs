use uuid::Uuid;

use super::{Account, Store, StoreError};

impl Store {
    /// Read access to an account under its shard read lock.
    pub fn with_account<R>(
        &self,
        user_id: Uuid,
        f: impl FnOnce(&Account) -> R,
    ) -> Result<R, StoreError> {
        self.accounts
            .get(&user_id)
            .map(|acct| f(&*acct))
            .ok_or(StoreError::AccountNotFound)
    }

    /// Exclusive access to an account. The closure runs while holding the
    /// entry's write guard, which is what makes an engine mutation and its
    /// transaction-log append atomic with respect to other writers for the
    /// same user. Callers must not await while inside.
    pub fn with_account_mut<R>(
        &self,
        user_id: Uuid,
        f: impl FnOnce(&mut Account) -> R,
    ) -> Result<R, StoreError> {
        self.accounts
            .get_mut(&user_id)
            .map(|mut acct| f(&mut *acct))
            .ok_or(StoreError::AccountNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::User;

    #[test]
    fn test_missing_account_is_reported() {
        let store = Store::new();
        let err = store.with_account(Uuid::new_v4(), |_| ()).unwrap_err();
        assert!(matches!(err, StoreError::AccountNotFound));
    }

    #[test]
    fn test_mutation_and_log_append_are_visible_together() {
        let store = Store::new();
        let user = User::new("R".into(), "r@example.com".into(), "1".into(), "h".into());
        let id = user.id;
        store.insert_user(user, 10_000.0).unwrap();

        store
            .with_account_mut(id, |acct| {
                let fill = acct.portfolio.apply_buy("TCS", 2, 3500.0).unwrap();
                acct.transactions.push(crate::models::Transaction::trade(
                    id,
                    crate::models::TransactionKind::Buy,
                    &fill,
                ));
            })
            .unwrap();

        store
            .with_account(id, |acct| {
                assert_eq!(acct.transactions.len(), 1);
                assert_eq!(acct.portfolio.positions["TCS"].quantity, 2);
                assert!((acct.portfolio.cash_balance - 3000.0).abs() < 1e-9);
            })
            .unwrap();
    }
}
