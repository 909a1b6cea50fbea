use uuid::Uuid;

use super::{Account, Store, StoreError};
use crate::models::User;

impl Store {
    /// Register a user and seed their account. Email uniqueness is claimed
    /// through the email index entry, so two concurrent registrations of the
    /// same address cannot both succeed.
    pub fn insert_user(&self, user: User, starting_cash: f64) -> Result<(), StoreError> {
        let email = user.email.to_lowercase();
        match self.emails.entry(email) {
            dashmap::mapref::entry::Entry::Occupied(_) => Err(StoreError::DuplicateEmail),
            dashmap::mapref::entry::Entry::Vacant(slot) => {
                slot.insert(user.id);
                self.accounts.insert(user.id, Account::new(starting_cash));
                self.users.insert(user.id, user);
                Ok(())
            }
        }
    }

    pub fn user_by_email(&self, email: &str) -> Option<User> {
        let id = *self.emails.get(&email.to_lowercase())?;
        self.user(id)
    }

    pub fn user(&self, id: Uuid) -> Option<User> {
        self.users.get(&id).map(|u| u.value().clone())
    }
}
