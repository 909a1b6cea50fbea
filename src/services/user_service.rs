use uuid::Uuid;

use crate::auth::{self, AuthKeys};
use crate::errors::AppError;
use crate::external::QuoteSource;
use crate::models::{AuthResponse, LoginRequest, RegisterRequest, User, UserProfile, UserView};
use crate::store::Store;

pub fn register(
    store: &Store,
    keys: &AuthKeys,
    starting_cash: f64,
    input: RegisterRequest,
) -> Result<AuthResponse, AppError> {
    if input.name.trim().is_empty()
        || input.email.trim().is_empty()
        || input.phone.trim().is_empty()
        || input.password.is_empty()
    {
        return Err(AppError::Validation("All fields are required".into()));
    }
    if !input.email.contains('@') {
        return Err(AppError::Validation("Invalid email address".into()));
    }

    let password_hash = auth::hash_password(&input.password)?;
    let user = User::new(
        input.name.trim().to_string(),
        input.email.trim().to_lowercase(),
        input.phone.trim().to_string(),
        password_hash,
    );

    store.insert_user(user.clone(), starting_cash)?;
    let token = keys.issue_token(&user)?;

    Ok(AuthResponse {
        token,
        user: UserView {
            id: user.id,
            name: user.name,
            email: user.email,
            phone: user.phone,
            cash_balance: starting_cash,
        },
    })
}

pub fn login(store: &Store, keys: &AuthKeys, input: LoginRequest) -> Result<AuthResponse, AppError> {
    if input.email.trim().is_empty() || input.password.is_empty() {
        return Err(AppError::Validation("Email and password are required".into()));
    }

    let user = store
        .user_by_email(&input.email)
        .ok_or(AppError::Unauthorized)?;
    if !auth::verify_password(&input.password, &user.password_hash) {
        return Err(AppError::Unauthorized);
    }

    let token = keys.issue_token(&user)?;
    let cash_balance = store.with_account(user.id, |acct| acct.portfolio.cash_balance)?;

    Ok(AuthResponse {
        token,
        user: UserView {
            id: user.id,
            name: user.name,
            email: user.email,
            phone: user.phone,
            cash_balance,
        },
    })
}

pub async fn profile(
    store: &Store,
    quotes: &dyn QuoteSource,
    user_id: Uuid,
) -> Result<UserProfile, AppError> {
    let user = store.user(user_id).ok_or(AppError::NotFound("User".into()))?;

    let prices = super::price_map(quotes).await;
    let (totals, cash_balance) = store.with_account_mut(user_id, |acct| {
        acct.portfolio.revalue(|s| prices.get(s).copied());
        (acct.portfolio.summary(), acct.portfolio.cash_balance)
    })?;

    Ok(UserProfile {
        id: user.id,
        name: user.name,
        email: user.email,
        phone: user.phone,
        cash_balance,
        portfolio_value: totals.current_value,
        total_invested: totals.total_invested,
    })
}
