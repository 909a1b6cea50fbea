pub(crate) mod auth;
pub(crate) mod funds;
pub(crate) mod health;
pub(crate) mod market;
pub(crate) mod orders;
pub(crate) mod portfolio;
pub(crate) mod recommendations;
pub(crate) mod users;
pub(crate) mod watchlist;
