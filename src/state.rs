use std::sync::Arc;

use crate::auth::AuthKeys;
use crate::config::AppConfig;
use crate::external::QuoteSource;
use crate::store::Store;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Store>,
    pub quotes: Arc<dyn QuoteSource>,
    pub auth: Arc<AuthKeys>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(config: AppConfig, quotes: Arc<dyn QuoteSource>) -> Self {
        let auth = Arc::new(AuthKeys::new(&config.jwt_secret, config.token_ttl_days));
        Self {
            store: Arc::new(Store::new()),
            quotes,
            auth,
            config: Arc::new(config),
        }
    }
}
