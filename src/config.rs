#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub jwt_secret: String,
    pub token_ttl_days: i64,
    pub starting_cash: f64,
    pub quote_source: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5000),
            jwt_secret: std::env::var("JWT_SECRET")
                .unwrap_or_else(|_| "dev-secret-change-in-production".to_string()),
            token_ttl_days: std::env::var("TOKEN_TTL_DAYS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(7),
            // New accounts start with 1,00,000 of virtual cash.
            starting_cash: std::env::var("STARTING_CASH")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(100_000.0),
            quote_source: std::env::var("QUOTE_SOURCE")
                .unwrap_or_else(|_| "simulated".to_string()),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.jwt_secret.is_empty() {
            return Err("JWT_SECRET must not be empty".to_string());
        }
        if self.starting_cash < 0.0 {
            return Err("STARTING_CASH must not be negative".to_string());
        }
        match self.quote_source.to_lowercase().as_str() {
            "simulated" | "static" => Ok(()),
            other => Err(format!(
                "Invalid QUOTE_SOURCE: {other}. Must be 'simulated' or 'static'"
            )),
        }
    }
}
