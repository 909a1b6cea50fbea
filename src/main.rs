use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use papertrade_backend::app::create_app;
use papertrade_backend::config::AppConfig;
use papertrade_backend::external::{QuoteSource, SimulatedQuoteSource, StaticQuoteSource};
use papertrade_backend::logging::{init_logging, LoggingConfig};
use papertrade_backend::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    init_logging(LoggingConfig::from_env())
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))?;

    let config = AppConfig::from_env();
    config.validate().map_err(anyhow::Error::msg)?;

    let quotes: Arc<dyn QuoteSource> = match config.quote_source.to_lowercase().as_str() {
        "static" => {
            tracing::info!("Using quote source: static catalog prices");
            Arc::new(StaticQuoteSource::new())
        }
        _ => {
            tracing::info!("Using quote source: simulated random walk");
            Arc::new(SimulatedQuoteSource::new())
        }
    };

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let state = AppState::new(config, quotes);
    let app = create_app(state);

    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("papertrade backend running at http://{}/", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
