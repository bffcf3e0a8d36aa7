use anyhow::Context;
use tokio::net::TcpListener;

use seedcast_backend::app;
use seedcast_backend::config::AppConfig;
use seedcast_backend::logging::{init_logging, LoggingConfig};
use seedcast_backend::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging FIRST
    init_logging(LoggingConfig::from_env())
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {}", e))?;

    let config = AppConfig::from_env().context("invalid configuration")?;
    tracing::info!(
        "📊 Providers: history={:?}, forecast={:?}; ticker policy {:?} (rejection rate {}); cache {}",
        config.history_provider,
        config.forecast_provider,
        config.ticker_policy,
        config.ticker_rejection_rate,
        if config.cache_enabled { "on" } else { "off" }
    );
    if let Some(date) = config.simulation_date {
        tracing::info!("📅 Simulation date pinned to {}", date);
    }

    let state = AppState::from_config(&config);
    let app = app::create_app(state, &config.cors_origins);

    let addr = config.socket_addr()?;
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    tracing::info!("🚀 Seedcast backend running at http://{}/", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
