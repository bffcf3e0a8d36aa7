use async_trait::async_trait;
use thiserror::Error;

use crate::models::{Forecast, PricePoint};

#[derive(Debug, Error)]
pub enum ForecastProviderError {
    #[error("insufficient history: need at least {required} points, got {actual}")]
    InsufficientHistory { required: usize, actual: usize },

    #[error("forecast failed: {0}")]
    Failed(String),
}

/// Anything that turns a price history and a horizon into a forecast with
/// confidence bounds: a statistical model, a remote service, or the seeded
/// simulator.
#[async_trait]
pub trait ForecastProvider: Send + Sync {
    async fn forecast(
        &self,
        ticker: &str,
        history: &[PricePoint],
        horizon_days: u32,
    ) -> Result<Forecast, ForecastProviderError>;

    fn name(&self) -> &'static str;
}
