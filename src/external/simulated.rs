use async_trait::async_trait;
use chrono::NaiveDate;

use crate::external::forecast_provider::{ForecastProvider, ForecastProviderError};
use crate::external::price_provider::{PriceProvider, PriceProviderError};
use crate::models::{Forecast, PricePoint};
use crate::services::{forecasting_service, market_simulator};

/// Deterministic price history derived from the ticker alone.
#[derive(Debug, Default, Clone)]
pub struct SimulatedPriceProvider;

#[async_trait]
impl PriceProvider for SimulatedPriceProvider {
    async fn fetch_daily_history(
        &self,
        ticker: &str,
        end: NaiveDate,
        days: u32,
    ) -> Result<Vec<PricePoint>, PriceProviderError> {
        let history = market_simulator::generate_history_window(ticker, end, days);
        if history.is_empty() {
            return Err(PriceProviderError::NoData(ticker.to_string()));
        }
        Ok(history)
    }

    fn name(&self) -> &'static str {
        "simulated"
    }
}

/// Deterministic stand-in for a statistical forecasting model.
#[derive(Debug, Default, Clone)]
pub struct SimulatedForecastProvider;

#[async_trait]
impl ForecastProvider for SimulatedForecastProvider {
    async fn forecast(
        &self,
        ticker: &str,
        history: &[PricePoint],
        horizon_days: u32,
    ) -> Result<Forecast, ForecastProviderError> {
        if history.is_empty() {
            return Err(ForecastProviderError::InsufficientHistory {
                required: 1,
                actual: 0,
            });
        }
        Ok(forecasting_service::generate_forecast(ticker, history, horizon_days))
    }

    fn name(&self) -> &'static str {
        "simulated"
    }
}
