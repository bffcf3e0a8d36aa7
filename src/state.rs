use std::sync::Arc;

use crate::config::{AppConfig, ForecastProviderKind, HistoryProviderKind, TickerPolicyKind};
use crate::external::forecast_provider::ForecastProvider;
use crate::external::price_provider::PriceProvider;
use crate::external::simulated::{SimulatedForecastProvider, SimulatedPriceProvider};
use crate::services::clock::{Clock, FixedClock, SystemClock};
use crate::services::prediction_cache::PredictionCache;
use crate::services::prediction_service::PredictionService;
use crate::services::ticker_policy::{
    KnownOnlyPolicy, OpenPolicy, SeededRejectionPolicy, TickerPolicy,
};

#[derive(Clone)]
pub struct AppState {
    pub predictions: PredictionService,
    pub clock: Arc<dyn Clock>,
    pub max_forecast_days: u32,
}

impl AppState {
    /// Wire providers, policy, cache and clock as selected by `config`.
    pub fn from_config(config: &AppConfig) -> Self {
        let price_provider: Arc<dyn PriceProvider> = match config.history_provider {
            HistoryProviderKind::Simulated => Arc::new(SimulatedPriceProvider),
        };

        let forecast_provider: Arc<dyn ForecastProvider> = match config.forecast_provider {
            ForecastProviderKind::Simulated => Arc::new(SimulatedForecastProvider),
        };

        let ticker_policy: Arc<dyn TickerPolicy> = match config.ticker_policy {
            TickerPolicyKind::Open => Arc::new(OpenPolicy),
            TickerPolicyKind::KnownOnly => Arc::new(KnownOnlyPolicy),
            TickerPolicyKind::Seeded => {
                Arc::new(SeededRejectionPolicy::new(config.ticker_rejection_rate))
            }
        };

        let clock: Arc<dyn Clock> = match config.simulation_date {
            Some(date) => Arc::new(FixedClock::new(date)),
            None => Arc::new(SystemClock),
        };

        let cache = config
            .cache_enabled
            .then(|| PredictionCache::new(config.cache_capacity, config.cache_max_points));

        Self {
            predictions: PredictionService::new(price_provider, forecast_provider, ticker_policy, cache),
            clock,
            max_forecast_days: config.max_forecast_days,
        }
    }
}
