use std::sync::Arc;
use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::errors::AppError;
use crate::external::forecast_provider::ForecastProvider;
use crate::external::price_provider::PriceProvider;
use crate::models::{
    BacktestEntry, ChartEntry, Forecast, ForecastEntry, ForecastTableEntry, HistoricalEntry,
    PredictionResponse, PricePoint,
};
use crate::services::advice_service;
use crate::services::backtest_service;
use crate::services::market_simulator::HISTORY_DAYS;
use crate::services::prediction_cache::{PredictionCache, PredictionKey};
use crate::services::seeded_random::round2;
use crate::services::ticker_policy::{TickerPolicy, TickerVerdict};

/// Runs one prediction end to end: policy check, history, forecast,
/// backtest and advice, then assembles the wire response.
#[derive(Clone)]
pub struct PredictionService {
    price_provider: Arc<dyn PriceProvider>,
    forecast_provider: Arc<dyn ForecastProvider>,
    ticker_policy: Arc<dyn TickerPolicy>,
    cache: Option<PredictionCache>,
}

impl PredictionService {
    pub fn new(
        price_provider: Arc<dyn PriceProvider>,
        forecast_provider: Arc<dyn ForecastProvider>,
        ticker_policy: Arc<dyn TickerPolicy>,
        cache: Option<PredictionCache>,
    ) -> Self {
        Self {
            price_provider,
            forecast_provider,
            ticker_policy,
            cache,
        }
    }

    /// Generate the prediction for `ticker` over `days`, as of `today`.
    ///
    /// `today` must be captured once by the caller so that every series in
    /// the response agrees on the same calendar.
    pub async fn predict(
        &self,
        ticker: &str,
        days: u32,
        today: NaiveDate,
    ) -> Result<Arc<PredictionResponse>, AppError> {
        if self.ticker_policy.evaluate(ticker) == TickerVerdict::Rejected {
            warn!(
                "Ticker {} rejected by '{}' ticker policy",
                ticker,
                self.ticker_policy.name()
            );
            return Err(AppError::TickerNotFound(ticker.to_string()));
        }

        let key = PredictionKey::new(ticker, days, today);
        if let Some(cached) = self.cache.as_ref().and_then(|c| c.get(&key)) {
            debug!("Prediction cache hit for {} ({} days, {})", ticker, days, today);
            return Ok(cached);
        }

        let history = self
            .price_provider
            .fetch_daily_history(ticker, today, HISTORY_DAYS)
            .await?;

        let forecast = self
            .forecast_provider
            .forecast(ticker, &history, days)
            .await?;

        if forecast.hindcast.len() != history.len() || forecast.future.len() != days as usize {
            return Err(AppError::Internal(format!(
                "forecast provider '{}' returned {} hindcast / {} future points for {} history / {} days",
                self.forecast_provider.name(),
                forecast.hindcast.len(),
                forecast.future.len(),
                history.len(),
                days
            )));
        }

        let response = Arc::new(assemble_response(ticker, days, &history, &forecast));
        info!(
            "Prediction for {} ({} days): last close {:.2}, final forecast {:.2}, advice {}",
            ticker,
            days,
            history.last().map(|p| p.price).unwrap_or(0.0),
            response.predicted_price_for_last_day,
            response.advice
        );

        if let Some(cache) = &self.cache {
            cache.insert(key, Arc::clone(&response));
        }

        Ok(response)
    }
}

/// Build the wire response from a history and its forecast
pub fn assemble_response(
    ticker: &str,
    days: u32,
    history: &[PricePoint],
    forecast: &Forecast,
) -> PredictionResponse {
    let backtest = backtest_service::reconstruct_backtest(ticker, history);
    let advice = advice_service::classify(history, &forecast.future);

    let predicted_price_for_last_day = forecast
        .last_future()
        .map(|p| round2(p.yhat))
        .unwrap_or(0.0);

    PredictionResponse {
        ticker: ticker.to_string(),
        forecast_days: days,
        historical_data: history.iter().map(HistoricalEntry::from).collect(),
        full_forecast_data: forecast.full_series().map(ForecastEntry::from).collect(),
        future_forecast_table_data: forecast.future.iter().map(ForecastTableEntry::from).collect(),
        predicted_price_for_last_day,
        advice,
        backtest_chart_data: backtest.iter().map(BacktestEntry::from).collect(),
        main_chart_data: main_chart(history, forecast),
    }
}

/// History days paired with their hindcast, followed by the future band.
fn main_chart(history: &[PricePoint], forecast: &Forecast) -> Vec<ChartEntry> {
    history
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let fit = forecast.hindcast.get(i).filter(|f| f.date == point.date);
            ChartEntry::historical(point, fit)
        })
        .chain(forecast.future.iter().map(ChartEntry::projected))
        .collect()
}
