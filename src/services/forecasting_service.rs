use chrono::Duration;
use tracing::debug;

use crate::models::{Forecast, ForecastPoint, PricePoint};
use crate::services::market_simulator::PRICE_FLOOR;
use crate::services::seeded_random::{round2, seeded_random, FUTURE_SALT, HINDCAST_SALT};

const HINDCAST_NOISE: f64 = 0.05;
const HINDCAST_BAND_BASE: f64 = 0.03;
const HINDCAST_BAND_SPREAD: f64 = 0.05;

const FUTURE_VOLATILITY: f64 = 0.03;
/// Stronger upward tilt than the history walk; forecasts skew optimistic.
const FUTURE_BIAS: f64 = 0.48;
const FUTURE_BAND_BASE: f64 = 0.05;
const FUTURE_BAND_SPREAD: f64 = 0.10;

/// Generate both the hindcast and the future forecast for `ticker`
pub fn generate_forecast(ticker: &str, history: &[PricePoint], horizon_days: u32) -> Forecast {
    let forecast = Forecast {
        hindcast: generate_hindcast(ticker, history),
        future: generate_future(ticker, history, horizon_days),
    };

    debug!(
        "Generated forecast for {}: {} hindcast points, {} future points",
        ticker,
        forecast.hindcast.len(),
        forecast.future.len()
    );

    forecast
}

/// Simulated model fit over the historical window, one point per history day.
///
/// Each point perturbs the actual close by up to ±2.5% and gets an
/// asymmetric 3-8% band on either side.
pub fn generate_hindcast(ticker: &str, history: &[PricePoint]) -> Vec<ForecastPoint> {
    history
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let i = i as u32;
            let noise = (seeded_random(ticker, i + HINDCAST_SALT) - 0.5)
                * (point.price * HINDCAST_NOISE);
            let yhat = round2(point.price + noise);
            let lower_pct =
                HINDCAST_BAND_BASE + seeded_random(ticker, i + HINDCAST_SALT + 1) * HINDCAST_BAND_SPREAD;
            let upper_pct =
                HINDCAST_BAND_BASE + seeded_random(ticker, i + HINDCAST_SALT + 2) * HINDCAST_BAND_SPREAD;

            ForecastPoint {
                date: point.date,
                yhat,
                yhat_lower: round2(yhat * (1.0 - lower_pct)),
                yhat_upper: round2(yhat * (1.0 + upper_pct)),
            }
        })
        .collect()
}

/// Forward walk of `horizon_days` daily forecasts starting the day after the
/// last historical close. Bands are symmetric, 5-15% wide.
pub fn generate_future(ticker: &str, history: &[PricePoint], horizon_days: u32) -> Vec<ForecastPoint> {
    let Some(last) = history.last() else {
        return Vec::new();
    };

    let mut price = last.price;
    (0..horizon_days)
        .map(|i| {
            let trend = (seeded_random(ticker, i + FUTURE_SALT) - FUTURE_BIAS)
                * (price * FUTURE_VOLATILITY);
            price = (price + trend).max(PRICE_FLOOR);

            let yhat = round2(price);
            let band = FUTURE_BAND_BASE + seeded_random(ticker, i + FUTURE_SALT + 1) * FUTURE_BAND_SPREAD;

            ForecastPoint {
                date: last.date + Duration::days(i64::from(i) + 1),
                yhat,
                yhat_lower: round2(yhat * (1.0 - band)),
                yhat_upper: round2(yhat * (1.0 + band)),
            }
        })
        .collect()
}
