use chrono::{Duration, NaiveDate};
use tracing::debug;

use crate::models::PricePoint;
use crate::services::seeded_random::{round2, seeded_random, HISTORY_SALT, SEED_PRICE_SALT};

/// Length of the simulated history, one point per calendar day.
pub const HISTORY_DAYS: u32 = 365;

const SEED_PRICE_RANGE: f64 = 300.0;
const SEED_PRICE_BASE: f64 = 50.0;
const DAILY_VOLATILITY: f64 = 0.05;
/// Slightly below 0.5 so the walk drifts upward over a year.
const HISTORY_BIAS: f64 = 0.49;
pub(crate) const PRICE_FLOOR: f64 = 1.0;

/// Simulated year of daily closes for `ticker`, ending on `today` inclusive.
pub fn generate_history(ticker: &str, today: NaiveDate) -> Vec<PricePoint> {
    generate_history_window(ticker, today, HISTORY_DAYS)
}

/// Biased random walk of `days` daily closes ending on `end`.
///
/// Weekends are not skipped. The walk itself runs unrounded; only emitted
/// prices are rounded to cents. Prices never fall below 1.
pub fn generate_history_window(ticker: &str, end: NaiveDate, days: u32) -> Vec<PricePoint> {
    if days == 0 {
        return Vec::new();
    }

    let start = end - Duration::days(i64::from(days) - 1);
    let mut price = seeded_random(ticker, SEED_PRICE_SALT) * SEED_PRICE_RANGE + SEED_PRICE_BASE;
    debug!("Seed price for {} is {:.4}", ticker, price);

    (0..days)
        .map(|i| {
            let change = (seeded_random(ticker, i + HISTORY_SALT) - HISTORY_BIAS)
                * (price * DAILY_VOLATILITY);
            price = (price + change).max(PRICE_FLOOR);
            PricePoint::new(start + Duration::days(i64::from(i)), round2(price))
        })
        .collect()
}
