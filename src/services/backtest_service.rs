use crate::models::{BacktestPoint, PricePoint};
use crate::services::seeded_random::{seeded_random, HINDCAST_SALT};

/// Number of trailing history days shown in the backtest chart.
pub const BACKTEST_DAYS: usize = 7;

// Tighter than the hindcast noise so the backtest reads closer to actuals.
const BACKTEST_NOISE: f64 = 0.02;

/// Simulated predictions for the trailing `BACKTEST_DAYS` of `history`.
///
/// Salts use each point's index in the full history, not its position in the
/// tail, and share the hindcast salt family.
pub fn reconstruct_backtest(ticker: &str, history: &[PricePoint]) -> Vec<BacktestPoint> {
    let start = history.len().saturating_sub(BACKTEST_DAYS);

    history[start..]
        .iter()
        .enumerate()
        .map(|(offset, point)| {
            let index = (start + offset) as u32;
            let noise = (seeded_random(ticker, index + HINDCAST_SALT) - 0.5)
                * (point.price * BACKTEST_NOISE);

            BacktestPoint {
                date: point.date,
                actual: point.price,
                predicted: point.price + noise,
            }
        })
        .collect()
}
