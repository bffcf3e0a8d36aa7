use crate::models::{Advice, ForecastPoint, PricePoint};

/// Number of leading future points averaged for the near-term outlook.
pub const NEAR_TERM_DAYS: usize = 7;
/// Relative move required before leaving HOLD, in either direction.
pub const TREND_THRESHOLD: f64 = 0.03;

/// Relative change between the near-term average forecast and the last
/// actual close. Degenerate inputs (no history, no forecast, zero close)
/// count as no change.
pub fn near_term_change(history: &[PricePoint], future: &[ForecastPoint]) -> f64 {
    let Some(last) = history.last() else {
        return 0.0;
    };
    if last.price == 0.0 || future.is_empty() {
        return 0.0;
    }

    let window = &future[..future.len().min(NEAR_TERM_DAYS)];
    let average = window.iter().map(|p| p.yhat).sum::<f64>() / window.len() as f64;

    (average - last.price) / last.price
}

/// Three-way trend signal; exactly ±3% is still HOLD.
pub fn classify(history: &[PricePoint], future: &[ForecastPoint]) -> Advice {
    let change = near_term_change(history, future);

    if change > TREND_THRESHOLD {
        Advice::Buy
    } else if change < -TREND_THRESHOLD {
        Advice::Sell
    } else {
        Advice::Hold
    }
}
