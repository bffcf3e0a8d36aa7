use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// Actual vs simulated prediction for one of the trailing history days.
// `predicted` is kept unrounded; rounding happens when the response is built.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BacktestPoint {
    pub date: NaiveDate,
    pub actual: f64,
    pub predicted: f64,
}
