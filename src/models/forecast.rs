use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Single point in a forecast time series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub date: NaiveDate,
    pub yhat: f64,
    pub yhat_lower: f64,
    pub yhat_upper: f64,
}

/// Output of a forecast provider.
///
/// `hindcast` is aligned one-to-one with the history the forecast was fitted
/// on; `future` covers the requested horizon, starting the day after the
/// last historical date.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    pub hindcast: Vec<ForecastPoint>,
    pub future: Vec<ForecastPoint>,
}

impl Forecast {
    /// Hindcast followed by the future series, in date order.
    pub fn full_series(&self) -> impl Iterator<Item = &ForecastPoint> {
        self.hindcast.iter().chain(self.future.iter())
    }

    pub fn last_future(&self) -> Option<&ForecastPoint> {
        self.future.last()
    }
}
