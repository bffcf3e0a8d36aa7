use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{Advice, BacktestPoint, ForecastPoint, PricePoint};
use crate::services::seeded_random::round2;

/// Full response for `GET /api/predict`.
///
/// Field names follow the wire format expected by existing chart clients,
/// which is why the entry types mix camelCase and snake_case keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResponse {
    pub ticker: String,
    pub forecast_days: u32,
    pub historical_data: Vec<HistoricalEntry>,
    pub full_forecast_data: Vec<ForecastEntry>,
    pub future_forecast_table_data: Vec<ForecastTableEntry>,
    pub predicted_price_for_last_day: f64,
    pub advice: Advice,
    pub backtest_chart_data: Vec<BacktestEntry>,
    pub main_chart_data: Vec<ChartEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalEntry {
    pub ds: String,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastEntry {
    pub ds: String,
    pub yhat: f64,
    pub yhat_lower: f64,
    pub yhat_upper: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastTableEntry {
    pub ds: String,
    pub yhat: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BacktestEntry {
    pub ds: String,
    pub actual: f64,
    pub predicted: f64,
}

/// Merged point for the main chart: history days carry the actual close and
/// the hindcast band, future days carry only the forecast band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartEntry {
    pub ds: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forecast: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lower_bound: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upper_bound: Option<f64>,
}

pub fn format_ds(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

impl From<&PricePoint> for HistoricalEntry {
    fn from(point: &PricePoint) -> Self {
        Self {
            ds: format_ds(point.date),
            y: round2(point.price),
        }
    }
}

impl From<&ForecastPoint> for ForecastEntry {
    fn from(point: &ForecastPoint) -> Self {
        Self {
            ds: format_ds(point.date),
            yhat: round2(point.yhat),
            yhat_lower: round2(point.yhat_lower),
            yhat_upper: round2(point.yhat_upper),
        }
    }
}

impl From<&ForecastPoint> for ForecastTableEntry {
    fn from(point: &ForecastPoint) -> Self {
        Self {
            ds: format_ds(point.date),
            yhat: round2(point.yhat),
        }
    }
}

impl From<&BacktestPoint> for BacktestEntry {
    fn from(point: &BacktestPoint) -> Self {
        Self {
            ds: format_ds(point.date),
            actual: round2(point.actual),
            predicted: round2(point.predicted),
        }
    }
}

impl ChartEntry {
    pub fn historical(point: &PricePoint, fit: Option<&ForecastPoint>) -> Self {
        Self {
            ds: format_ds(point.date),
            actual: Some(round2(point.price)),
            forecast: fit.map(|f| round2(f.yhat)),
            lower_bound: fit.map(|f| round2(f.yhat_lower)),
            upper_bound: fit.map(|f| round2(f.yhat_upper)),
        }
    }

    pub fn projected(point: &ForecastPoint) -> Self {
        Self {
            ds: format_ds(point.date),
            actual: None,
            forecast: Some(round2(point.yhat)),
            lower_bound: Some(round2(point.yhat_lower)),
            upper_bound: Some(round2(point.yhat_upper)),
        }
    }
}
