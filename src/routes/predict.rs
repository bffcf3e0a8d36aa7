use std::num::IntErrorKind;
use std::sync::Arc;

use axum::extract::{RawQuery, State};
use axum::routing::get;
use axum::{Json, Router};
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::PredictionResponse;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(predict))
}

/// Raw query parameters; validated by hand so each failure gets its own message
#[derive(Debug, Default)]
pub struct PredictQuery {
    pub ticker: Option<String>,
    pub days: Option<String>,
}

impl PredictQuery {
    /// Pick `ticker` and `days` out of a raw query string. The first occurrence
    /// of a repeated key wins; unknown keys are ignored.
    pub fn from_query_string(raw: &str) -> Self {
        let mut query = Self::default();
        for (key, value) in url::form_urlencoded::parse(raw.as_bytes()) {
            let slot = match &*key {
                "ticker" => &mut query.ticker,
                "days" => &mut query.days,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into_owned());
            }
        }
        query
    }
}

/// A request that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictRequest {
    pub ticker: String,
    pub days: u32,
}

/// Validate `ticker` and `days`.
///
/// Order matters: presence first, then integer syntax, then range.
pub fn validate_query(query: PredictQuery, max_days: u32) -> Result<PredictRequest, AppError> {
    let (ticker, raw_days) = match (query.ticker, query.days) {
        (Some(t), Some(d)) if !t.is_empty() && !d.is_empty() => (t, d),
        _ => {
            return Err(AppError::Validation(
                "Missing ticker or days parameter".to_string(),
            ))
        }
    };

    let too_many = || AppError::Validation(format!("Forecast days must not exceed {}", max_days));
    let not_positive =
        || AppError::Validation("Forecast days must be a positive integer".to_string());

    let days: i64 = match raw_days.trim().parse::<i64>() {
        Ok(days) => days,
        Err(e) => {
            return Err(match e.kind() {
                IntErrorKind::PosOverflow => too_many(),
                IntErrorKind::NegOverflow => not_positive(),
                _ => AppError::Validation(
                    "Invalid days parameter, must be an integer".to_string(),
                ),
            })
        }
    };

    if days <= 0 {
        return Err(not_positive());
    }
    if days > i64::from(max_days) {
        return Err(too_many());
    }

    Ok(PredictRequest {
        ticker,
        days: days as u32,
    })
}

/// GET /api/predict?ticker=AAPL&days=7
///
/// Simulated one-year history plus a `days`-long forecast, backtest and
/// trend advice for `ticker`.
pub async fn predict(
    RawQuery(raw_query): RawQuery,
    State(state): State<AppState>,
) -> Result<Json<Arc<PredictionResponse>>, AppError> {
    let query = PredictQuery::from_query_string(raw_query.as_deref().unwrap_or_default());
    let request_id = Uuid::new_v4();
    info!(
        "GET /api/predict [{}] - ticker={:?}, days={:?}",
        request_id, query.ticker, query.days
    );

    let request = validate_query(query, state.max_forecast_days).map_err(|e| {
        warn!("[{}] Rejected prediction request: {}", request_id, e);
        e
    })?;

    let today = state.clock.today();
    let response = state
        .predictions
        .predict(&request.ticker, request.days, today)
        .await
        .map_err(|e| {
            match &e {
                AppError::Internal(detail) => error!(
                    "[{}] Failed to generate prediction for {}: {}",
                    request_id, request.ticker, detail
                ),
                _ => warn!("[{}] Prediction for {} refused: {}", request_id, request.ticker, e),
            }
            e
        })?;

    Ok(Json(response))
}
