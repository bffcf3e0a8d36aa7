/// End-to-end tests for `GET /api/predict` and `GET /api/tickers`.
///
/// Every test pins "today" to 2024-06-15 so expected values are stable.
mod common;

use std::sync::Arc;

use async_trait::async_trait;
use axum::http::StatusCode;
use serde_json::json;

use common::{get_json, get_raw, pinned_date, test_app, test_config};
use seedcast_backend::app::create_app;
use seedcast_backend::config::{AppConfig, TickerPolicyKind};
use seedcast_backend::errors::INTERNAL_ERROR_MESSAGE;
use seedcast_backend::external::forecast_provider::{ForecastProvider, ForecastProviderError};
use seedcast_backend::external::simulated::{SimulatedForecastProvider, SimulatedPriceProvider};
use seedcast_backend::models::{Forecast, PricePoint};
use seedcast_backend::services::clock::FixedClock;
use seedcast_backend::services::prediction_service::PredictionService;
use seedcast_backend::services::ticker_policy::OpenPolicy;
use seedcast_backend::state::AppState;

/// Simulated forecasts with the last future day dropped
struct ShortForecastProvider;

#[async_trait]
impl ForecastProvider for ShortForecastProvider {
    async fn forecast(
        &self,
        ticker: &str,
        history: &[PricePoint],
        horizon_days: u32,
    ) -> Result<Forecast, ForecastProviderError> {
        let mut forecast = SimulatedForecastProvider
            .forecast(ticker, history, horizon_days)
            .await?;
        forecast.future.pop();
        Ok(forecast)
    }

    fn name(&self) -> &'static str {
        "short"
    }
}

#[tokio::test]
async fn test_predict_aapl_week() {
    let (status, body) = get_json(test_app(&test_config()), "/api/predict?ticker=AAPL&days=7").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ticker"], "AAPL");
    assert_eq!(body["forecastDays"], 7);

    let history = body["historicalData"].as_array().unwrap();
    assert_eq!(history.len(), 365);
    assert_eq!(history[0], json!({"ds": "2023-06-17", "y": 55.57}));
    assert_eq!(history[364], json!({"ds": "2024-06-15", "y": 71.08}));

    let table = body["futureForecastTableData"].as_array().unwrap();
    assert_eq!(table.len(), 7);
    assert_eq!(table[0], json!({"ds": "2024-06-16", "yhat": 70.89}));
    assert_eq!(table[6], json!({"ds": "2024-06-22", "yhat": 73.31}));
    assert_eq!(body["predictedPriceForLastDay"], table[6]["yhat"]);

    let full = body["fullForecastData"].as_array().unwrap();
    assert_eq!(full.len(), 372);
    assert_eq!(
        full[0],
        json!({"ds": "2023-06-17", "yhat": 54.46, "yhat_lower": 51.79, "yhat_upper": 56.39})
    );
    assert_eq!(
        full[371],
        json!({"ds": "2024-06-22", "yhat": 73.31, "yhat_lower": 62.5, "yhat_upper": 84.12})
    );

    assert_eq!(body["advice"], "HOLD (Neutral)");

    let backtest = body["backtestChartData"].as_array().unwrap();
    assert_eq!(backtest.len(), 7);
    assert_eq!(backtest[0], json!({"ds": "2024-06-09", "actual": 71.22, "predicted": 71.25}));
    assert_eq!(backtest[6], json!({"ds": "2024-06-15", "actual": 71.08, "predicted": 71.2}));

    let chart = body["mainChartData"].as_array().unwrap();
    assert_eq!(chart.len(), 372);
    assert_eq!(chart[364]["actual"], 71.08);
    assert!(chart[365].get("actual").is_none());
    assert_eq!(chart[365]["forecast"], 70.89);
}

#[tokio::test]
async fn test_advice_labels() {
    let config = AppConfig {
        ticker_policy: TickerPolicyKind::Open,
        ..test_config()
    };

    let (_, buy) = get_json(test_app(&config), "/api/predict?ticker=RELIANCE.NS&days=7").await;
    assert_eq!(buy["advice"], "BUY (Upward Trend)");

    let (_, sell) = get_json(test_app(&config), "/api/predict?ticker=T92&days=7").await;
    assert_eq!(sell["advice"], "SELL (Downward Trend)");
}

#[tokio::test]
async fn test_responses_are_byte_identical() {
    let cached = test_config();
    let uncached = AppConfig {
        cache_enabled: false,
        ..test_config()
    };

    let app = test_app(&cached);
    let (_, first) = get_raw(app.clone(), "/api/predict?ticker=MSFT&days=30").await;
    let (_, second) = get_raw(app, "/api/predict?ticker=MSFT&days=30").await;
    let (_, fresh) = get_raw(test_app(&uncached), "/api/predict?ticker=MSFT&days=30").await;

    assert_eq!(first, second);
    assert_eq!(first, fresh);
}

#[tokio::test]
async fn test_missing_parameters() {
    for uri in ["/api/predict", "/api/predict?ticker=AAPL", "/api/predict?days=7", "/api/predict?ticker=&days=7"] {
        let (status, body) = get_json(test_app(&test_config()), uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
        assert_eq!(body, json!({"error": "Missing ticker or days parameter"}));
    }
}

#[tokio::test]
async fn test_invalid_days() {
    let (status, body) = get_json(test_app(&test_config()), "/api/predict?ticker=AAPL&days=abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Invalid days parameter, must be an integer"}));

    let (status, body) = get_json(test_app(&test_config()), "/api/predict?ticker=AAPL&days=0").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Forecast days must be a positive integer"}));

    let (status, body) = get_json(test_app(&test_config()), "/api/predict?ticker=AAPL&days=-3").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Forecast days must be a positive integer"}));

    let (status, body) = get_json(test_app(&test_config()), "/api/predict?ticker=AAPL&days=3651").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Forecast days must not exceed 3650"}));
}

#[tokio::test]
async fn test_repeated_parameters_use_first_value() {
    let (status, body) =
        get_json(test_app(&test_config()), "/api/predict?ticker=AAPL&days=7&days=8").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["forecastDays"], 7);
    assert_eq!(body["futureForecastTableData"].as_array().unwrap().len(), 7);

    let (status, body) =
        get_json(test_app(&test_config()), "/api/predict?ticker=AAPL&ticker=MSFT&days=3").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ticker"], "AAPL");
    assert_eq!(body["historicalData"][364]["y"], 71.08);
}

#[tokio::test]
async fn test_malformed_query_still_returns_json_errors() {
    let (status, body) =
        get_json(test_app(&test_config()), "/api/predict?ticker=AAPL&days=abc&days=7").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Invalid days parameter, must be an integer"}));

    let (status, body) = get_json(test_app(&test_config()), "/api/predict?days&&=&ticker").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Missing ticker or days parameter"}));
}

#[tokio::test]
async fn test_inconsistent_forecast_returns_generic_500() {
    let state = AppState {
        predictions: PredictionService::new(
            Arc::new(SimulatedPriceProvider),
            Arc::new(ShortForecastProvider),
            Arc::new(OpenPolicy),
            None,
        ),
        clock: Arc::new(FixedClock::new(pinned_date())),
        max_forecast_days: 3650,
    };

    let (status, body) = get_json(create_app(state, &[]), "/api/predict?ticker=AAPL&days=7").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": INTERNAL_ERROR_MESSAGE}));
}

#[tokio::test]
async fn test_seeded_policy_rejects_some_unknown_tickers() {
    // ZZZZ hashes below the default 20% rejection rate; IBM does not.
    let (status, body) = get_json(test_app(&test_config()), "/api/predict?ticker=ZZZZ&days=7").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body,
        json!({"error": "Invalid ticker symbol: ZZZZ or no data found. Please try a known ticker."})
    );

    let (status, _) = get_json(test_app(&test_config()), "/api/predict?ticker=IBM&days=7").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_known_only_policy() {
    let config = AppConfig {
        ticker_policy: TickerPolicyKind::KnownOnly,
        ..test_config()
    };

    let (status, _) = get_json(test_app(&config), "/api/predict?ticker=IBM&days=7").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = get_json(test_app(&config), "/api/predict?ticker=nvda&days=7").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ticker"], "nvda");
}

#[tokio::test]
async fn test_ticker_is_case_sensitive_seed() {
    let (_, upper) = get_json(test_app(&test_config()), "/api/predict?ticker=AAPL&days=1").await;
    let (_, lower) = get_json(test_app(&test_config()), "/api/predict?ticker=aapl&days=1").await;
    assert_ne!(upper["historicalData"], lower["historicalData"]);
}

#[tokio::test]
async fn test_list_tickers() {
    let (status, body) = get_json(test_app(&test_config()), "/api/tickers").await;
    assert_eq!(status, StatusCode::OK);
    let tickers = body.as_array().unwrap();
    assert_eq!(tickers.len(), 10);
    assert_eq!(tickers[0], json!({"symbol": "AAPL", "name": "Apple Inc."}));
}

#[tokio::test]
async fn test_health() {
    let (status, body) = get_raw(test_app(&test_config()), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"OK");
}
