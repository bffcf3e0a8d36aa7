//! Shared helpers for the HTTP and simulator integration tests.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use chrono::NaiveDate;
use serde_json::Value;
use tower::ServiceExt;

use seedcast_backend::app::create_app;
use seedcast_backend::config::AppConfig;
use seedcast_backend::state::AppState;

#[allow(dead_code)]
pub fn pinned_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
}

/// Default configuration with "today" pinned
#[allow(dead_code)]
pub fn test_config() -> AppConfig {
    AppConfig {
        simulation_date: Some(pinned_date()),
        ..AppConfig::default()
    }
}

#[allow(dead_code)]
pub fn test_app(config: &AppConfig) -> Router {
    create_app(AppState::from_config(config), &config.cors_origins)
}

/// Send a GET and return status plus raw body
#[allow(dead_code)]
pub async fn get_raw(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, body.to_vec())
}

#[allow(dead_code)]
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let (status, body) = get_raw(app, uri).await;
    (status, serde_json::from_slice(&body).unwrap())
}
