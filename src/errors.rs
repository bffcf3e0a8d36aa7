use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::external::forecast_provider::ForecastProviderError;
use crate::external::price_provider::PriceProviderError;

/// Message returned for every internal failure; details stay in the logs.
pub const INTERNAL_ERROR_MESSAGE: &str = "An internal error occurred while generating the forecast";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),
    #[error("Invalid ticker symbol: {0} or no data found. Please try a known ticker.")]
    TickerNotFound(String),
    #[error("No data found for ticker '{0}'. Please check the symbol.")]
    NoData(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::TickerNotFound(_) | AppError::NoData(_) => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to show to the caller
    pub fn public_message(&self) -> String {
        match self {
            AppError::Internal(_) => INTERNAL_ERROR_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.public_message(),
        };
        (self.status(), Json(body)).into_response()
    }
}

impl From<PriceProviderError> for AppError {
    fn from(value: PriceProviderError) -> Self {
        match value {
            PriceProviderError::NoData(ticker) => AppError::NoData(ticker),
            other => AppError::Internal(other.to_string()),
        }
    }
}

impl From<ForecastProviderError> for AppError {
    fn from(value: ForecastProviderError) -> Self {
        AppError::Internal(value.to_string())
    }
}
