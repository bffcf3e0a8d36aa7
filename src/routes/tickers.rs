use axum::{Json, Router};
use axum::routing::get;
use tracing::info;

use crate::models::{popular_tickers, KnownTicker};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(list_tickers))
}

/// GET /api/tickers
///
/// Popular symbols offered as search suggestions.
pub async fn list_tickers() -> Json<Vec<KnownTicker>> {
    info!("GET /api/tickers - Listing popular tickers");
    Json(popular_tickers())
}
