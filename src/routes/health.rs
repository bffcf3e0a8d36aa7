use axum::{
    Router,
    routing::get,
};
use tracing::info;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
}

async fn health() -> &'static str {
    info!("GET /health - Health check");
    "OK"
}

async fn root() -> &'static str {
    "Seedcast forecast backend is alive"
}
