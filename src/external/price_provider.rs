use async_trait::async_trait;
use chrono::NaiveDate;
use thiserror::Error;

use crate::models::PricePoint;

#[derive(Debug, Error)]
pub enum PriceProviderError {
    #[error("no data for ticker {0}")]
    NoData(String),

    #[error("provider unavailable: {0}")]
    Unavailable(String),
}

/// Source of daily closing prices for a symbol.
#[async_trait]
pub trait PriceProvider: Send + Sync {
    /// `days` consecutive daily closes ending on `end`, oldest first.
    async fn fetch_daily_history(
        &self,
        ticker: &str,
        end: NaiveDate,
        days: u32,
    ) -> Result<Vec<PricePoint>, PriceProviderError>;

    fn name(&self) -> &'static str;
}
