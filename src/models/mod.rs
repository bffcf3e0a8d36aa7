mod advice;
mod backtest;
mod forecast;
mod price_point;
pub mod prediction;
pub mod ticker;

pub use advice::Advice;
pub use backtest::BacktestPoint;
pub use forecast::{Forecast, ForecastPoint};
pub use prediction::{
    BacktestEntry, ChartEntry, ForecastEntry, ForecastTableEntry, HistoricalEntry,
    PredictionResponse,
};
pub use price_point::PricePoint;
pub use ticker::{is_known_ticker, popular_tickers, KnownTicker, POPULAR_TICKERS};
