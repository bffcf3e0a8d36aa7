pub mod advice_service;
pub mod backtest_service;
pub mod clock;
pub mod forecasting_service;
pub mod market_simulator;
pub mod prediction_cache;
pub mod prediction_service;
pub mod seeded_random;
pub mod ticker_policy;
