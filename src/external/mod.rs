pub mod forecast_provider;
pub mod price_provider;
pub mod simulated;
