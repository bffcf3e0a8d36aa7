use std::net::SocketAddr;
use std::str::FromStr;
use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value} ({reason})")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Which history provider backs `/api/predict`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryProviderKind {
    Simulated,
}

/// Which forecast provider backs `/api/predict`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForecastProviderKind {
    Simulated,
}

/// How unknown tickers are treated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickerPolicyKind {
    Open,
    KnownOnly,
    Seeded,
}

impl FromStr for HistoryProviderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "simulated" => Ok(HistoryProviderKind::Simulated),
            _ => Err("must be 'simulated'".to_string()),
        }
    }
}

impl FromStr for ForecastProviderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "simulated" => Ok(ForecastProviderKind::Simulated),
            _ => Err("must be 'simulated'".to_string()),
        }
    }
}

impl FromStr for TickerPolicyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "open" => Ok(TickerPolicyKind::Open),
            "known_only" => Ok(TickerPolicyKind::KnownOnly),
            "seeded" => Ok(TickerPolicyKind::Seeded),
            _ => Err("must be 'open', 'known_only' or 'seeded'".to_string()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub history_provider: HistoryProviderKind,
    pub forecast_provider: ForecastProviderKind,
    pub ticker_policy: TickerPolicyKind,
    pub ticker_rejection_rate: f64,
    pub max_forecast_days: u32,
    pub cache_enabled: bool,
    pub cache_capacity: usize,
    /// Upper bound on history plus future rows held by the prediction cache
    pub cache_max_points: usize,
    /// Pins "today" for every request when set
    pub simulation_date: Option<NaiveDate>,
    pub cors_origins: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            history_provider: HistoryProviderKind::Simulated,
            forecast_provider: ForecastProviderKind::Simulated,
            ticker_policy: TickerPolicyKind::Seeded,
            ticker_rejection_rate: 0.2,
            max_forecast_days: 3650,
            cache_enabled: true,
            cache_capacity: 1024,
            cache_max_points: 250_000,
            simulation_date: None,
            cors_origins: Vec::new(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup; unset keys keep defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let config = Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: parse_or("PORT", lookup("PORT"), defaults.port)?,
            history_provider: parse_or(
                "HISTORY_PROVIDER",
                lookup("HISTORY_PROVIDER"),
                defaults.history_provider,
            )?,
            forecast_provider: parse_or(
                "FORECAST_PROVIDER",
                lookup("FORECAST_PROVIDER"),
                defaults.forecast_provider,
            )?,
            ticker_policy: parse_or("TICKER_POLICY", lookup("TICKER_POLICY"), defaults.ticker_policy)?,
            ticker_rejection_rate: parse_or(
                "TICKER_REJECTION_RATE",
                lookup("TICKER_REJECTION_RATE"),
                defaults.ticker_rejection_rate,
            )?,
            max_forecast_days: parse_or(
                "MAX_FORECAST_DAYS",
                lookup("MAX_FORECAST_DAYS"),
                defaults.max_forecast_days,
            )?,
            cache_enabled: parse_or(
                "PREDICTION_CACHE_ENABLED",
                lookup("PREDICTION_CACHE_ENABLED"),
                defaults.cache_enabled,
            )?,
            cache_capacity: parse_or(
                "PREDICTION_CACHE_CAPACITY",
                lookup("PREDICTION_CACHE_CAPACITY"),
                defaults.cache_capacity,
            )?,
            cache_max_points: parse_or(
                "PREDICTION_CACHE_MAX_POINTS",
                lookup("PREDICTION_CACHE_MAX_POINTS"),
                defaults.cache_max_points,
            )?,
            simulation_date: match lookup("SIMULATION_DATE").filter(|v| !v.trim().is_empty()) {
                Some(raw) => Some(NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(
                    |e| ConfigError::Invalid {
                        key: "SIMULATION_DATE",
                        value: raw.clone(),
                        reason: e.to_string(),
                    },
                )?),
                None => None,
            },
            cors_origins: lookup("CORS_ORIGINS")
                .map(|origins| {
                    origins
                        .split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.ticker_rejection_rate) {
            return Err(ConfigError::Invalid {
                key: "TICKER_REJECTION_RATE",
                value: self.ticker_rejection_rate.to_string(),
                reason: "must be between 0 and 1".to_string(),
            });
        }
        if self.max_forecast_days == 0 {
            return Err(ConfigError::Invalid {
                key: "MAX_FORECAST_DAYS",
                value: "0".to_string(),
                reason: "must be positive".to_string(),
            });
        }
        Ok(())
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e: std::net::AddrParseError| ConfigError::Invalid {
                key: "HOST",
                value: self.host.clone(),
                reason: e.to_string(),
            })
    }
}

fn parse_or<T>(key: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match raw {
        Some(value) if !value.trim().is_empty() => {
            value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
                key,
                value,
                reason: e.to_string(),
            })
        }
        _ => Ok(default),
    }
}
