use crate::models::is_known_ticker;
use crate::services::seeded_random::{seeded_random, TICKER_POLICY_SALT};

/// Outcome of checking a ticker before any data is generated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickerVerdict {
    Accepted,
    Rejected,
}

/// Decides which tickers the service is willing to forecast.
pub trait TickerPolicy: Send + Sync {
    fn evaluate(&self, ticker: &str) -> TickerVerdict;

    fn name(&self) -> &'static str;
}

/// Accepts every ticker
#[derive(Debug, Default, Clone)]
pub struct OpenPolicy;

impl TickerPolicy for OpenPolicy {
    fn evaluate(&self, _ticker: &str) -> TickerVerdict {
        TickerVerdict::Accepted
    }

    fn name(&self) -> &'static str {
        "open"
    }
}

/// Accepts only the popular tickers (case-insensitive)
#[derive(Debug, Default, Clone)]
pub struct KnownOnlyPolicy;

impl TickerPolicy for KnownOnlyPolicy {
    fn evaluate(&self, ticker: &str) -> TickerVerdict {
        if is_known_ticker(ticker) {
            TickerVerdict::Accepted
        } else {
            TickerVerdict::Rejected
        }
    }

    fn name(&self) -> &'static str {
        "known_only"
    }
}

/// Accepts known tickers and rejects a fixed fraction of unknown ones.
///
/// Which unknown tickers are rejected is decided by hashing the upper-cased
/// symbol, so a given ticker always gets the same answer.
#[derive(Debug, Clone)]
pub struct SeededRejectionPolicy {
    rejection_rate: f64,
}

impl SeededRejectionPolicy {
    pub fn new(rejection_rate: f64) -> Self {
        Self {
            rejection_rate: rejection_rate.clamp(0.0, 1.0),
        }
    }

    pub fn rejection_rate(&self) -> f64 {
        self.rejection_rate
    }
}

impl TickerPolicy for SeededRejectionPolicy {
    fn evaluate(&self, ticker: &str) -> TickerVerdict {
        if is_known_ticker(ticker) {
            return TickerVerdict::Accepted;
        }

        let draw = seeded_random(&ticker.to_uppercase(), TICKER_POLICY_SALT);
        if draw < self.rejection_rate {
            TickerVerdict::Rejected
        } else {
            TickerVerdict::Accepted
        }
    }

    fn name(&self) -> &'static str {
        "seeded"
    }
}
