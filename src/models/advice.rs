use serde::{Deserialize, Serialize};

/// Trend recommendation derived from the near-term forecast
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Advice {
    /// Near-term forecast is meaningfully above the last close
    #[serde(rename = "BUY (Upward Trend)")]
    Buy,

    /// Near-term forecast is meaningfully below the last close
    #[serde(rename = "SELL (Downward Trend)")]
    Sell,

    /// No clear direction
    #[serde(rename = "HOLD (Neutral)")]
    Hold,
}

impl std::fmt::Display for Advice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Advice::Buy => write!(f, "buy"),
            Advice::Sell => write!(f, "sell"),
            Advice::Hold => write!(f, "hold"),
        }
    }
}
