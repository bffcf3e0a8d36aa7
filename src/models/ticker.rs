use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnownTicker {
    pub symbol: String,
    pub name: String,
}

/// Popular symbols offered as search suggestions and treated as "known" by
/// the ticker policies.
pub const POPULAR_TICKERS: [(&str, &str); 10] = [
    ("AAPL", "Apple Inc."),
    ("GOOGL", "Alphabet Inc. (Google)"),
    ("MSFT", "Microsoft Corp."),
    ("TSLA", "Tesla, Inc."),
    ("AMZN", "Amazon.com, Inc."),
    ("META", "Meta Platforms, Inc."),
    ("RELIANCE.NS", "Reliance Industries Ltd."),
    ("TCS.NS", "Tata Consultancy Services Ltd."),
    ("INFY.NS", "Infosys Ltd."),
    ("NVDA", "NVIDIA Corporation"),
];

pub fn popular_tickers() -> Vec<KnownTicker> {
    POPULAR_TICKERS
        .iter()
        .map(|(symbol, name)| KnownTicker {
            symbol: symbol.to_string(),
            name: name.to_string(),
        })
        .collect()
}

/// Case-insensitive membership in the popular list.
pub fn is_known_ticker(ticker: &str) -> bool {
    let upper = ticker.to_uppercase();
    POPULAR_TICKERS.iter().any(|(symbol, _)| *symbol == upper)
}
