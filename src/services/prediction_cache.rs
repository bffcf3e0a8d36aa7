use std::sync::Arc;
use chrono::NaiveDate;
use dashmap::DashMap;
use tracing::debug;

use crate::models::PredictionResponse;

/// Identity of a prediction: every field that influences the response
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PredictionKey {
    pub ticker: String,
    pub days: u32,
    pub date: NaiveDate,
}

impl PredictionKey {
    pub fn new(ticker: &str, days: u32, date: NaiveDate) -> Self {
        Self {
            ticker: ticker.to_string(),
            days,
            date,
        }
    }
}

/// Thread-safe memo of finished predictions.
///
/// Responses are pure functions of the key, so a hit is always identical to
/// a fresh computation. Only entries for the most recently inserted date are
/// kept. The map is bounded both by entry count and by the total number of
/// points (history rows plus future rows) across all cached responses.
#[derive(Clone)]
pub struct PredictionCache {
    cache: Arc<DashMap<PredictionKey, Arc<PredictionResponse>>>,
    capacity: usize,
    max_points: usize,
}

/// Size of a response in cached points
pub fn response_points(response: &PredictionResponse) -> usize {
    response.historical_data.len() + response.future_forecast_table_data.len()
}

impl PredictionCache {
    pub fn new(capacity: usize, max_points: usize) -> Self {
        Self {
            cache: Arc::new(DashMap::new()),
            capacity,
            max_points,
        }
    }

    pub fn get(&self, key: &PredictionKey) -> Option<Arc<PredictionResponse>> {
        self.cache.get(key).map(|entry| Arc::clone(entry.value()))
    }

    /// Store a prediction, evicting other dates first.
    ///
    /// Responses larger than the whole point budget are not stored.
    pub fn insert(&self, key: PredictionKey, response: Arc<PredictionResponse>) {
        let points = response_points(&response);
        if self.capacity == 0 || points > self.max_points {
            debug!(
                "Not caching prediction for {} ({} days): {} points",
                key.ticker, key.days, points
            );
            return;
        }

        self.retain_date(key.date);
        self.cache.remove(&key);

        if self.cache.len() >= self.capacity || self.total_points() + points > self.max_points {
            // Everything left is from the current date; start over rather than track recency.
            debug!(
                "Prediction cache full ({} entries, {} points), clearing",
                self.cache.len(),
                self.total_points()
            );
            self.cache.clear();
        }

        self.cache.insert(key, response);
    }

    /// Remove all entries computed for any date other than `date`
    pub fn retain_date(&self, date: NaiveDate) {
        self.cache.retain(|key, _| key.date == date);
    }

    /// Points held across all cached responses
    pub fn total_points(&self) -> usize {
        self.cache
            .iter()
            .map(|entry| response_points(entry.value()))
            .sum()
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}
