use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// One day of the actual (or simulated) close series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub price: f64, // rounded to cents by the producer
}

impl PricePoint {
    pub fn new(date: NaiveDate, price: f64) -> Self {
        Self { date, price }
    }
}
