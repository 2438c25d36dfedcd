use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single daily closing price. One point per calendar date; a series is
/// kept in strictly ascending date order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub close: f64,
}

impl PricePoint {
    pub fn new(date: NaiveDate, close: f64) -> Self {
        Self { date, close }
    }
}

/// The maximum close and its date over the entire loaded history.
///
/// Computed once at load time and passed into per-range statistics so
/// drawdown is measured against true history, not the visible window.
#[derive(Debug, Clone, PartialEq)]
pub struct AthReference {
    pub value: f64,
    pub date: NaiveDate,
}
