use chrono::NaiveDate;

/// Derived statistics for the currently visible window.
///
/// Recomputed on every range change; never persisted. An empty window has
/// no `Stats` at all (`Option::None` at the service layer).
#[derive(Debug, Clone, PartialEq)]
pub struct Stats {
    /// Last close in the window
    pub current: f64,
    /// First close in the window
    pub start: f64,
    pub ath_value: f64,
    pub ath_date: NaiveDate,
    /// Percent decline of `current` from the all-time-high
    pub drawdown: f64,
    /// Percent change from `start` to `current`
    pub period_change: f64,
}
