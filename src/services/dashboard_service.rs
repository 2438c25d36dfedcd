//! View binder: application state behind the range selector

use tracing::{debug, warn};

use crate::models::{
    AthReference, Drawing, PricePoint, RangeSelection, Stats, DEFAULT_RANGE,
};
use crate::services::{chart_service, range_service, series_service, stats_service};

/// Application state for one loaded series.
///
/// Owns the full series, the load-time all-time-high reference, and the
/// single mutable field of the whole program: the currently selected
/// range. The filter/stats/chart functions stay pure; this struct is the
/// only thing that sequences them.
pub struct Dashboard {
    symbol: String,
    status: String,
    full_series: Vec<PricePoint>,
    ath: Option<AthReference>,
    current_range: RangeSelection,
}

/// Everything one range activation produces for display.
pub struct RangeView {
    pub range: RangeSelection,
    pub window: Vec<PricePoint>,
    pub stats: Option<Stats>,
    pub facts: Vec<String>,
    pub drawing: Drawing,
    pub range_label: String,
}

impl Dashboard {
    /// Bind a freshly loaded series. The ATH reference is computed here,
    /// once, over the entire history.
    pub fn new(symbol: String, status: &str, full_series: Vec<PricePoint>) -> Self {
        let ath = series_service::compute_ath(&full_series);
        Self {
            symbol,
            status: status.to_string(),
            full_series,
            ath,
            current_range: DEFAULT_RANGE,
        }
    }

    /// Bind the explicit no-data state after a failed load. Range
    /// selection still works; every view renders its placeholder.
    pub fn empty(symbol: String, status: &str) -> Self {
        Self::new(symbol, status, Vec::new())
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Source label, or the failure message after a failed load.
    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn current_range(&self) -> RangeSelection {
        self.current_range
    }

    pub fn has_data(&self) -> bool {
        !self.full_series.is_empty()
    }

    /// Activate a range by selector tag. Unknown tags fall back to the
    /// default window.
    pub fn select_tag(&mut self, tag: &str) -> RangeView {
        let range = match RangeSelection::parse(tag) {
            Some(range) => range,
            None => {
                warn!("Unknown range tag '{}', falling back to {}", tag, DEFAULT_RANGE.tag());
                DEFAULT_RANGE
            }
        };
        self.select_range(range)
    }

    /// Activate a range: filter the series, recompute statistics against
    /// the global ATH reference, and rebuild the drawing.
    pub fn select_range(&mut self, range: RangeSelection) -> RangeView {
        self.current_range = range;
        let window = range_service::filter_by_range(range, &self.full_series);
        debug!(
            "Range {} selected: {} of {} points visible",
            range.tag(),
            window.len(),
            self.full_series.len()
        );

        let stats = stats_service::compute_stats(&window, self.ath.as_ref());
        let facts = stats_service::summary_facts(stats.as_ref(), &window);
        let drawing = chart_service::build_chart(&window);
        let range_label = range_label(range, &window);

        RangeView {
            range,
            window,
            stats,
            facts,
            drawing,
            range_label,
        }
    }
}

/// Visible-window label: `start → end`, `All history → end` for the full
/// history, `No data` for an empty window.
fn range_label(range: RangeSelection, window: &[PricePoint]) -> String {
    match (window.first(), window.last()) {
        (Some(_), Some(last)) if range == RangeSelection::All => {
            format!("All history → {}", last.date)
        }
        (Some(first), Some(last)) => format!("{} → {}", first.date, last.date),
        _ => "No data".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn dashboard() -> Dashboard {
        let series = vec![
            PricePoint::new(date("2024-01-01"), 100.0),
            PricePoint::new(date("2024-01-02"), 120.0),
            PricePoint::new(date("2024-01-03"), 90.0),
        ];
        Dashboard::new("VOO".to_string(), "test data", series)
    }

    #[test]
    fn selection_updates_the_current_range() {
        let mut dash = dashboard();
        assert_eq!(dash.current_range(), DEFAULT_RANGE);
        let view = dash.select_range(RangeSelection::All);
        assert_eq!(dash.current_range(), RangeSelection::All);
        assert_eq!(view.range, RangeSelection::All);
    }

    #[test]
    fn unknown_tag_falls_back_to_default() {
        let mut dash = dashboard();
        dash.select_range(RangeSelection::All);
        let view = dash.select_tag("2W");
        assert_eq!(view.range, DEFAULT_RANGE);
        assert_eq!(dash.current_range(), DEFAULT_RANGE);
    }

    #[test]
    fn drawdown_uses_the_global_reference_in_narrow_windows() {
        let mut dash = dashboard();
        // 1D window holds only the last point, but the ATH is historical
        let view = dash.select_tag("1d");
        assert_eq!(dash.current_range(), RangeSelection::OneDay);
        let stats = view.stats.unwrap();
        assert_eq!(stats.ath_value, 120.0);
        assert!((stats.drawdown - -25.0).abs() < 1e-9);
    }

    #[test]
    fn all_range_label_names_the_history() {
        let mut dash = dashboard();
        let view = dash.select_range(RangeSelection::All);
        assert_eq!(view.range_label, "All history → 2024-01-03");
        let view = dash.select_range(RangeSelection::OneWeek);
        assert_eq!(view.range_label, "2024-01-01 → 2024-01-03");
    }

    #[test]
    fn empty_dashboard_renders_placeholders_everywhere() {
        let mut dash = Dashboard::empty("VOO".to_string(), "API key missing");
        assert!(!dash.has_data());
        let view = dash.select_range(RangeSelection::All);
        assert!(view.stats.is_none());
        assert!(view.drawing.is_empty());
        assert_eq!(view.facts, vec!["No data available.".to_string()]);
        assert_eq!(view.range_label, "No data");
    }
}
