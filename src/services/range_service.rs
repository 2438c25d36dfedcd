//! Named-window filtering over the full series

use chrono::{Datelike, Duration, NaiveDate};

use crate::models::{PricePoint, RangeSelection};

/// Return the contiguous suffix of `series` falling inside `range`,
/// anchored to the series' last date. The boundary is inclusive.
///
/// An empty series yields an empty window for every tag, and an oversized
/// window (say, 5Y over six months of data) yields whatever exists — no
/// error either way.
pub fn filter_by_range(range: RangeSelection, series: &[PricePoint]) -> Vec<PricePoint> {
    let Some(last) = series.last() else {
        return Vec::new();
    };

    let boundary = match range {
        RangeSelection::All => None,
        RangeSelection::YearToDate => NaiveDate::from_ymd_opt(last.date.year(), 1, 1),
        fixed => fixed
            .window_days()
            .map(|days| last.date - Duration::days(days - 1)),
    };

    match boundary {
        Some(start) => series.iter().filter(|p| p.date >= start).cloned().collect(),
        None => series.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn daily_series(start: &str, days: usize, base: f64) -> Vec<PricePoint> {
        let start = date(start);
        (0..days)
            .map(|i| PricePoint::new(start + Duration::days(i as i64), base + i as f64))
            .collect()
    }

    #[test]
    fn empty_series_yields_empty_window_for_every_tag() {
        for range in RangeSelection::ALL_RANGES {
            assert!(filter_by_range(range, &[]).is_empty());
        }
    }

    #[test]
    fn all_returns_the_series_unchanged() {
        let series = daily_series("2024-01-01", 10, 100.0);
        assert_eq!(filter_by_range(RangeSelection::All, &series), series);
    }

    #[test]
    fn fixed_window_is_inclusive_of_its_boundary() {
        let series = daily_series("2024-01-01", 10, 100.0);
        // last date 2024-01-10, 5D boundary = 2024-01-06
        let window = filter_by_range(RangeSelection::FiveDay, &series);
        assert_eq!(window.len(), 5);
        assert_eq!(window[0].date, date("2024-01-06"));
        assert_eq!(window.last().unwrap().date, date("2024-01-10"));
    }

    #[test]
    fn one_day_keeps_only_the_last_point() {
        let series = daily_series("2024-01-01", 10, 100.0);
        let window = filter_by_range(RangeSelection::OneDay, &series);
        assert_eq!(window.len(), 1);
        assert_eq!(window[0].date, date("2024-01-10"));
    }

    #[test]
    fn output_is_a_contiguous_suffix() {
        let series = daily_series("2024-01-01", 30, 100.0);
        let window = filter_by_range(RangeSelection::OneWeek, &series);
        let suffix = &series[series.len() - window.len()..];
        assert_eq!(window, suffix);
    }

    #[test]
    fn ytd_starts_january_first_of_last_year_in_series() {
        let mut series = daily_series("2024-12-20", 20, 100.0);
        // runs 2024-12-20 through 2025-01-08
        let window = filter_by_range(RangeSelection::YearToDate, &series);
        assert_eq!(window[0].date, date("2025-01-01"));

        // last known date 2025-03-15 -> boundary 2025-01-01 inclusive
        series = daily_series("2024-11-01", 135, 100.0);
        assert_eq!(series.last().unwrap().date, date("2025-03-15"));
        let window = filter_by_range(RangeSelection::YearToDate, &series);
        assert_eq!(window[0].date, date("2025-01-01"));
    }

    #[test]
    fn oversized_window_yields_whatever_exists() {
        let series = daily_series("2024-01-01", 30, 100.0);
        let window = filter_by_range(RangeSelection::FiveYear, &series);
        assert_eq!(window, series);
    }
}
