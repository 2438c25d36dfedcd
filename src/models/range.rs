//! Named display windows for the range selector

/// One of the fixed named windows the range selector offers.
///
/// Fixed-day windows cover `last date - (N - 1) days` through the last
/// date; `Ytd` starts at January 1 of the last date's year; `All` is the
/// entire history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeSelection {
    OneDay,
    FiveDay,
    OneWeek,
    OneMonth,
    ThreeMonth,
    SixMonth,
    OneYear,
    FiveYear,
    YearToDate,
    All,
}

/// Window used when no tag (or an unknown tag) is selected.
pub const DEFAULT_RANGE: RangeSelection = RangeSelection::SixMonth;

impl RangeSelection {
    /// Every selectable window, in display order.
    pub const ALL_RANGES: [RangeSelection; 10] = [
        RangeSelection::OneDay,
        RangeSelection::FiveDay,
        RangeSelection::OneWeek,
        RangeSelection::OneMonth,
        RangeSelection::ThreeMonth,
        RangeSelection::SixMonth,
        RangeSelection::YearToDate,
        RangeSelection::OneYear,
        RangeSelection::FiveYear,
        RangeSelection::All,
    ];

    /// Parse a selector tag (case-insensitive). Unknown tags yield `None`;
    /// callers fall back to [`DEFAULT_RANGE`].
    pub fn parse(tag: &str) -> Option<Self> {
        match tag.to_uppercase().as_str() {
            "1D" => Some(RangeSelection::OneDay),
            "5D" => Some(RangeSelection::FiveDay),
            "1W" => Some(RangeSelection::OneWeek),
            "1M" => Some(RangeSelection::OneMonth),
            "3M" => Some(RangeSelection::ThreeMonth),
            "6M" => Some(RangeSelection::SixMonth),
            "1Y" => Some(RangeSelection::OneYear),
            "5Y" => Some(RangeSelection::FiveYear),
            "YTD" => Some(RangeSelection::YearToDate),
            "ALL" => Some(RangeSelection::All),
            _ => None,
        }
    }

    /// The selector tag for this window.
    pub fn tag(&self) -> &'static str {
        match self {
            RangeSelection::OneDay => "1D",
            RangeSelection::FiveDay => "5D",
            RangeSelection::OneWeek => "1W",
            RangeSelection::OneMonth => "1M",
            RangeSelection::ThreeMonth => "3M",
            RangeSelection::SixMonth => "6M",
            RangeSelection::OneYear => "1Y",
            RangeSelection::FiveYear => "5Y",
            RangeSelection::YearToDate => "YTD",
            RangeSelection::All => "ALL",
        }
    }

    /// Day count for fixed-day windows; `None` for `Ytd` and `All`.
    pub fn window_days(&self) -> Option<i64> {
        match self {
            RangeSelection::OneDay => Some(1),
            RangeSelection::FiveDay => Some(5),
            RangeSelection::OneWeek => Some(7),
            RangeSelection::OneMonth => Some(30),
            RangeSelection::ThreeMonth => Some(90),
            RangeSelection::SixMonth => Some(180),
            RangeSelection::OneYear => Some(365),
            RangeSelection::FiveYear => Some(365 * 5),
            RangeSelection::YearToDate | RangeSelection::All => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(RangeSelection::parse("ytd"), Some(RangeSelection::YearToDate));
        assert_eq!(RangeSelection::parse("6m"), Some(RangeSelection::SixMonth));
        assert_eq!(RangeSelection::parse("All"), Some(RangeSelection::All));
    }

    #[test]
    fn parse_rejects_unknown_tags() {
        assert_eq!(RangeSelection::parse("2W"), None);
        assert_eq!(RangeSelection::parse(""), None);
    }

    #[test]
    fn tags_round_trip() {
        for range in RangeSelection::ALL_RANGES {
            assert_eq!(RangeSelection::parse(range.tag()), Some(range));
        }
    }

    #[test]
    fn five_year_window_spans_1825_days() {
        assert_eq!(RangeSelection::FiveYear.window_days(), Some(1825));
    }
}
