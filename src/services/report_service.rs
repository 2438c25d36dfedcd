//! HTML report assembly
//!
//! Builds the self-contained dashboard page (stats, facts, range label,
//! inline SVG chart) and overwrites the report file on every range
//! activation — the written page always reflects the current selection.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::models::{RangeSelection, Stats};
use crate::services::dashboard_service::{Dashboard, RangeView};
use crate::utils::format::{format_currency, format_percent};
use crate::utils::svg::render_svg;

const STYLE: &str = "\
body { background: #0f172a; color: #e2e8f0; font-family: sans-serif; margin: 2rem auto; max-width: 64rem; }\n\
h1 { font-size: 1.4rem; } .status { color: #38bdf8; } .status.error { color: #f87171; }\n\
.ranges span { margin-right: 0.6rem; color: #94a3b8; } .ranges .active { color: #38bdf8; font-weight: bold; }\n\
dl { display: grid; grid-template-columns: max-content 1fr; gap: 0.3rem 1.2rem; }\n\
dt { color: #94a3b8; } .gain { color: #4ade80; } .loss { color: #f87171; }\n\
svg { width: 100%; height: auto; }";

/// Render the full report page for the current selection.
pub fn render_html(dashboard: &Dashboard, view: &RangeView) -> String {
    let status_class = if dashboard.has_data() { "status" } else { "status error" };

    let ranges = RangeSelection::ALL_RANGES
        .iter()
        .map(|range| {
            let class = if *range == view.range { " class=\"active\"" } else { "" };
            format!("<span{}>{}</span>", class, range.tag())
        })
        .collect::<Vec<_>>()
        .join("");

    let facts = view
        .facts
        .iter()
        .map(|fact| format!("    <li>{}</li>\n", fact))
        .collect::<String>();

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{symbol} daily close</title>\n<style>\n{style}\n</style>\n</head>\n<body>\n\
         <h1>{symbol} daily close</h1>\n\
         <p class=\"{status_class}\">{status}</p>\n\
         <p class=\"ranges\">{ranges}</p>\n\
         <p class=\"range-label\">{range_label}</p>\n\
         {stats}\n\
         <ul class=\"facts\">\n{facts}</ul>\n\
         {svg}\
         </body>\n</html>\n",
        symbol = dashboard.symbol(),
        style = STYLE,
        status_class = status_class,
        status = dashboard.status(),
        ranges = ranges,
        range_label = view.range_label,
        stats = stats_block(view.stats.as_ref()),
        facts = facts,
        svg = render_svg(&view.drawing),
    )
}

/// Write the report, replacing any prior page at `path`.
pub fn write_report(
    dashboard: &Dashboard,
    view: &RangeView,
    path: &Path,
) -> Result<PathBuf, String> {
    let html = render_html(dashboard, view);
    fs::write(path, html).map_err(|e| format!("Failed to write report {}: {}", path.display(), e))?;
    debug!("✓ Report written to {}", path.display());
    Ok(path.to_path_buf())
}

fn stats_block(stats: Option<&Stats>) -> String {
    let Some(stats) = stats else {
        return "<p class=\"no-data\">No data available.</p>".to_string();
    };
    format!(
        "<dl>\n\
         <dt>Current price</dt><dd>{current}</dd>\n\
         <dt>All-time high</dt><dd>{ath} <small>Recorded on {ath_date}</small></dd>\n\
         <dt>Drawdown</dt><dd class=\"{dd_class}\">{drawdown}</dd>\n\
         <dt>Period change</dt><dd class=\"{pc_class}\">{period_change}</dd>\n\
         </dl>",
        current = format_currency(stats.current),
        ath = format_currency(stats.ath_value),
        ath_date = stats.ath_date,
        dd_class = tone_class(stats.drawdown),
        drawdown = format_percent(stats.drawdown),
        pc_class = tone_class(stats.period_change),
        period_change = format_percent(stats.period_change),
    )
}

fn tone_class(value: f64) -> &'static str {
    if value < 0.0 {
        "loss"
    } else {
        "gain"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PricePoint, RangeSelection};
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
    fn report_carries_stats_facts_and_chart() {
        let mut dash = dashboard();
        let view = dash.select_range(RangeSelection::All);
        let html = render_html(&dash, &view);
        assert!(html.contains("VOO daily close"));
        assert!(html.contains("$90.00"));
        assert!(html.contains("Recorded on 2024-01-02"));
        assert!(html.contains("-25.00%"));
        assert!(html.contains("Data points shown: 3"));
        assert!(html.contains("<svg"));
        assert!(html.contains("All history → 2024-01-03"));
    }

    #[test]
    fn active_range_is_marked() {
        let mut dash = dashboard();
        let view = dash.select_range(RangeSelection::OneMonth);
        let html = render_html(&dash, &view);
        assert!(html.contains("<span class=\"active\">1M</span>"));
    }

    #[test]
    fn empty_dashboard_renders_no_data_page() {
        let mut dash = Dashboard::empty("VOO".to_string(), "API key missing");
        let view = dash.select_range(RangeSelection::SixMonth);
        let html = render_html(&dash, &view);
        assert!(html.contains("status error"));
        assert!(html.contains("API key missing"));
        assert!(html.contains("No data available."));
        assert!(!html.contains("<path"));
    }

    #[test]
    fn write_report_replaces_the_file() {
        let mut dash = dashboard();
        let path = std::env::temp_dir().join("drawdash_report_test.html");

        let view = dash.select_range(RangeSelection::All);
        write_report(&dash, &view, &path).unwrap();
        let first = std::fs::read_to_string(&path).unwrap();
        assert!(first.contains("All history"));

        let view = dash.select_range(RangeSelection::OneDay);
        write_report(&dash, &view, &path).unwrap();
        let second = std::fs::read_to_string(&path).unwrap();
        assert!(!second.contains("All history"));

        let _ = std::fs::remove_file(&path);
    }
}
