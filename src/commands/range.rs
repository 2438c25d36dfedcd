use std::path::Path;

use crate::services::dashboard_service::{Dashboard, RangeView};
use crate::services::report_service;
use crate::utils::format::{format_currency, format_percent};

/// Activate a range by tag, print the terminal summary, and rewrite the
/// HTML report.
pub fn execute(dashboard: &mut Dashboard, tag: &str, report_path: &Path) -> Result<(), String> {
    tracing::info!("Range selection: {}", tag);
    let view = dashboard.select_tag(tag);
    print_view(dashboard, &view);
    let written = report_service::write_report(dashboard, &view, report_path)?;
    println!("Report written to {}", written.display());
    Ok(())
}

/// Terminal rendering of one range activation.
pub fn print_view(dashboard: &Dashboard, view: &RangeView) {
    println!();
    println!(
        "{} • {}   [{}]",
        dashboard.symbol(),
        view.range.tag(),
        dashboard.status()
    );
    println!("{}", view.range_label);

    match &view.stats {
        Some(stats) => {
            println!("Current price   {}", format_currency(stats.current));
            println!(
                "All-time high   {} (Recorded on {})",
                format_currency(stats.ath_value),
                stats.ath_date
            );
            println!("Drawdown        {}", format_percent(stats.drawdown));
            println!("Period change   {}", format_percent(stats.period_change));
        }
        None => println!("No data available."),
    }

    for fact in &view.facts {
        println!("  • {}", fact);
    }
}
