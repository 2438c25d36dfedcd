//! Summary statistics over the visible window

use std::cmp::Ordering;

use crate::models::{AthReference, PricePoint, Stats};
use crate::services::series_service;
use crate::utils::format::{format_currency, format_percent};

/// Compute the window's statistics, or `None` for an empty window.
///
/// When `ath` is supplied, drawdown is measured against that reference
/// (normally the load-time global maximum). Without it the engine falls
/// back to the in-window maximum, earliest date on ties — which can
/// disagree with true history once the window excludes the global peak;
/// that divergence is accepted behavior, not a bug.
pub fn compute_stats(prices: &[PricePoint], ath: Option<&AthReference>) -> Option<Stats> {
    let first = prices.first()?;
    let last = prices.last()?;

    let (ath_value, ath_date) = match ath {
        Some(reference) => (reference.value, reference.date),
        None => {
            let fallback = series_service::compute_ath(prices)?;
            (fallback.value, fallback.date)
        }
    };

    let current = last.close;
    let start = first.close;
    let drawdown = (current - ath_value) / ath_value * 100.0;
    let period_change = (current - start) / start * 100.0;

    Some(Stats {
        current,
        start,
        ath_value,
        ath_date,
        drawdown,
        period_change,
    })
}

/// The five display facts for the visible window: point count, median
/// close (upper median), mean of the last five closes, distance to ATH,
/// and the ATH date. An empty window yields the single no-data fact.
pub fn summary_facts(stats: Option<&Stats>, prices: &[PricePoint]) -> Vec<String> {
    let stats = match stats {
        Some(stats) if !prices.is_empty() => stats,
        _ => return vec!["No data available.".to_string()],
    };

    let mut closes: Vec<f64> = prices.iter().map(|p| p.close).collect();
    closes.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    let median = closes[closes.len() / 2];

    let last_five = &prices[prices.len().saturating_sub(5)..];
    let avg5 = last_five.iter().map(|p| p.close).sum::<f64>() / last_five.len() as f64;

    vec![
        format!("Data points shown: {}", prices.len()),
        format!("Median close: {}", format_currency(median)),
        format!("5-sample average: {}", format_currency(avg5)),
        format!("Distance to ATH: {}", format_percent(stats.drawdown)),
        format!("ATH recorded on {}", stats.ath_date),
    ]
}
