//! Normalization of the raw daily series into ordered price points

use serde_json::Value;
use tracing::debug;

use crate::api::alphavantage::models::DailySeriesResponse;
use crate::models::{AthReference, PricePoint};
use crate::utils::errors::DashboardError;

/// Field holding the closing price inside each daily record.
const CLOSE_FIELD: &str = "4. close";

/// Convert a daily quote response into an ascending-sorted series.
///
/// Entries whose close fails to parse as a finite number are dropped
/// silently (sparse upstream data is tolerated), as are entries with
/// unparseable dates. A response without the daily series key at all is a
/// `MalformedResponse`: wrong shape, not merely no data.
pub fn normalize_daily_series(
    response: &DailySeriesResponse,
) -> Result<Vec<PricePoint>, DashboardError> {
    let series = response
        .series
        .as_ref()
        .ok_or(DashboardError::MalformedResponse)?;

    let mut points = Vec::with_capacity(series.len());
    for (date_str, fields) in series {
        let Ok(date) = date_str.parse::<chrono::NaiveDate>() else {
            debug!("Dropping entry with unparseable date: {}", date_str);
            continue;
        };
        let Some(close) = parse_close(fields) else {
            debug!("Dropping {} entry with unparseable close", date_str);
            continue;
        };
        points.push(PricePoint::new(date, close));
    }

    points.sort_by_key(|p| p.date);
    Ok(points)
}

/// Closing prices arrive as strings on the live endpoint but may be plain
/// numbers in fixtures; accept both, reject anything non-finite.
fn parse_close(fields: &Value) -> Option<f64> {
    let raw = fields.get(CLOSE_FIELD)?;
    let close = match raw {
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => raw.as_f64()?,
    };
    close.is_finite().then_some(close)
}

/// Global maximum close and its date; earliest date wins on ties.
/// `None` for an empty series.
pub fn compute_ath(series: &[PricePoint]) -> Option<AthReference> {
    let mut best: Option<&PricePoint> = None;
    for point in series {
        match best {
            Some(b) if point.close <= b.close => {}
            _ => best = Some(point),
        }
    }
    best.map(|p| AthReference {
        value: p.close,
        date: p.date,
    })
}
