//! Chart renderer: price window -> declarative drawing

use crate::models::{ChartPrimitive, Drawing, LabelKind, PricePoint, TextAnchor};

/// Logical canvas size; the SVG viewBox scales it to the display.
pub const CHART_WIDTH: f64 = 960.0;
pub const CHART_HEIGHT: f64 = 360.0;
const PADDING: f64 = 48.0;

/// Marker radius at the latest point.
const MARKER_RADIUS: f64 = 4.5;

/// Build the drawing for a price window. Pure and idempotent: every call
/// fully describes the chart, and an empty window yields an empty drawing
/// (the adapter renders the no-data placeholder).
///
/// x is index-based linear spacing; y maps closes over the window's
/// `max - min`, falling back to a range of 1 when all closes are equal so
/// a flat series still draws a line instead of dividing by zero.
pub fn build_chart(prices: &[PricePoint]) -> Drawing {
    let mut drawing = Drawing::new(CHART_WIDTH, CHART_HEIGHT);
    if prices.is_empty() {
        return drawing;
    }

    let min = prices.iter().map(|p| p.close).fold(f64::INFINITY, f64::min);
    let max = prices
        .iter()
        .map(|p| p.close)
        .fold(f64::NEG_INFINITY, f64::max);
    let range = if max - min == 0.0 { 1.0 } else { max - min };

    let x_step = if prices.len() > 1 {
        (CHART_WIDTH - PADDING * 2.0) / (prices.len() - 1) as f64
    } else {
        0.0
    };
    let x_for_index = |i: usize| PADDING + i as f64 * x_step;
    let y_for_value = |v: f64| PADDING + (max - v) * ((CHART_HEIGHT - PADDING * 2.0) / range);

    let points: Vec<(f64, f64)> = prices
        .iter()
        .enumerate()
        .map(|(i, p)| (x_for_index(i), y_for_value(p.close)))
        .collect();
    let baseline_y = CHART_HEIGHT - PADDING;

    drawing.primitives.push(ChartPrimitive::AreaPath {
        points: points.clone(),
        baseline_y,
    });
    drawing.primitives.push(ChartPrimitive::LinePath { points });
    drawing.primitives.push(ChartPrimitive::AxisLine {
        x1: PADDING,
        y1: baseline_y,
        x2: CHART_WIDTH - PADDING,
        y2: baseline_y,
    });

    // High/Low extremum labels, right-aligned; the second slot is nudged
    // 8px up so the labels cannot collide on a flat series.
    for (slot, (name, value)) in [("High", max), ("Low", min)].into_iter().enumerate() {
        drawing.primitives.push(ChartPrimitive::Label {
            text: format!("{} ${:.0}", name, value),
            x: CHART_WIDTH - PADDING,
            y: y_for_value(value) - 8.0 * slot as f64,
            anchor: TextAnchor::End,
            kind: LabelKind::Price,
        });
    }

    let first = &prices[0];
    let last = &prices[prices.len() - 1];
    drawing.primitives.push(ChartPrimitive::Label {
        text: first.date.to_string(),
        x: PADDING,
        y: baseline_y + 18.0,
        anchor: TextAnchor::Start,
        kind: LabelKind::Date,
    });
    drawing.primitives.push(ChartPrimitive::Label {
        text: last.date.to_string(),
        x: CHART_WIDTH - PADDING,
        y: baseline_y + 18.0,
        anchor: TextAnchor::End,
        kind: LabelKind::Date,
    });

    drawing.primitives.push(ChartPrimitive::Marker {
        x: x_for_index(prices.len() - 1),
        y: y_for_value(last.close),
        radius: MARKER_RADIUS,
    });

    drawing
}
