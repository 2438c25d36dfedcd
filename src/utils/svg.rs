//! SVG adapter for chart drawings
//!
//! Serializes a [`Drawing`] into a self-contained `<svg>` element. This is
//! the only module that knows SVG syntax; the chart service stays
//! renderer-agnostic.

use crate::models::{ChartPrimitive, Drawing, LabelKind, TextAnchor};

const GRADIENT_ID: &str = "areaGradient";
const GRADIENT_TOP: &str = "rgba(56, 189, 248, 0.35)";
const GRADIENT_BOTTOM: &str = "rgba(56, 189, 248, 0)";
const LINE_STROKE: &str = "rgba(56, 189, 248, 0.9)";
const AXIS_STROKE: &str = "rgba(148, 163, 184, 0.35)";
const PRICE_LABEL_FILL: &str = "#cbd5e1";
const DATE_LABEL_FILL: &str = "#94a3b8";
const MARKER_FILL: &str = "#0ea5e9";
const MARKER_STROKE: &str = "#e0f2fe";

/// Render a drawing as SVG markup. Each call fully replaces any prior
/// markup for the same target; an empty drawing renders an explicit
/// no-data placeholder instead of an empty canvas.
pub fn render_svg(drawing: &Drawing) -> String {
    let mut svg = format!(
        "<svg viewBox=\"0 0 {:.0} {:.0}\" preserveAspectRatio=\"xMidYMid meet\" xmlns=\"http://www.w3.org/2000/svg\">\n",
        drawing.width, drawing.height
    );

    if drawing.is_empty() {
        svg.push_str(&format!(
            "  <text x=\"{:.0}\" y=\"{:.0}\" text-anchor=\"middle\" fill=\"{}\" font-size=\"16\">No data available.</text>\n",
            drawing.width / 2.0,
            drawing.height / 2.0,
            DATE_LABEL_FILL
        ));
        svg.push_str("</svg>\n");
        return svg;
    }

    svg.push_str(&format!(
        "  <defs>\n    <linearGradient id=\"{id}\" x1=\"0\" y1=\"0\" x2=\"0\" y2=\"1\">\n      <stop offset=\"0%\" stop-color=\"{top}\"/>\n      <stop offset=\"100%\" stop-color=\"{bottom}\"/>\n    </linearGradient>\n  </defs>\n",
        id = GRADIENT_ID,
        top = GRADIENT_TOP,
        bottom = GRADIENT_BOTTOM
    ));

    for primitive in &drawing.primitives {
        match primitive {
            ChartPrimitive::AreaPath { points, baseline_y } => {
                svg.push_str(&format!(
                    "  <path d=\"{}\" fill=\"url(#{})\" stroke=\"none\"/>\n",
                    area_path_data(points, *baseline_y),
                    GRADIENT_ID
                ));
            }
            ChartPrimitive::LinePath { points } => {
                svg.push_str(&format!(
                    "  <path d=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"3\" stroke-linejoin=\"round\" stroke-linecap=\"round\"/>\n",
                    line_path_data(points),
                    LINE_STROKE
                ));
            }
            ChartPrimitive::AxisLine { x1, y1, x2, y2 } => {
                svg.push_str(&format!(
                    "  <line x1=\"{:.1}\" y1=\"{:.1}\" x2=\"{:.1}\" y2=\"{:.1}\" stroke=\"{}\" stroke-width=\"1\"/>\n",
                    x1, y1, x2, y2, AXIS_STROKE
                ));
            }
            ChartPrimitive::Label {
                text,
                x,
                y,
                anchor,
                kind,
            } => {
                let fill = match kind {
                    LabelKind::Price => PRICE_LABEL_FILL,
                    LabelKind::Date => DATE_LABEL_FILL,
                };
                let anchor = match anchor {
                    TextAnchor::Start => "start",
                    TextAnchor::End => "end",
                };
                svg.push_str(&format!(
                    "  <text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"{}\" fill=\"{}\" font-size=\"12\">{}</text>\n",
                    x, y, anchor, fill, text
                ));
            }
            ChartPrimitive::Marker { x, y, radius } => {
                svg.push_str(&format!(
                    "  <circle cx=\"{:.1}\" cy=\"{:.1}\" r=\"{}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"2\"/>\n",
                    x, y, radius, MARKER_FILL, MARKER_STROKE
                ));
            }
        }
    }

    svg.push_str("</svg>\n");
    svg
}

/// Line path: move to the first point, line-to the rest.
fn line_path_data(points: &[(f64, f64)]) -> String {
    let mut d = String::new();
    for (i, (x, y)) in points.iter().enumerate() {
        let command = if i == 0 { "M" } else { " L" };
        d.push_str(&format!("{} {:.1} {:.1}", command, x, y));
    }
    d
}

/// Area path: baseline start, along the line, back down to the baseline.
fn area_path_data(points: &[(f64, f64)], baseline_y: f64) -> String {
    let (first_x, last_x) = match (points.first(), points.last()) {
        (Some(first), Some(last)) => (first.0, last.0),
        _ => return String::new(),
    };
    let mut d = format!("M {:.1} {:.1}", first_x, baseline_y);
    for (x, y) in points {
        d.push_str(&format!(" L {:.1} {:.1}", x, y));
    }
    d.push_str(&format!(" L {:.1} {:.1} Z", last_x, baseline_y));
    d
}
