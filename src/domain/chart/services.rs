use std::f64::consts::PI;

use super::value_objects::{ChartPoint, PlotArea, PriceScale};
use crate::domain::stock::services::SectorSlice;
use crate::domain::stock::{ChangeTone, StockRecord};
use crate::time_utils::format_axis_label;

/// Palette cycled over pie slices
pub const SECTOR_COLORS: [&str; 4] = ["#0088FE", "#00C49F", "#FFBB28", "#FF8042"];
pub const CLOSE_COLOR: &str = "#8884d8";
pub const OPEN_COLOR: &str = "#82ca9d";

/// Records → chart points, oldest first.
pub fn chart_points(records: &[StockRecord]) -> Vec<ChartPoint> {
    let mut points: Vec<ChartPoint> = records
        .iter()
        .map(|record| ChartPoint {
            date: record.as_of_date,
            label: format_axis_label(record.as_of_date),
            open: record.open,
            close: record.close,
        })
        .collect();
    points.sort_by_key(|point| point.date);
    points
}

/// Min/max over open and close with 5% headroom. `None` for no points.
pub fn price_scale(points: &[ChartPoint]) -> Option<PriceScale> {
    let mut prices = points.iter().flat_map(|p| [p.open, p.close]).filter(|p| p.is_finite());
    let first = prices.next()?;
    let (min, max) = prices.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p)));
    let headroom = ((max - min) * 0.05).max(max.abs() * 0.001);
    Some(PriceScale { min: min - headroom, max: max + headroom })
}

/// Horizontal centre of slot `index` out of `count` equal slots
pub fn slot_x(index: usize, count: usize, area: &PlotArea) -> f64 {
    let slot = area.inner_width() / count.max(1) as f64;
    area.padding_left + slot * (index as f64 + 0.5)
}

#[derive(Debug, Clone, PartialEq)]
pub struct LinePath {
    pub name: &'static str,
    pub color: &'static str,
    /// SVG `points` attribute, `x,y x,y ...`
    pub points: String,
}

/// Close and open polylines.
pub fn line_paths(points: &[ChartPoint], area: &PlotArea) -> Vec<LinePath> {
    let Some(scale) = price_scale(points) else {
        return Vec::new();
    };
    let polyline = |value: fn(&ChartPoint) -> f64| {
        points
            .iter()
            .enumerate()
            .map(|(i, p)| {
                format!("{:.1},{:.1}", slot_x(i, points.len(), area), scale.y(value(p), area))
            })
            .collect::<Vec<_>>()
            .join(" ")
    };
    vec![
        LinePath { name: "Close Price", color: CLOSE_COLOR, points: polyline(|p| p.close) },
        LinePath { name: "Open Price", color: OPEN_COLOR, points: polyline(|p| p.open) },
    ]
}

/// One candle body. The backend has no intraday high/low, so wicks coincide with the body.
#[derive(Debug, Clone, PartialEq)]
pub struct CandleShape {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub tone: ChangeTone,
    pub label: String,
}

pub fn candle_shapes(points: &[ChartPoint], area: &PlotArea) -> Vec<CandleShape> {
    let Some(scale) = price_scale(points) else {
        return Vec::new();
    };
    let slot = area.inner_width() / points.len().max(1) as f64;
    let width = (slot * 0.7).clamp(1.0, 24.0);
    points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let top = scale.y(p.open.max(p.close), area);
            let bottom = scale.y(p.open.min(p.close), area);
            CandleShape {
                x: slot_x(i, points.len(), area) - width / 2.0,
                y: top,
                width,
                // flat days still get a visible hairline
                height: (bottom - top).max(1.0),
                tone: p.tone(),
                label: format!("{} O:{:.2} C:{:.2}", p.label, p.open, p.close),
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    pub position: f64,
    pub label: String,
}

/// Evenly spaced price labels along the y axis.
pub fn price_ticks(points: &[ChartPoint], area: &PlotArea, count: usize) -> Vec<AxisTick> {
    let Some(scale) = price_scale(points) else {
        return Vec::new();
    };
    let steps = count.max(2) - 1;
    (0..=steps)
        .map(|i| {
            let price = scale.min + scale.span() * i as f64 / steps as f64;
            AxisTick { position: scale.y(price, area), label: format!("{price:.2}") }
        })
        .collect()
}

/// At most `max_labels` date labels along the x axis, always including the first point.
pub fn date_ticks(points: &[ChartPoint], area: &PlotArea, max_labels: usize) -> Vec<AxisTick> {
    if points.is_empty() || max_labels == 0 {
        return Vec::new();
    }
    let stride = points.len().div_ceil(max_labels).max(1);
    points
        .iter()
        .enumerate()
        .step_by(stride)
        .map(|(i, p)| AxisTick { position: slot_x(i, points.len(), area), label: p.label.clone() })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub sector: String,
    pub color: &'static str,
    pub share: f64,
    /// SVG path `d` attribute
    pub path: String,
}

/// Pie wedges sized by record count, starting at twelve o'clock and running clockwise.
pub fn pie_slices(slices: &[SectorSlice], cx: f64, cy: f64, radius: f64) -> Vec<PieSlice> {
    let total: usize = slices.iter().map(|s| s.count).sum();
    if total == 0 {
        return Vec::new();
    }

    let point = |angle: f64| (cx + radius * angle.sin(), cy - radius * angle.cos());
    let mut start = 0.0_f64;
    slices
        .iter()
        .enumerate()
        .map(|(i, slice)| {
            let share = slice.count as f64 / total as f64;
            let sweep = share * 2.0 * PI;
            let path = if share >= 0.9999 {
                // a single arc cannot close on itself
                format!(
                    "M {cx:.2} {top:.2} A {radius} {radius} 0 1 1 {cx:.2} {bottom:.2} A {radius} {radius} 0 1 1 {cx:.2} {top:.2} Z",
                    top = cy - radius,
                    bottom = cy + radius,
                )
            } else {
                let (x0, y0) = point(start);
                let (x1, y1) = point(start + sweep);
                let large_arc = if sweep > PI { 1 } else { 0 };
                format!(
                    "M {cx:.2} {cy:.2} L {x0:.2} {y0:.2} A {radius} {radius} 0 {large_arc} 1 {x1:.2} {y1:.2} Z"
                )
            };
            start += sweep;
            PieSlice {
                sector: slice.sector.clone(),
                color: SECTOR_COLORS[i % SECTOR_COLORS.len()],
                share,
                path,
            }
        })
        .collect()
}
