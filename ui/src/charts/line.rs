//! Revenue-trend line chart: scaled SVG line + filled area with hover markers.

use dioxus::prelude::*;

use crate::charts::tooltip::{use_tooltip, TooltipState};
use crate::core::data::MetricPoint;
use crate::core::scale::{grid_values, LinearScale};
use crate::core::{format, palette};

/// Fixed surface height; width follows the measured chart card.
pub const SURFACE_HEIGHT: f64 = 300.0;

const PAD_TOP: f64 = 20.0;
const PAD_RIGHT: f64 = 30.0;
const PAD_BOTTOM: f64 = 40.0;
const PAD_LEFT: f64 = 60.0;
const GRID_INTERVALS: usize = 5;

const MARKER_RADIUS: f64 = 4.0;
const MARKER_RADIUS_HOVER: f64 = 6.0;

/// Pre-computed geometry for one render of the line chart. Pure: no
/// signals, no DOM, unit-testable as data.
#[derive(Debug, Clone, PartialEq)]
pub struct LinePlot {
    pub width: f64,
    pub height: f64,
    pub grid: Vec<GridLine>,
    pub area_path: String,
    pub line_path: String,
    pub markers: Vec<Marker>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GridLine {
    pub y: f64,
    pub label: String,
}

/// One interactive data point.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub x: f64,
    pub y: f64,
    pub label: String,
    pub value: f64,
}

impl Marker {
    pub fn tooltip_heading(&self) -> String {
        format!("Date: {}", self.label)
    }

    pub fn tooltip_detail(&self) -> String {
        format!("Revenue: {}", format::format_currency(self.value))
    }
}

impl LinePlot {
    /// Lays `points` out on a `width` × [`SURFACE_HEIGHT`] surface.
    /// Returns `None` when there is nothing to draw.
    pub fn layout(points: &[MetricPoint], width: f64) -> Option<Self> {
        if points.is_empty() {
            return None;
        }

        let width = width.max(PAD_LEFT + PAD_RIGHT + 1.0);
        let inner_w = width - PAD_LEFT - PAD_RIGHT;
        let inner_h = SURFACE_HEIGHT - PAD_TOP - PAD_BOTTOM;
        let baseline = SURFACE_HEIGHT - PAD_BOTTOM;

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for point in points {
            min = min.min(point.value);
            max = max.max(point.value);
        }

        let y_scale = LinearScale::new((min, max), (baseline, PAD_TOP));
        // A single point still needs a finite x step.
        let step_count = (points.len() - 1).max(1) as f64;

        let markers: Vec<Marker> = points
            .iter()
            .enumerate()
            .map(|(index, point)| Marker {
                x: PAD_LEFT + (index as f64 / step_count) * inner_w,
                y: y_scale.to_range(point.value),
                label: point.label.clone(),
                value: point.value,
            })
            .collect();

        let grid = grid_values(max, min, GRID_INTERVALS)
            .into_iter()
            .enumerate()
            .map(|(index, value)| GridLine {
                y: PAD_TOP + inner_h / GRID_INTERVALS as f64 * index as f64,
                label: format::format_axis_thousands(value),
            })
            .collect();

        let mut line_path = String::new();
        for (index, marker) in markers.iter().enumerate() {
            let command = if index == 0 { 'M' } else { 'L' };
            line_path.push_str(&format!("{command} {} {} ", marker.x, marker.y));
        }
        let line_path = line_path.trim_end().to_string();

        let last_x = markers.last().map(|marker| marker.x).unwrap_or(PAD_LEFT);
        let mut area_path = format!("M {PAD_LEFT} {baseline}");
        for marker in &markers {
            area_path.push_str(&format!(" L {} {}", marker.x, marker.y));
        }
        area_path.push_str(&format!(" L {last_x} {baseline} Z"));

        Some(Self {
            width,
            height: SURFACE_HEIGHT,
            grid,
            area_path,
            line_path,
            markers,
        })
    }
}

#[component]
pub fn LineChart(points: Vec<MetricPoint>, width: f64) -> Element {
    let tooltip = use_tooltip();
    let hovered = use_signal(|| Option::<usize>::None);

    let Some(plot) = LinePlot::layout(&points, width) else {
        return rsx! {};
    };

    let grid_right = plot.width - PAD_RIGHT;
    let head_stop = format!("stop-color:{};stop-opacity:0.5", palette::ACCENT);
    let tail_stop = format!("stop-color:{};stop-opacity:0", palette::AREA_FADE);

    rsx! {
        svg {
            class: "line-chart",
            width: "{plot.width}",
            height: "{plot.height}",
            defs {
                linearGradient {
                    id: "trend-fill",
                    x1: "0%",
                    y1: "0%",
                    x2: "0%",
                    y2: "100%",
                    stop { offset: "0%", style: "{head_stop}" }
                    stop { offset: "100%", style: "{tail_stop}" }
                }
            }
            {plot.grid.iter().map(|rule| render_grid_rule(rule, grid_right))}
            path { d: "{plot.area_path}", fill: "url(#trend-fill)" }
            path {
                d: "{plot.line_path}",
                fill: "none",
                stroke: palette::ACCENT,
                stroke_width: "2",
            }
            {plot.markers.iter().enumerate().map(|(index, marker)| {
                render_marker(index, marker.clone(), hovered, tooltip)
            })}
        }
    }
}

fn render_grid_rule(rule: &GridLine, right: f64) -> Element {
    let label_x = PAD_LEFT - 10.0;
    let label_y = rule.y + 4.0;

    rsx! {
        line {
            x1: "{PAD_LEFT}",
            y1: "{rule.y}",
            x2: "{right}",
            y2: "{rule.y}",
            stroke: palette::GRID,
            stroke_width: "1",
        }
        text {
            x: "{label_x}",
            y: "{label_y}",
            text_anchor: "end",
            fill: palette::INK,
            font_size: "11",
            "{rule.label}"
        }
    }
}

fn render_marker(
    index: usize,
    marker: Marker,
    mut hovered: Signal<Option<usize>>,
    mut tooltip: Signal<TooltipState>,
) -> Element {
    let heading = marker.tooltip_heading();
    let detail = marker.tooltip_detail();

    let is_hot = hovered() == Some(index);
    let radius = if is_hot { MARKER_RADIUS_HOVER } else { MARKER_RADIUS };
    let fill = if is_hot {
        palette::MARKER_FILL_HOVER
    } else {
        palette::MARKER_FILL
    };

    rsx! {
        circle {
            class: "line-chart__marker",
            cx: "{marker.x}",
            cy: "{marker.y}",
            r: "{radius}",
            fill: "{fill}",
            stroke: palette::ACCENT,
            stroke_width: "2",
            onmouseenter: move |evt| {
                hovered.set(Some(index));
                let at = evt.client_coordinates();
                tooltip.with_mut(|tip| tip.show(at.x, at.y, heading.clone(), detail.clone()));
            },
            onmouseleave: move |_| {
                hovered.set(None);
                tooltip.with_mut(|tip| tip.hide());
            },
        }
    }
}
