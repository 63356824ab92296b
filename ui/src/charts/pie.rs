//! Category share pie chart: SVG wedges plus a color-keyed legend.

use std::f64::consts::PI;

use dioxus::prelude::*;

use crate::charts::tooltip::{use_tooltip, TooltipState};
use crate::core::data::CategorySlice;
use crate::core::{format, palette};

const CENTER: f64 = 100.0;
const RADIUS: f64 = 80.0;

/// One wedge's computed geometry. Sweeps always total the input's share
/// of the circle; nothing normalizes percentages that don't sum to 100.
#[derive(Debug, Clone, PartialEq)]
pub struct Wedge {
    pub category: String,
    pub percentage: f64,
    pub sweep_deg: f64,
    pub large_arc: bool,
    pub path: String,
    pub color: &'static str,
}

impl Wedge {
    pub fn tooltip_heading(&self) -> String {
        format!("{}: {}", self.category, format::format_percent(self.percentage))
    }
}

/// Consecutive wedges starting at 12 o'clock; each start angle is the
/// cumulative sum of the preceding sweeps. Colors cycle the palette by
/// slice position.
pub fn wedge_layout(slices: &[CategorySlice]) -> Vec<Wedge> {
    let mut start_deg = 0.0_f64;
    slices
        .iter()
        .enumerate()
        .map(|(index, slice)| {
            let sweep_deg = slice.percentage / 100.0 * 360.0;
            let large_arc = sweep_deg > 180.0;
            let path = wedge_path(start_deg, sweep_deg, large_arc);
            start_deg += sweep_deg;

            Wedge {
                category: slice.category.clone(),
                percentage: slice.percentage,
                sweep_deg,
                large_arc,
                path,
                color: palette::pie_color(index),
            }
        })
        .collect()
}

fn wedge_path(start_deg: f64, sweep_deg: f64, large_arc: bool) -> String {
    // Shift by -90° so 0° sits at 12 o'clock instead of 3 o'clock.
    let start_rad = (start_deg - 90.0) * PI / 180.0;
    let end_rad = (start_deg + sweep_deg - 90.0) * PI / 180.0;

    let x1 = CENTER + RADIUS * start_rad.cos();
    let y1 = CENTER + RADIUS * start_rad.sin();
    let x2 = CENTER + RADIUS * end_rad.cos();
    let y2 = CENTER + RADIUS * end_rad.sin();
    let flag = large_arc as u8;

    format!("M {CENTER} {CENTER} L {x1} {y1} A {RADIUS} {RADIUS} 0 {flag} 1 {x2} {y2} Z")
}

#[component]
pub fn PieChart(slices: Vec<CategorySlice>) -> Element {
    let tooltip = use_tooltip();

    let wedges = wedge_layout(&slices);
    if wedges.is_empty() {
        return rsx! {};
    }

    rsx! {
        div { class: "pie-chart",
            svg { class: "pie-chart__svg", view_box: "0 0 200 200",
                {wedges.iter().map(|wedge| render_wedge(wedge.clone(), tooltip))}
            }
            div { class: "pie-legend",
                for wedge in wedges.iter() {
                    div { class: "legend-item",
                        div { class: "legend-color", style: "background: {wedge.color};" }
                        span { "{wedge.category}" }
                    }
                }
            }
        }
    }
}

fn render_wedge(wedge: Wedge, mut tooltip: Signal<TooltipState>) -> Element {
    let heading = wedge.tooltip_heading();

    rsx! {
        path {
            class: "pie-chart__wedge",
            d: "{wedge.path}",
            fill: "{wedge.color}",
            stroke: "#000",
            stroke_width: "2",
            onmouseenter: move |evt| {
                let at = evt.client_coordinates();
                tooltip.with_mut(|tip| tip.show(at.x, at.y, heading.clone(), String::new()));
            },
            onmouseleave: move |_| {
                tooltip.with_mut(|tip| tip.hide());
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slice(category: &str, percentage: f64) -> CategorySlice {
        CategorySlice {
            category: category.to_string(),
            percentage,
        }
    }

    #[test]
    fn sweeps_cover_the_full_circle_for_a_complete_mix() {
        let wedges = wedge_layout(&[
            slice("Electronics", 45.0),
            slice("Clothing", 25.0),
            slice("Home", 20.0),
            slice("Books", 10.0),
        ]);
        let total: f64 = wedges.iter().map(|wedge| wedge.sweep_deg).sum();
        assert!((total - 360.0).abs() < 1e-9);
    }

    #[test]
    fn sweeps_reflect_input_even_when_sum_is_not_one_hundred() {
        let wedges = wedge_layout(&[slice("A", 30.0), slice("B", 30.0)]);
        let total: f64 = wedges.iter().map(|wedge| wedge.sweep_deg).sum();
        assert!((total - 216.0).abs() < 1e-9);
    }

    #[test]
    fn large_arc_flag_flips_past_half() {
        let wedges = wedge_layout(&[slice("Dominant", 60.0), slice("Rest", 40.0)]);
        assert!(wedges[0].large_arc);
        assert!(!wedges[1].large_arc);
        assert!(wedges[0].path.contains(" 1 1 "));
        assert!(wedges[1].path.contains(" 0 1 "));
    }

    #[test]
    fn half_circle_is_not_a_large_arc() {
        let wedges = wedge_layout(&[slice("Half", 50.0)]);
        assert!(!wedges[0].large_arc);
    }

    #[test]
    fn wedges_start_where_the_previous_one_ended() {
        let wedges = wedge_layout(&[slice("A", 25.0), slice("B", 25.0)]);
        // 25% → 90° sweep: first wedge ends at 3 o'clock, so the second
        // starts there. Its path's line-to lands at (180, 100).
        let second = &wedges[1];
        let after_line = second.path.split('L').nth(1).unwrap();
        let mut coords = after_line.split_whitespace();
        let x: f64 = coords.next().unwrap().parse().unwrap();
        let y: f64 = coords.next().unwrap().parse().unwrap();
        assert!((x - 180.0).abs() < 1e-9);
        assert!((y - 100.0).abs() < 1e-9);
    }

    #[test]
    fn colors_cycle_past_the_palette() {
        let many: Vec<CategorySlice> = (0..7).map(|i| slice(&format!("C{i}"), 10.0)).collect();
        let wedges = wedge_layout(&many);
        assert_eq!(wedges[0].color, wedges[palette::PIE.len()].color);
    }

    #[test]
    fn tooltip_heading_pairs_category_and_percentage() {
        let wedges = wedge_layout(&[slice("Electronics", 45.0)]);
        assert_eq!(wedges[0].tooltip_heading(), "Electronics: 45%");
    }

    #[test]
    fn empty_input_yields_no_wedges() {
        assert!(wedge_layout(&[]).is_empty());
    }
}
