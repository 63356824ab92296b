//! Horizontal bar chart for ranked revenue breakdowns.

use dioxus::prelude::*;

use crate::core::data::RankedItem;
use crate::core::format;

/// One rendered row: the fill width is the item's share of the maximum
/// value, the fill text an abbreviated dollar amount.
#[derive(Debug, Clone, PartialEq)]
pub struct BarSpan {
    pub name: String,
    pub width_pct: f64,
    pub fill_label: String,
}

/// Widths relative to the largest value. Empty input or a non-positive
/// maximum yields no rows at all rather than dividing by zero.
pub fn bar_spans(items: &[RankedItem]) -> Vec<BarSpan> {
    let max = items.iter().map(|item| item.value).fold(0.0_f64, f64::max);
    if max <= 0.0 {
        return Vec::new();
    }

    items
        .iter()
        .map(|item| BarSpan {
            name: item.name.clone(),
            width_pct: item.value / max * 100.0,
            fill_label: format::format_abbrev(item.value),
        })
        .collect()
}

#[component]
pub fn BarChart(items: Vec<RankedItem>) -> Element {
    let spans = bar_spans(&items);
    if spans.is_empty() {
        return rsx! {};
    }

    rsx! {
        div { class: "bar-chart",
            for span in spans.into_iter() {
                div { class: "bar-item",
                    div { class: "bar-label", "{span.name}" }
                    div { class: "bar-wrapper",
                        div { class: "bar", style: "width: {span.width_pct}%;", "{span.fill_label}" }
                    }
                }
            }
        }
    }
}
