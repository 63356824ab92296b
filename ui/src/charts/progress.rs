//! Progress indicators for operational health metrics.

use dioxus::prelude::*;

use crate::core::data::ProgressMetric;

/// Inline width for a fill bar. Percentages are taken as given: values
/// outside 0–100 produce out-of-range widths by design.
pub fn fill_style(percentage: f64) -> String {
    format!("width: {percentage}%;")
}

#[component]
pub fn ProgressList(metrics: Vec<ProgressMetric>) -> Element {
    if metrics.is_empty() {
        return rsx! {};
    }

    rsx! {
        div { class: "progress-indicators",
            for metric in metrics.iter() {
                div { class: "progress-item",
                    div { class: "progress-header",
                        span { class: "progress-label", "{metric.label}" }
                        span { class: "progress-value", "{metric.display_value}" }
                    }
                    div { class: "progress-bar-bg",
                        div { class: "progress-bar-fill", style: fill_style(metric.percentage) }
                    }
                }
            }
        }
    }
}
