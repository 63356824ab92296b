//! KPI summary strip: the four formatted display slots of a refresh.

use dioxus::prelude::*;

use crate::core::data::KpiSummary;

#[component]
pub fn KpiStrip(summary: KpiSummary) -> Element {
    let change_class = if summary.revenue_change_positive {
        "kpi-card__change kpi-card__change--positive"
    } else {
        "kpi-card__change kpi-card__change--negative"
    };

    rsx! {
        div { class: "kpi-strip",
            div { class: "kpi-card",
                span { class: "kpi-card__label", "Total revenue" }
                strong { class: "kpi-card__value", "{summary.revenue}" }
                span { class: "{change_class}", "{summary.revenue_change}" }
            }
            div { class: "kpi-card",
                span { class: "kpi-card__label", "Orders" }
                strong { class: "kpi-card__value", "{summary.orders}" }
                span { class: "kpi-card__meta", "Completed checkouts" }
            }
            div { class: "kpi-card",
                span { class: "kpi-card__label", "Active users" }
                strong { class: "kpi-card__value", "{summary.users}" }
                span { class: "kpi-card__meta", "Repeat buyers included" }
            }
        }
    }
}
