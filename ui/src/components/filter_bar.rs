//! Filter and refresh controls for the dashboard.
//!
//! Owns the trigger-surface markup. The orchestrator never touches these
//! controls directly; it only receives parsed `DashboardFilters` through
//! `on_apply` and refresh requests through `on_refresh`.

use dioxus::prelude::*;

use crate::core::data::{CategoryFilter, DashboardFilters, DateRange};

#[component]
pub fn FilterBar(
    filters: DashboardFilters,
    busy: bool,
    on_apply: EventHandler<DashboardFilters>,
    on_refresh: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "filter-bar",
            label { class: "filter-bar__field",
                span { class: "filter-bar__caption", "Date range" }
                select {
                    class: "filter-bar__select",
                    value: "{filters.range.as_value()}",
                    onchange: move |evt| {
                        // Unknown values keep the current selection.
                        if let Ok(range) = evt.value().parse::<DateRange>() {
                            on_apply.call(DashboardFilters { range, ..filters });
                        }
                    },
                    for range in DateRange::ALL.iter() {
                        option { value: "{range.as_value()}", "{range.label()}" }
                    }
                }
            }

            label { class: "filter-bar__field",
                span { class: "filter-bar__caption", "Category" }
                select {
                    class: "filter-bar__select",
                    value: "{filters.category.as_value()}",
                    onchange: move |evt| {
                        if let Ok(category) = evt.value().parse::<CategoryFilter>() {
                            on_apply.call(DashboardFilters { category, ..filters });
                        }
                    },
                    for choice in CategoryFilter::OPTIONS.iter() {
                        option { value: "{choice.as_value()}", "{choice.label()}" }
                    }
                }
            }

            button {
                r#type: "button",
                class: "filter-bar__apply",
                onclick: move |_| on_apply.call(filters),
                "Apply"
            }

            button {
                r#type: "button",
                class: "filter-bar__refresh",
                disabled: busy,
                onclick: move |_| on_refresh.call(()),
                if busy { "Refreshing…" } else { "Refresh data" }
            }
        }
    }
}
