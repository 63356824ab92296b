//! Dashboard view: requests fresh datasets and feeds every renderer.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use futures_channel::mpsc::UnboundedSender;
use futures_util::StreamExt;

use crate::charts::tooltip::{provide_tooltip, TooltipLayer};
use crate::charts::{BarChart, LineChart, PieChart, ProgressList};
use crate::components::{FilterBar, KpiStrip};
use crate::core::data::{DashboardData, DashboardFilters};
use crate::core::platform;
use crate::core::timing::{self, ResizeDebouncer};

/// Delay before a rebuild so the loading style can paint first.
const PAINT_TICK_MS: u64 = 50;
/// Simulated fetch latency for explicit refreshes.
const REFRESH_LATENCY_MS: u64 = 1_000;
/// Quiet window after the last resize before the trend chart re-measures.
const RESIZE_DEBOUNCE_MS: u64 = 250;
/// Trend surface width until the first measurement arrives.
const DEFAULT_SURFACE_WIDTH: f64 = 640.0;

#[cfg(debug_assertions)]
fn log_rebuild(reason: &str, filters: &DashboardFilters) {
    // Lightweight trace for diagnosing refresh loops.
    println!("[dashboard] rebuild ({reason}) filters={filters:?}");
}

#[derive(Debug, Clone)]
enum DashboardEvent {
    Apply(DashboardFilters),
    Refresh,
    Resized { width: f64 },
    ResizeSettled { epoch: u64, width: f64 },
}

#[component]
pub fn Dashboard() -> Element {
    provide_tooltip();

    let filters = use_signal(DashboardFilters::default);
    let data = use_signal(|| DashboardData::sample(&DashboardFilters::default()));
    let busy = use_signal(|| false);
    let refreshing = use_signal(|| false);
    let surface_width = use_signal(|| DEFAULT_SURFACE_WIDTH);

    let sender_slot: Rc<RefCell<Option<UnboundedSender<DashboardEvent>>>> =
        Rc::new(RefCell::new(None));
    let sender_slot_for_loop = sender_slot.clone();

    let coroutine = {
        let filters_ref = filters.clone();
        let data_ref = data.clone();
        let busy_ref = busy.clone();
        let refreshing_ref = refreshing.clone();
        let width_ref = surface_width.clone();

        use_coroutine(move |mut rx: UnboundedReceiver<DashboardEvent>| {
            let sender_slot = sender_slot_for_loop.clone();
            let mut filters_signal = filters_ref.clone();
            let mut data_signal = data_ref.clone();
            let mut busy_signal = busy_ref.clone();
            let mut refreshing_signal = refreshing_ref.clone();
            let mut width_signal = width_ref.clone();

            async move {
                let mut debouncer = ResizeDebouncer::default();

                while let Some(event) = rx.next().await {
                    match event {
                        DashboardEvent::Apply(next) => {
                            filters_signal.set(next);
                            busy_signal.set(true);
                            timing::sleep_ms(PAINT_TICK_MS).await;
                            data_signal.set(DashboardData::sample(&next));
                            busy_signal.set(false);

                            #[cfg(debug_assertions)]
                            log_rebuild("filters", &next);
                        }
                        DashboardEvent::Refresh => {
                            refreshing_signal.set(true);
                            busy_signal.set(true);
                            timing::sleep_ms(REFRESH_LATENCY_MS).await;

                            let current = filters_signal();
                            data_signal.set(DashboardData::sample(&current));
                            busy_signal.set(false);
                            refreshing_signal.set(false);

                            #[cfg(debug_assertions)]
                            log_rebuild("refresh", &current);
                        }
                        DashboardEvent::Resized { width } => {
                            let epoch = debouncer.trigger();
                            queue_settle(sender_slot.clone(), epoch, width);
                        }
                        DashboardEvent::ResizeSettled { epoch, width } => {
                            // A newer resize superseded this one.
                            if !debouncer.is_current(epoch) {
                                continue;
                            }
                            width_signal.set(width);

                            #[cfg(debug_assertions)]
                            log_rebuild("resize", &filters_signal());
                        }
                    }
                }
            }
        })
    };

    sender_slot.borrow_mut().replace(coroutine.tx());

    let send_event = {
        let coroutine = coroutine.clone();
        move |event: DashboardEvent| {
            coroutine.send(event);
        }
    };
    let send_apply = send_event.clone();
    let send_refresh = send_event.clone();
    let send_resize = send_event.clone();

    let snapshot = data();
    let filters_now = filters();
    let busy_now = busy();
    let refreshing_now = refreshing();
    let width_now = surface_width();

    let grid_class = if busy_now {
        "chart-grid chart-grid--loading"
    } else {
        "chart-grid"
    };

    rsx! {
        section { class: "page page-dashboard",
            header { class: "dashboard-header",
                div { class: "dashboard-header__titles",
                    h1 { "Pulseboard" }
                    p { "Mock commerce analytics, regenerated on every refresh." }
                }
                FilterBar {
                    filters: filters_now,
                    busy: refreshing_now,
                    on_apply: move |next| send_apply(DashboardEvent::Apply(next)),
                    on_refresh: move |_| send_refresh(DashboardEvent::Refresh),
                }
            }

            KpiStrip { summary: snapshot.kpis.clone() }

            div { class: "{grid_class}",
                section { class: "chart-card chart-card--wide",
                    h2 { class: "chart-card__title", "Revenue trend" }
                    div {
                        class: "chart-card__surface",
                        onresize: move |evt| {
                            if let Ok(size) = evt.get_border_box_size() {
                                send_resize(DashboardEvent::Resized { width: size.width });
                            }
                        },
                        LineChart {
                            points: snapshot.revenue_trend.clone(),
                            width: width_now,
                        }
                    }
                }

                section { class: "chart-card",
                    h2 { class: "chart-card__title", "Top products" }
                    BarChart { items: snapshot.top_products.clone() }
                }

                section { class: "chart-card",
                    h2 { class: "chart-card__title", "Sales by category" }
                    PieChart { slices: snapshot.category_mix.clone() }
                }

                section { class: "chart-card",
                    h2 { class: "chart-card__title", "Regional sales" }
                    BarChart { items: snapshot.regional_sales.clone() }
                }

                section { class: "chart-card",
                    h2 { class: "chart-card__title", "Customer health" }
                    ProgressList { metrics: snapshot.customer_health.clone() }
                }
            }

            TooltipLayer {}
        }
    }
}

fn queue_settle(
    sender_slot: Rc<RefCell<Option<UnboundedSender<DashboardEvent>>>>,
    epoch: u64,
    width: f64,
) {
    if let Some(sender) = sender_slot.borrow().as_ref().cloned() {
        platform::spawn_future(async move {
            timing::sleep_ms(RESIZE_DEBOUNCE_MS).await;
            let _ = sender.unbounded_send(DashboardEvent::ResizeSettled { epoch, width });
        });
    }
}
