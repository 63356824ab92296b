//! Shared hover tooltip for the dashboard charts.
//!
//! One tooltip exists per dashboard: the root view installs the state
//! signal via context and mounts a single [`TooltipLayer`] overlay.
//! Renderers grab the signal with [`use_tooltip`] and drive it from the
//! hover handlers of the elements they create, so handler lifetime equals
//! element lifetime. Last hover wins; there is no stacking or queueing.

use dioxus::prelude::*;

/// Gap between the pointer and the overlay's top-left corner.
const CURSOR_OFFSET_PX: f64 = 15.0;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TooltipState {
    visible: bool,
    x: f64,
    y: f64,
    heading: String,
    detail: String,
}

impl TooltipState {
    /// Repopulates and repositions the tooltip at the given client
    /// coordinates. An empty `detail` collapses the second line.
    pub fn show(
        &mut self,
        x: f64,
        y: f64,
        heading: impl Into<String>,
        detail: impl Into<String>,
    ) {
        self.visible = true;
        self.x = x;
        self.y = y;
        self.heading = heading.into();
        self.detail = detail.into();
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn heading(&self) -> &str {
        &self.heading
    }

    pub fn detail(&self) -> &str {
        &self.detail
    }
}

/// Installs the shared tooltip signal. Called once at the dashboard root,
/// before any chart mounts.
pub fn provide_tooltip() -> Signal<TooltipState> {
    use_context_provider(|| Signal::new(TooltipState::default()))
}

/// Handle to the shared tooltip for renderers attaching hover handlers.
pub fn use_tooltip() -> Signal<TooltipState> {
    use_context::<Signal<TooltipState>>()
}

/// The single overlay element. Visibility is a class toggle so the CSS
/// transition applies; position tracks the last hover event.
#[component]
pub fn TooltipLayer() -> Element {
    let state = use_tooltip();
    let tip = state();

    let class = if tip.visible {
        "tooltip tooltip--visible"
    } else {
        "tooltip"
    };
    let left = tip.x + CURSOR_OFFSET_PX;
    let top = tip.y + CURSOR_OFFSET_PX;

    rsx! {
        div { class: "{class}", style: "left: {left}px; top: {top}px;",
            div { class: "tooltip__heading", "{tip.heading}" }
            if !tip.detail.is_empty() {
                div { class: "tooltip__detail", "{tip.detail}" }
            }
        }
    }
}
