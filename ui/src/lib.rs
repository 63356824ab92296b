//! Shared UI crate for Pulseboard. Cross-platform dashboard logic and views live here.

pub mod charts;
pub mod core;
pub mod views;

pub mod components {
    // Filter/refresh trigger surface (components/filter_bar.rs)
    pub mod filter_bar;
    pub use filter_bar::FilterBar;

    // KPI summary strip (components/kpi_strip.rs)
    pub mod kpi_strip;
    pub use kpi_strip::KpiStrip;
}
