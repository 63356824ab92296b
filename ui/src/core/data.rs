//! Mock dataset generation for the dashboard.
//!
//! Stands in for a real analytics backend: every call fabricates a fresh
//! sample with thread-local randomness, so callers must not assume stable
//! output across refreshes. All produced values are plain value objects
//! consumed by exactly one render pass and then discarded.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use time::macros::format_description;
use time::{Duration, OffsetDateTime};

use crate::core::format;

/// Share of orders attributed to returning buyers when deriving the
/// active-users figure.
const REPEAT_BUYER_RATIO: f64 = 0.85;

const TREND_DAILY_MIN: f64 = 5_000.0;
const TREND_DAILY_MAX: f64 = 15_000.0;

// ---------------------------------------------------------------------------
// Value objects
// ---------------------------------------------------------------------------

/// One sample of a trend series; `label` is a pre-formatted short date.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricPoint {
    pub label: String,
    pub value: f64,
}

/// One row of a ranked breakdown. Render order is input order.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedItem {
    pub name: String,
    pub value: f64,
}

/// One pie wedge's worth of input, percentage in 0–100. Sums are the
/// caller's responsibility; nothing here normalizes them.
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySlice {
    pub category: String,
    pub percentage: f64,
}

/// One progress row. `percentage` is trusted as-is, including values
/// outside 0–100.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressMetric {
    pub label: String,
    pub display_value: String,
    pub percentage: f64,
}

/// Formatted KPI slots for one refresh: revenue, revenue change, orders,
/// active users. `revenue_change_positive` picks the badge styling.
#[derive(Debug, Clone, PartialEq)]
pub struct KpiSummary {
    pub revenue: String,
    pub revenue_change: String,
    pub revenue_change_positive: bool,
    pub orders: String,
    pub users: String,
}

/// Everything one refresh cycle hands to the renderers.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardData {
    pub kpis: KpiSummary,
    pub revenue_trend: Vec<MetricPoint>,
    pub top_products: Vec<RankedItem>,
    pub regional_sales: Vec<RankedItem>,
    pub category_mix: Vec<CategorySlice>,
    pub customer_health: Vec<ProgressMetric>,
}

impl DashboardData {
    /// Generates a complete fresh sample for the given filters.
    pub fn sample(filters: &DashboardFilters) -> Self {
        let mut rng = rand::thread_rng();

        // KPI volume scales with the selected window.
        let window_scale = filters.range.days() as f64 / DateRange::default().days() as f64;
        let revenue = rng.gen_range(450_000.0..850_000.0) * window_scale;
        let orders = (rng.gen_range(5_000.0..12_000.0) * window_scale).floor();
        let users = (orders * REPEAT_BUYER_RATIO).floor();
        let change = rng.gen_range(-3.0..7.0);

        Self {
            kpis: KpiSummary {
                revenue: format::format_currency(revenue),
                revenue_change: format::format_signed_percent(change),
                revenue_change_positive: change >= 0.0,
                orders: format::format_count(orders),
                users: format::format_count(users),
            },
            revenue_trend: revenue_trend(filters.range, &mut rng),
            top_products: top_products(filters.category, &mut rng),
            regional_sales: regional_sales(revenue, &mut rng),
            category_mix: category_mix(filters.category, &mut rng),
            customer_health: customer_health(&mut rng),
        }
    }
}

// ---------------------------------------------------------------------------
// Filters (trigger-surface state)
// ---------------------------------------------------------------------------

/// Unknown select value forwarded by the trigger surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownFilterValue;

impl fmt::Display for UnknownFilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unrecognized filter value")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateRange {
    Last7,
    #[default]
    Last14,
    Last30,
    Last90,
    All,
}

impl DateRange {
    pub const ALL: [DateRange; 5] = [
        DateRange::Last7,
        DateRange::Last14,
        DateRange::Last30,
        DateRange::Last90,
        DateRange::All,
    ];

    /// Trend length and KPI window, in days. `All` is capped at the
    /// retention horizon of the mock backend.
    pub fn days(self) -> usize {
        match self {
            DateRange::Last7 => 7,
            DateRange::Last14 => 14,
            DateRange::Last30 => 30,
            DateRange::Last90 => 90,
            DateRange::All => 180,
        }
    }

    /// Stable form value round-tripped through the select control.
    pub fn as_value(self) -> &'static str {
        match self {
            DateRange::Last7 => "7",
            DateRange::Last14 => "14",
            DateRange::Last30 => "30",
            DateRange::Last90 => "90",
            DateRange::All => "all",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DateRange::Last7 => "Last 7 days",
            DateRange::Last14 => "Last 14 days",
            DateRange::Last30 => "Last 30 days",
            DateRange::Last90 => "Last 90 days",
            DateRange::All => "All time",
        }
    }
}

impl FromStr for DateRange {
    type Err = UnknownFilterValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DateRange::ALL
            .into_iter()
            .find(|range| range.as_value() == s)
            .ok_or(UnknownFilterValue)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Electronics,
    Clothing,
    Home,
    Books,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Electronics,
        Category::Clothing,
        Category::Home,
        Category::Books,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Clothing => "Clothing",
            Category::Home => "Home",
            Category::Books => "Books",
        }
    }

    /// Baseline share of the category mix, in percent.
    fn base_share(self) -> f64 {
        match self {
            Category::Electronics => 45.0,
            Category::Clothing => 25.0,
            Category::Home => 20.0,
            Category::Books => 10.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn as_value(self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(Category::Electronics) => "electronics",
            CategoryFilter::Only(Category::Clothing) => "clothing",
            CategoryFilter::Only(Category::Home) => "home",
            CategoryFilter::Only(Category::Books) => "books",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => "All categories",
            CategoryFilter::Only(category) => category.label(),
        }
    }

    pub const OPTIONS: [CategoryFilter; 5] = [
        CategoryFilter::All,
        CategoryFilter::Only(Category::Electronics),
        CategoryFilter::Only(Category::Clothing),
        CategoryFilter::Only(Category::Home),
        CategoryFilter::Only(Category::Books),
    ];
}

impl FromStr for CategoryFilter {
    type Err = UnknownFilterValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CategoryFilter::OPTIONS
            .into_iter()
            .find(|filter| filter.as_value() == s)
            .ok_or(UnknownFilterValue)
    }
}

/// Current trigger-surface state; the orchestrator regenerates everything
/// whenever this changes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DashboardFilters {
    pub range: DateRange,
    pub category: CategoryFilter,
}

// ---------------------------------------------------------------------------
// Generators
// ---------------------------------------------------------------------------

/// Product catalog the ranking samples draw from: name, category, and the
/// revenue band a refresh may land anywhere inside.
const CATALOG: &[(&str, Category, f64, f64)] = &[
    ("Gaming Laptop X1", Category::Electronics, 20_000.0, 70_000.0),
    ("Wireless Earbuds", Category::Electronics, 15_000.0, 55_000.0),
    ("Smart Watch V2", Category::Electronics, 10_000.0, 45_000.0),
    ("Mech Keyboard", Category::Electronics, 5_000.0, 30_000.0),
    ("4K Monitor", Category::Electronics, 5_000.0, 25_000.0),
    ("Linen Jacket", Category::Clothing, 8_000.0, 24_000.0),
    ("Trail Runners", Category::Clothing, 6_000.0, 20_000.0),
    ("Merino Hoodie", Category::Clothing, 4_000.0, 16_000.0),
    ("Canvas Tote", Category::Clothing, 2_000.0, 9_000.0),
    ("Air Purifier", Category::Home, 7_000.0, 22_000.0),
    ("Cast Iron Set", Category::Home, 5_000.0, 18_000.0),
    ("Desk Lamp", Category::Home, 2_000.0, 10_000.0),
    ("Cookbook Annual", Category::Books, 3_000.0, 12_000.0),
    ("Sci-Fi Boxset", Category::Books, 2_000.0, 9_000.0),
    ("Atlas Revised", Category::Books, 1_000.0, 5_000.0),
];

const TOP_PRODUCT_COUNT: usize = 5;

/// Regional revenue shares, pre-sorted by share descending.
const REGIONS: [(&str, f64); 4] = [
    ("North America", 0.45),
    ("Europe", 0.30),
    ("Asia Pacific", 0.15),
    ("LatAm", 0.10),
];

/// Daily revenue samples for the selected window, oldest first.
pub fn revenue_trend(range: DateRange, rng: &mut impl Rng) -> Vec<MetricPoint> {
    let today = OffsetDateTime::now_utc();
    (1..=range.days())
        .rev()
        .map(|back| MetricPoint {
            label: format_trend_label(today - Duration::days(back as i64)),
            value: rng.gen_range(TREND_DAILY_MIN..TREND_DAILY_MAX).floor(),
        })
        .collect()
}

fn format_trend_label(date: OffsetDateTime) -> String {
    date.format(&format_description!(
        "[month repr:short] [day padding:none]"
    ))
    .unwrap_or_else(|_| "—".to_string())
}

/// Top sellers for the selected category, sorted by revenue descending.
pub fn top_products(filter: CategoryFilter, rng: &mut impl Rng) -> Vec<RankedItem> {
    let mut items: Vec<RankedItem> = CATALOG
        .iter()
        .filter(|(_, category, _, _)| match filter {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => *category == selected,
        })
        .map(|(name, _, lo, hi)| RankedItem {
            name: (*name).to_string(),
            value: rng.gen_range(*lo..*hi).floor(),
        })
        .collect();

    items.sort_by(|a, b| b.value.partial_cmp(&a.value).unwrap_or(std::cmp::Ordering::Equal));
    items.truncate(TOP_PRODUCT_COUNT);
    items
}

/// Splits the sampled revenue across regions with a little jitter; order
/// follows the share table (already descending).
pub fn regional_sales(revenue: f64, rng: &mut impl Rng) -> Vec<RankedItem> {
    REGIONS
        .iter()
        .map(|(name, share)| RankedItem {
            name: (*name).to_string(),
            value: (revenue * share * rng.gen_range(0.9..1.1)).floor(),
        })
        .collect()
}

/// Category shares, jittered around the baselines and re-normalized to
/// 100. A selected category is weighted up before normalizing.
pub fn category_mix(filter: CategoryFilter, rng: &mut impl Rng) -> Vec<CategorySlice> {
    let weights: Vec<(Category, f64)> = Category::ALL
        .iter()
        .map(|&category| {
            let mut weight = category.base_share() * rng.gen_range(0.85..1.15);
            if let CategoryFilter::Only(selected) = filter {
                if selected == category {
                    weight *= 1.75;
                }
            }
            (category, weight)
        })
        .collect();

    let total: f64 = weights.iter().map(|(_, weight)| weight).sum();
    weights
        .into_iter()
        .map(|(category, weight)| CategorySlice {
            category: category.label().to_string(),
            percentage: (weight / total * 1000.0).round() / 10.0,
        })
        .collect()
}

/// Operational health metrics for the progress indicators.
pub fn customer_health(rng: &mut impl Rng) -> Vec<ProgressMetric> {
    let retention = rng.gen_range(58.0..74.0_f64).round();
    let new_users = rng.gen_range(900.0..1_600.0_f64).round();
    let onboarding = rng.gen_range(70.0..95.0_f64).round();
    let abandonment = rng.gen_range(30.0..55.0_f64).round();
    let satisfaction = (rng.gen_range(3.9..4.9_f64) * 10.0).round() / 10.0;

    vec![
        ProgressMetric {
            label: "Retention rate".to_string(),
            display_value: format::format_percent(retention),
            percentage: retention,
        },
        ProgressMetric {
            label: "New users".to_string(),
            display_value: format::format_count(new_users),
            percentage: onboarding,
        },
        ProgressMetric {
            label: "Cart abandonment".to_string(),
            display_value: format::format_percent(abandonment),
            percentage: abandonment,
        },
        ProgressMetric {
            label: "Satisfaction score".to_string(),
            display_value: format!("{satisfaction:.1}/5"),
            percentage: satisfaction / 5.0 * 100.0,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn trend_length_follows_selected_range() {
        let mut rng = rng();
        for range in DateRange::ALL {
            let trend = revenue_trend(range, &mut rng);
            assert_eq!(trend.len(), range.days());
            assert!(trend.iter().all(|point| !point.label.is_empty()));
            assert!(trend
                .iter()
                .all(|point| point.value >= TREND_DAILY_MIN && point.value < TREND_DAILY_MAX));
        }
    }

    #[test]
    fn top_products_are_sorted_and_capped() {
        let mut rng = rng();
        let products = top_products(CategoryFilter::All, &mut rng);
        assert_eq!(products.len(), TOP_PRODUCT_COUNT);
        assert!(products.windows(2).all(|pair| pair[0].value >= pair[1].value));
    }

    #[test]
    fn top_products_respect_category_filter() {
        let mut rng = rng();
        let products = top_products(CategoryFilter::Only(Category::Clothing), &mut rng);
        assert!(!products.is_empty());
        let clothing: Vec<&str> = CATALOG
            .iter()
            .filter(|(_, category, _, _)| *category == Category::Clothing)
            .map(|(name, _, _, _)| *name)
            .collect();
        assert!(products
            .iter()
            .all(|item| clothing.contains(&item.name.as_str())));
    }

    #[test]
    fn regional_sales_preserve_share_order() {
        let mut rng = rng();
        let regions = regional_sales(600_000.0, &mut rng);
        assert_eq!(regions.len(), REGIONS.len());
        assert_eq!(regions[0].name, "North America");
        assert_eq!(regions[3].name, "LatAm");
        assert!(regions.iter().all(|region| region.value > 0.0));
    }

    #[test]
    fn category_mix_normalizes_to_one_hundred() {
        let mut rng = rng();
        for filter in CategoryFilter::OPTIONS {
            let mix = category_mix(filter, &mut rng);
            assert_eq!(mix.len(), Category::ALL.len());
            let total: f64 = mix.iter().map(|slice| slice.percentage).sum();
            // Per-slice rounding may drift the sum by a few tenths.
            assert!((total - 100.0).abs() < 0.5, "sum was {total}");
        }
    }

    #[test]
    fn sample_formats_kpi_slots() {
        let data = DashboardData::sample(&DashboardFilters::default());
        assert!(data.kpis.revenue.starts_with('$'));
        let leading_sign = data.kpis.revenue_change.chars().next();
        if data.kpis.revenue_change_positive {
            assert_eq!(leading_sign, Some('+'));
        } else {
            assert_eq!(leading_sign, Some('-'));
        }
        assert_eq!(data.customer_health.len(), 4);
    }

    #[test]
    fn filters_round_trip_through_form_values() {
        for range in DateRange::ALL {
            assert_eq!(range.as_value().parse::<DateRange>(), Ok(range));
        }
        for filter in CategoryFilter::OPTIONS {
            assert_eq!(filter.as_value().parse::<CategoryFilter>(), Ok(filter));
        }
        assert!("bogus".parse::<DateRange>().is_err());
        assert!("bogus".parse::<CategoryFilter>().is_err());
    }
}
