//! Formatting helpers for presenting dashboard metrics.

use num_format::{Locale, ToFormattedString};

/// Thousands-grouped dollar amount: `682401.4` → `"$682,401"`.
pub fn format_currency(value: f64) -> String {
    format!("${}", format_count(value))
}

/// Thousands-grouped plain count: `8412.0` → `"8,412"`.
pub fn format_count(value: f64) -> String {
    (value.round() as i64).to_formatted_string(&Locale::en)
}

/// Abbreviated dollar amount used inside bar fills: `48250.0` → `"$48.3k"`.
pub fn format_abbrev(value: f64) -> String {
    format!("${:.1}k", value / 1000.0)
}

/// Axis label variant, rounded to whole thousands: `11800.0` → `"$12k"`.
pub fn format_axis_thousands(value: f64) -> String {
    format!("${}k", (value / 1000.0).round() as i64)
}

/// Signed change badge: `4.23` → `"+4.2%"`, `-2.96` → `"-3.0%"`.
pub fn format_signed_percent(value: f64) -> String {
    if value >= 0.0 {
        format!("+{value:.1}%")
    } else {
        format!("{value:.1}%")
    }
}

/// Percentage without a trailing `.0` on whole numbers: `45.0` → `"45%"`,
/// `12.5` → `"12.5%"`.
pub fn format_percent(value: f64) -> String {
    if (value - value.round()).abs() < 1e-9 {
        format!("{value:.0}%")
    } else {
        format!("{value:.1}%")
    }
}
