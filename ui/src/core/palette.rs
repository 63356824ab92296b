//! Chart color constants shared by the renderers.

/// Primary accent: line stroke, marker rings, area gradient head.
pub const ACCENT: &str = "#ff3333";
/// Tail of the area gradient, faded out over the chart background.
pub const AREA_FADE: &str = "#2b0202";
/// Horizontal grid rules.
pub const GRID: &str = "#220505";
/// Axis label ink.
pub const INK: &str = "#d1d1d1";
/// Resting marker fill; hovered markers flip to [`MARKER_FILL_HOVER`].
pub const MARKER_FILL: &str = "#000";
pub const MARKER_FILL_HOVER: &str = "#fff";

/// Cyclic wedge palette for the pie chart; indexes wrap past the end.
pub const PIE: [&str; 5] = ["#800000", "#a30000", "#cc0000", "#ff3333", "#4a0404"];

pub fn pie_color(index: usize) -> &'static str {
    PIE[index % PIE.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pie_colors_wrap_past_palette_end() {
        assert_eq!(pie_color(0), PIE[0]);
        assert_eq!(pie_color(PIE.len()), PIE[0]);
        assert_eq!(pie_color(PIE.len() + 2), PIE[2]);
    }
}
