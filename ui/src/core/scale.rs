//! Linear domain→surface transforms for the SVG charts.

/// Maps a value domain onto a pixel range. Passing the range as
/// `(bottom, top)` yields the inverted y mapping charts want (larger
/// value → smaller pixel coordinate).
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    d0: f64,
    d1: f64,
    r0: f64,
    r1: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        let (mut d0, mut d1) = domain;
        // Degenerate domain (all samples equal): treat the span as 1,
        // centered on the value, so the transform stays finite and a flat
        // series renders mid-range.
        if (d1 - d0).abs() < 1e-12 {
            d0 -= 0.5;
            d1 += 0.5;
        }
        Self {
            d0,
            d1,
            r0: range.0,
            r1: range.1,
        }
    }

    pub fn to_range(&self, value: f64) -> f64 {
        self.r0 + (value - self.d0) / (self.d1 - self.d0) * (self.r1 - self.r0)
    }
}

/// Grid label values interpolated from `max` down to `min`, inclusive on
/// both ends (`intervals + 1` entries).
pub fn grid_values(max: f64, min: f64, intervals: usize) -> Vec<f64> {
    let intervals = intervals.max(1);
    let step = (max - min) / intervals as f64;
    (0..=intervals).map(|i| max - step * i as f64).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_domain_endpoints_to_range_endpoints() {
        let scale = LinearScale::new((0.0, 100.0), (260.0, 20.0));
        assert_eq!(scale.to_range(0.0), 260.0);
        assert_eq!(scale.to_range(100.0), 20.0);
        assert_eq!(scale.to_range(50.0), 140.0);
    }

    #[test]
    fn zero_span_domain_stays_finite_and_centers() {
        let scale = LinearScale::new((42.0, 42.0), (260.0, 20.0));
        let y = scale.to_range(42.0);
        assert!(y.is_finite());
        // Span is widened around the value, so the flat series sits at
        // the middle of the plot area.
        assert_eq!(y, 140.0);
    }

    #[test]
    fn grid_values_run_max_to_min() {
        let values = grid_values(15_000.0, 5_000.0, 5);
        assert_eq!(values.len(), 6);
        assert_eq!(values[0], 15_000.0);
        assert_eq!(values[5], 5_000.0);
        assert_eq!(values[1], 13_000.0);
    }

    #[test]
    fn grid_values_flat_series_repeats_value() {
        let values = grid_values(7.0, 7.0, 5);
        assert!(values.iter().all(|v| *v == 7.0));
    }
}
