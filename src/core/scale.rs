use serde::{Deserialize, Serialize};

use crate::core::types::{Dataset, Padding, Point, Viewport};
use crate::core::ticks::TickSet;

/// Headroom applied above the largest observed value.
pub const DOMAIN_HEADROOM: f64 = 1.1;

const MIN_USABLE_SPAN_PX: f64 = 1.0;

/// Mapping from a value domain to a vertical pixel range.
///
/// `range_start` is the pixel of `domain_min` (plot bottom) and `range_end`
/// the pixel of `domain_max` (plot top). Derived per render, never cached.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scale {
    pub domain_min: f64,
    pub domain_max: f64,
    pub range_start: f64,
    pub range_end: f64,
}

impl Scale {
    /// Creates a scale over a unit pixel range (`1.0` bottom, `0.0` top).
    #[must_use]
    pub fn new(domain_min: f64, domain_max: f64) -> Self {
        Self {
            domain_min,
            domain_max,
            range_start: 1.0,
            range_end: 0.0,
        }
    }

    #[must_use]
    pub fn with_pixel_range(mut self, range_start: f64, range_end: f64) -> Self {
        self.range_start = range_start;
        self.range_end = range_end;
        self
    }

    /// Width of the value domain (`domain_max - domain_min`).
    #[must_use]
    pub fn span(self) -> f64 {
        self.domain_max - self.domain_min
    }

    #[must_use]
    pub fn value_to_pixel(self, value: f64) -> f64 {
        let normalized = (value - self.domain_min) / self.span();
        self.range_start + normalized * (self.range_end - self.range_start)
    }

    #[must_use]
    pub fn pixel_to_value(self, pixel: f64) -> f64 {
        let pixel_span = self.range_end - self.range_start;
        if pixel_span == 0.0 {
            return self.domain_min;
        }
        let normalized = (pixel - self.range_start) / pixel_span;
        self.domain_min + normalized * self.span()
    }

    /// Extends `domain_max` up to the top tick so grid lines and data share
    /// one mapping.
    #[must_use]
    pub fn aligned_to_ticks(mut self, ticks: &TickSet) -> Self {
        if let Some(top) = ticks.top() {
            if top.value > self.domain_max {
                self.domain_max = top.value;
            }
        }
        self
    }
}

/// Derives the value scale for the datasets currently visible.
///
/// Stacked charts use the largest per-index sum of non-negative samples,
/// other charts the largest single value. The maximum gets 10% headroom and
/// is rounded up to a whole number. The minimum floors at zero unless
/// negative samples exist in a non-stacked chart. An empty or all-zero input
/// yields `0..1`.
#[must_use]
pub fn compute_scale(datasets: &[Dataset], stacked: bool) -> Scale {
    let observed_max = if stacked {
        let len = datasets.iter().map(|d| d.data.len()).max().unwrap_or(0);
        (0..len)
            .map(|index| {
                datasets
                    .iter()
                    .filter_map(|d| d.data.get(index).copied())
                    .filter(|value| value.is_finite())
                    .map(|value| value.max(0.0))
                    .sum::<f64>()
            })
            .fold(f64::NEG_INFINITY, f64::max)
    } else {
        finite_values(datasets).fold(f64::NEG_INFINITY, f64::max)
    };
    // Stacked segments never draw below zero.
    let observed_min = if stacked {
        0.0
    } else {
        finite_values(datasets).fold(f64::INFINITY, f64::min)
    };

    let domain_min = if observed_min.is_finite() && observed_min < 0.0 {
        observed_min.floor()
    } else {
        0.0
    };

    let domain_max = if observed_max.is_finite() && observed_max > 0.0 {
        ceil_whole(observed_max * 11.0 / 10.0)
    } else if domain_min < 0.0 {
        0.0
    } else {
        1.0
    };

    Scale::new(domain_min, domain_max)
}

/// Maps `(value, index)` into the padded chart box.
///
/// Single source of truth for cartesian coordinates. A lone sample is
/// centered horizontally; usable spans never drop below one pixel.
#[must_use]
pub fn project_point(
    scale: Scale,
    value: f64,
    index: usize,
    total: usize,
    viewport: Viewport,
    padding: Padding,
) -> Point {
    let usable_width = usable_width(viewport, padding);
    let usable_height = usable_height(viewport, padding);

    let x = if total <= 1 {
        padding.left + usable_width / 2.0
    } else {
        padding.left + (index as f64 / (total - 1) as f64) * usable_width
    };
    let y = padding.top + ((scale.domain_max - value) / scale.span()) * usable_height;
    Point::new(x, y)
}

#[must_use]
pub fn usable_width(viewport: Viewport, padding: Padding) -> f64 {
    clamp_span(viewport.width - padding.left - padding.right)
}

#[must_use]
pub fn usable_height(viewport: Viewport, padding: Padding) -> f64 {
    clamp_span(viewport.height - padding.top - padding.bottom)
}

fn clamp_span(span: f64) -> f64 {
    if span.is_finite() {
        span.max(MIN_USABLE_SPAN_PX)
    } else {
        MIN_USABLE_SPAN_PX
    }
}

fn finite_values(datasets: &[Dataset]) -> impl Iterator<Item = f64> + '_ {
    datasets
        .iter()
        .flat_map(|d| d.data.iter().copied())
        .filter(|value| value.is_finite())
}

/// `ceil` that ignores float noise just above a whole number.
pub(crate) fn ceil_whole(value: f64) -> f64 {
    let rounded = value.round();
    if (value - rounded).abs() <= 1e-9 * value.abs().max(1.0) {
        rounded
    } else {
        value.ceil()
    }
}

#[cfg(test)]
mod tests {
    use super::{Scale, compute_scale, project_point};
    use crate::core::{Dataset, Padding, Viewport};
    use approx::assert_relative_eq;

    #[test]
    fn non_stacked_scale_pads_single_maximum() {
        let scale = compute_scale(&[Dataset::new("users", vec![10.0, 0.0, 30.0])], false);
        assert_eq!(scale.domain_min, 0.0);
        assert_eq!(scale.domain_max, 33.0);
    }

    #[test]
    fn stacked_scale_uses_per_index_sums() {
        let datasets = [
            Dataset::new("a", vec![5.0, 5.0]),
            Dataset::new("b", vec![5.0, 15.0]),
        ];
        assert_eq!(compute_scale(&datasets, true).domain_max, 22.0);
        assert_eq!(compute_scale(&datasets, false).domain_max, 17.0);
    }

    #[test]
    fn degenerate_domain_defaults_to_unit_max() {
        assert_eq!(compute_scale(&[], false).domain_max, 1.0);
        let zeros = [Dataset::new("z", vec![0.0, 0.0])];
        assert_eq!(compute_scale(&zeros, true).domain_max, 1.0);
    }

    #[test]
    fn negative_samples_lower_the_domain_floor() {
        let scale = compute_scale(&[Dataset::new("n", vec![-4.5, 10.0])], false);
        assert_eq!(scale.domain_min, -5.0);
        assert_eq!(scale.domain_max, 11.0);
    }

    #[test]
    fn stacked_scale_ignores_negative_segments() {
        let datasets = [
            Dataset::new("gain", vec![10.0, 4.0]),
            Dataset::new("loss", vec![-10.0, 2.0]),
        ];
        let scale = compute_scale(&datasets, true);
        assert_eq!(scale.domain_min, 0.0);
        assert_eq!(scale.domain_max, 11.0);
    }

    #[test]
    fn single_sample_is_centered() {
        let viewport = Viewport::new(300.0, 200.0);
        let padding = Padding::new(10.0, 20.0, 10.0, 40.0);
        let point = project_point(Scale::new(0.0, 10.0), 5.0, 0, 1, viewport, padding);
        assert_relative_eq!(point.x, 40.0 + 240.0 / 2.0);
        assert_relative_eq!(point.y, 10.0 + 90.0);
    }

    #[test]
    fn zero_width_is_clamped_instead_of_nan() {
        let viewport = Viewport::new(0.0, 200.0);
        let point = project_point(Scale::new(0.0, 10.0), 5.0, 3, 4, viewport, Padding::default());
        assert!(point.x.is_finite());
        assert_relative_eq!(point.x, Padding::default().left + 1.0);
    }

    #[test]
    fn pixel_round_trip_recovers_value() {
        let scale = Scale::new(0.0, 40.0).with_pixel_range(180.0, 20.0);
        let px = scale.value_to_pixel(12.5);
        assert_relative_eq!(scale.pixel_to_value(px), 12.5, epsilon = 1e-9);
    }
}
