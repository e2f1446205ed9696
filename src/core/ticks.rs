use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::scale::{Scale, ceil_whole};

pub const DEFAULT_TICK_COUNT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    pub value: f64,
    pub pixel: f64,
}

/// Axis ticks ordered top to bottom: index 0 carries the largest value.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TickSet {
    ticks: SmallVec<[Tick; DEFAULT_TICK_COUNT]>,
}

impl TickSet {
    #[must_use]
    pub fn len(&self) -> usize {
        self.ticks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ticks.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Tick] {
        &self.ticks
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tick> {
        self.ticks.iter()
    }

    #[must_use]
    pub fn top(&self) -> Option<Tick> {
        self.ticks.first().copied()
    }

    #[must_use]
    pub fn bottom(&self) -> Option<Tick> {
        self.ticks.last().copied()
    }

    /// Distance between two adjacent tick values.
    #[must_use]
    pub fn step(&self) -> Option<f64> {
        match self.ticks.as_slice() {
            [first, second, ..] => Some(first.value - second.value),
            _ => None,
        }
    }
}

/// Generates `count` whole-number ticks for `scale`.
///
/// The step is `ceil(span / (count - 1))`, never below 1. Ticks are built
/// upward from `domain_min` and then reversed, so the first tick is the top
/// one. Pixel positions go through the scale's pixel range.
#[must_use]
pub fn compute_ticks(scale: Scale, count: usize) -> TickSet {
    let count = count.max(2);
    let step = ceil_whole(scale.span() / (count - 1) as f64).max(1.0);

    let mut ticks: SmallVec<[Tick; DEFAULT_TICK_COUNT]> = (0..count)
        .map(|i| {
            let value = scale.domain_min + step * i as f64;
            Tick {
                value,
                pixel: scale.value_to_pixel(value),
            }
        })
        .collect();
    ticks.reverse();
    TickSet { ticks }
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_TICK_COUNT, compute_ticks};
    use crate::core::Scale;

    #[test]
    fn ticks_run_from_top_to_bottom() {
        let scale = Scale::new(0.0, 33.0).with_pixel_range(200.0, 20.0);
        let ticks = compute_ticks(scale, DEFAULT_TICK_COUNT);
        let values: Vec<f64> = ticks.iter().map(|t| t.value).collect();
        assert_eq!(values, vec![36.0, 27.0, 18.0, 9.0, 0.0]);
        assert_eq!(ticks.step(), Some(9.0));
        assert_eq!(ticks.bottom().map(|t| t.pixel), Some(200.0));
    }

    #[test]
    fn tiny_domains_still_step_by_one() {
        let ticks = compute_ticks(Scale::new(0.0, 1.0), DEFAULT_TICK_COUNT);
        let values: Vec<f64> = ticks.iter().map(|t| t.value).collect();
        assert_eq!(values, vec![4.0, 3.0, 2.0, 1.0, 0.0]);
    }

    #[test]
    fn aligned_scale_reproduces_same_ticks() {
        let raw = Scale::new(0.0, 33.0);
        let first = compute_ticks(raw, DEFAULT_TICK_COUNT);
        let aligned = raw.aligned_to_ticks(&first);
        assert_eq!(aligned.domain_max, 36.0);
        let second = compute_ticks(aligned, DEFAULT_TICK_COUNT);
        assert_eq!(
            first.iter().map(|t| t.value).collect::<Vec<_>>(),
            second.iter().map(|t| t.value).collect::<Vec<_>>()
        );
    }
}
