use ordered_float::OrderedFloat;

use crate::core::PathPoint;
use crate::layout::pie::START_ANGLE_DEG;
use crate::layout::{BarSlot, LegendEntryLayout, LineSeriesLayout, PieLayout, Slice};

/// Horizontal reach of line-chart hover, independent of point density.
pub const LINE_HIT_THRESHOLD_PX: f64 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineHit {
    pub dataset_index: usize,
    pub index: usize,
    pub point: PathPoint,
}

/// Closest line sample by horizontal distance, strictly under
/// `LINE_HIT_THRESHOLD_PX`.
///
/// Scans every `(dataset, index)` pair; on ties the earlier dataset (then
/// the earlier index) wins.
#[must_use]
pub fn nearest_line_point(series: &[LineSeriesLayout], pointer_x: f64) -> Option<LineHit> {
    if !pointer_x.is_finite() {
        return None;
    }
    series
        .iter()
        .flat_map(|layout| {
            layout
                .points
                .iter()
                .enumerate()
                .map(move |(index, point)| LineHit {
                    dataset_index: layout.dataset_index,
                    index,
                    point: *point,
                })
        })
        .map(|hit| (OrderedFloat((hit.point.x - pointer_x).abs()), hit))
        .filter(|(distance, _)| distance.0 < LINE_HIT_THRESHOLD_PX)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, hit)| hit)
}

/// Bar rectangle under the pointer.
#[must_use]
pub fn bar_at(slots: &[BarSlot], x: f64, y: f64) -> Option<&BarSlot> {
    slots
        .iter()
        .find(|slot| slot.height > 0.0 && slot.bounds().contains(x, y))
}

/// Donut wedge under the pointer, tested against the unhovered geometry.
#[must_use]
pub fn slice_at(layout: &PieLayout, x: f64, y: f64) -> Option<&Slice> {
    let dx = x - layout.center.x;
    let dy = y - layout.center.y;
    let distance = dx.hypot(dy);
    if !distance.is_finite() || distance < layout.inner_radius || distance > layout.outer_radius {
        return None;
    }

    let mut angle = dy.atan2(dx).to_degrees();
    if angle < START_ANGLE_DEG {
        angle += 360.0;
    }
    layout.slices.iter().find(|slice| {
        slice.sweep() > 0.0 && angle >= slice.start_angle && angle < slice.end_angle
    })
}

#[must_use]
pub fn legend_entry_at(entries: &[LegendEntryLayout], x: f64, y: f64) -> Option<usize> {
    entries
        .iter()
        .find(|entry| entry.bounds.contains(x, y))
        .map(|entry| entry.index)
}

#[cfg(test)]
mod tests {
    use super::{LINE_HIT_THRESHOLD_PX, bar_at, nearest_line_point, slice_at};
    use crate::core::{ChartData, Dataset, Padding, Point, Viewport, polar_point};
    use crate::layout::{BarMode, layout_bars, layout_line, layout_pie};

    fn two_series() -> ChartData {
        ChartData::new(
            vec!["a".into(), "b".into(), "c".into()],
            vec![
                Dataset::new("first", vec![1.0, 2.0, 3.0]),
                Dataset::new("second", vec![3.0, 2.0, 1.0]),
            ],
        )
    }

    #[test]
    fn nearest_point_prefers_first_dataset_on_ties() {
        let layout = layout_line(&two_series(), Viewport::new(400.0, 200.0), Padding::default());
        let x = layout.label_xs[1] + 3.0;
        let hit = nearest_line_point(&layout.series, x).expect("hit");
        assert_eq!(hit.dataset_index, 0);
        assert_eq!(hit.index, 1);
        assert_eq!(nearest_line_point(&layout.series, x), Some(hit));
    }

    #[test]
    fn pointer_beyond_threshold_misses() {
        let layout = layout_line(&two_series(), Viewport::new(400.0, 200.0), Padding::default());
        let x = layout.label_xs[0] - LINE_HIT_THRESHOLD_PX;
        assert!(nearest_line_point(&layout.series, x).is_none());
    }

    #[test]
    fn bars_own_their_rectangles() {
        let layout = layout_bars(
            &two_series(),
            Viewport::new(400.0, 200.0),
            Padding::default(),
            BarMode::Grouped,
        );
        let slot = *layout.slot(2, 0).expect("slot");
        let hit = bar_at(&layout.slots, slot.center_x(), slot.y + slot.height / 2.0);
        assert_eq!(hit.map(|s| (s.group_index, s.dataset_index)), Some((2, 0)));
        assert!(bar_at(&layout.slots, slot.center_x(), slot.y - 5.0).is_none());
    }

    #[test]
    fn slices_are_hit_inside_the_ring_only() {
        let layout = layout_pie(&[1.0, 1.0, 2.0], 220.0, Point::new(110.0, 110.0), 45.0);
        // -45 degrees sits in the first quarter, 180 in the half-circle slice.
        let ring = (layout.outer_radius + layout.inner_radius) / 2.0;
        let first = polar_point(110.0, 110.0, ring, -45.0);
        assert_eq!(slice_at(&layout, first.x, first.y).map(|s| s.index), Some(0));
        let third = polar_point(110.0, 110.0, ring, 180.0);
        assert_eq!(slice_at(&layout, third.x, third.y).map(|s| s.index), Some(2));
        let top_left = polar_point(110.0, 110.0, ring, -100.0);
        assert_eq!(slice_at(&layout, top_left.x, top_left.y).map(|s| s.index), Some(2));
        assert!(slice_at(&layout, 110.0, 110.0).is_none());
    }
}
