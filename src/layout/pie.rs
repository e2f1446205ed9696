use serde::{Deserialize, Serialize};

use crate::core::{PathData, Point, arc_slice_path, polar_point};

pub const DEFAULT_DONUT_WIDTH_PX: f64 = 45.0;
/// Gap kept between the ring and the pie box edge.
pub const PIE_EDGE_INSET_PX: f64 = 10.0;
pub const LEADER_BEND_OFFSET_PX: f64 = 15.0;
pub const LEADER_RUN_PX: f64 = 18.0;
pub const LEADER_LABEL_GAP_PX: f64 = 4.0;
/// Slices at or below this share get no leader line.
pub const LEADER_MIN_PERCENTAGE: f64 = 5.0;
/// Angle of the first slice boundary (12 o'clock).
pub const START_ANGLE_DEG: f64 = -90.0;

/// One angular wedge. Angles are degrees clockwise from 3 o'clock, starting
/// at `START_ANGLE_DEG`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slice {
    pub index: usize,
    pub value: f64,
    pub percentage: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub path_data: PathData,
    /// Middle of the ring along the slice's mid-angle.
    pub label_anchor: Point,
}

impl Slice {
    #[must_use]
    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    #[must_use]
    pub fn mid_angle(&self) -> f64 {
        (self.start_angle + self.end_angle) / 2.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeaderSide {
    Left,
    Right,
}

/// Two-segment connector: radial stub from the ring edge to `bend`, then a
/// horizontal run to `end`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LeaderLine {
    pub slice_index: usize,
    pub start: Point,
    pub bend: Point,
    pub end: Point,
    pub label_anchor: Point,
    pub side: LeaderSide,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieLayout {
    pub center: Point,
    pub outer_radius: f64,
    pub inner_radius: f64,
    pub total: f64,
    pub slices: Vec<Slice>,
    pub leader_lines: Vec<LeaderLine>,
}

impl PieLayout {
    #[must_use]
    pub fn slice(&self, index: usize) -> Option<&Slice> {
        self.slices.get(index)
    }
}

/// Outer ring radius for a square pie box of side `size`, never below 1px.
#[must_use]
pub fn outer_radius_for(size: f64) -> f64 {
    let radius = size / 2.0 - PIE_EDGE_INSET_PX;
    if radius.is_finite() { radius.max(1.0) } else { 1.0 }
}

/// Lays out donut slices in input order, without reordering.
///
/// Each slice sweeps `value / total * 360` degrees starting at 12 o'clock.
/// Boundaries come from the running sum, so consecutive slices share one
/// boundary angle and the last slice closes exactly at 270 degrees.
/// Negative or non-finite values count as zero. A zero total yields no
/// slices.
#[must_use]
pub fn layout_pie(values: &[f64], size: f64, center: Point, donut_width: f64) -> PieLayout {
    let outer_radius = outer_radius_for(size);
    let inner_radius = (outer_radius - donut_width).max(0.0);
    let clamped: Vec<f64> = values
        .iter()
        .map(|v| if v.is_finite() { v.max(0.0) } else { 0.0 })
        .collect();

    let mut total = 0.0;
    for value in &clamped {
        total += value;
    }

    let mut slices = Vec::with_capacity(clamped.len());
    let mut leader_lines = Vec::new();
    if total > 0.0 {
        let mut running = 0.0;
        let mut start_angle = START_ANGLE_DEG;
        for (index, &value) in clamped.iter().enumerate() {
            running += value;
            let end_angle = START_ANGLE_DEG + running / total * 360.0;
            let percentage = value / total * 100.0;
            let mid_angle = (start_angle + end_angle) / 2.0;

            slices.push(Slice {
                index,
                value,
                percentage,
                start_angle,
                end_angle,
                path_data: arc_slice_path(
                    center.x,
                    center.y,
                    outer_radius,
                    inner_radius,
                    start_angle,
                    end_angle,
                ),
                label_anchor: polar_point(
                    center.x,
                    center.y,
                    (outer_radius + inner_radius) / 2.0,
                    mid_angle,
                ),
            });

            if percentage > LEADER_MIN_PERCENTAGE {
                leader_lines.push(leader_line(index, center, outer_radius, mid_angle));
            }
            start_angle = end_angle;
        }
    }

    PieLayout {
        center,
        outer_radius,
        inner_radius,
        total,
        slices,
        leader_lines,
    }
}

fn leader_line(
    slice_index: usize,
    center: Point,
    outer_radius: f64,
    mid_angle: f64,
) -> LeaderLine {
    let start = polar_point(center.x, center.y, outer_radius, mid_angle);
    let bend = polar_point(
        center.x,
        center.y,
        outer_radius + LEADER_BEND_OFFSET_PX,
        mid_angle,
    );
    let side = if mid_angle.to_radians().cos() >= 0.0 {
        LeaderSide::Right
    } else {
        LeaderSide::Left
    };
    let direction = match side {
        LeaderSide::Right => 1.0,
        LeaderSide::Left => -1.0,
    };
    let end = Point::new(bend.x + direction * LEADER_RUN_PX, bend.y);
    LeaderLine {
        slice_index,
        start,
        bend,
        end,
        label_anchor: Point::new(end.x + direction * LEADER_LABEL_GAP_PX, end.y),
        side,
    }
}

#[cfg(test)]
mod tests {
    use super::{
        LEADER_BEND_OFFSET_PX, LeaderSide, START_ANGLE_DEG, layout_pie, outer_radius_for,
    };
    use crate::core::Point;
    use approx::assert_relative_eq;

    #[test]
    fn slices_follow_input_order_and_close_the_circle() {
        let layout = layout_pie(&[1.0, 1.0, 2.0], 220.0, Point::new(110.0, 110.0), 45.0);
        let sweeps: Vec<f64> = layout.slices.iter().map(|s| s.sweep()).collect();
        assert_relative_eq!(sweeps[0], 90.0, epsilon = 1e-9);
        assert_relative_eq!(sweeps[1], 90.0, epsilon = 1e-9);
        assert_relative_eq!(sweeps[2], 180.0, epsilon = 1e-9);
        assert_eq!(layout.slices[0].start_angle, START_ANGLE_DEG);
        assert_eq!(layout.slices[2].end_angle, 270.0);
        for pair in layout.slices.windows(2) {
            assert_eq!(pair[0].end_angle, pair[1].start_angle);
        }
    }

    #[test]
    fn ring_radii_follow_box_size_and_donut_width() {
        let layout = layout_pie(&[1.0], 220.0, Point::new(110.0, 110.0), 45.0);
        assert_eq!(layout.outer_radius, 100.0);
        assert_eq!(layout.inner_radius, 55.0);
        assert_eq!(outer_radius_for(0.0), 1.0);
    }

    #[test]
    fn thin_slices_get_no_leader_line() {
        let layout = layout_pie(&[96.0, 4.0], 220.0, Point::new(110.0, 110.0), 45.0);
        assert_eq!(layout.leader_lines.len(), 1);
        let leader = layout.leader_lines[0];
        assert_eq!(leader.slice_index, 0);
        let bend_distance = (leader.bend.x - 110.0).hypot(leader.bend.y - 110.0);
        assert_relative_eq!(bend_distance, 100.0 + LEADER_BEND_OFFSET_PX, epsilon = 1e-9);
        assert_eq!(leader.bend.y, leader.end.y);
    }

    #[test]
    fn leader_runs_away_from_center() {
        // Two halves: the first mid-angle points at 3 o'clock, the second at 9.
        let layout = layout_pie(&[1.0, 1.0], 220.0, Point::new(110.0, 110.0), 45.0);
        assert_eq!(layout.leader_lines[0].side, LeaderSide::Right);
        assert_eq!(layout.leader_lines[1].side, LeaderSide::Left);
        assert!(layout.leader_lines[1].end.x < layout.leader_lines[1].bend.x);
    }

    #[test]
    fn zero_total_has_no_slices() {
        let layout = layout_pie(&[0.0, -3.0, f64::NAN], 220.0, Point::new(110.0, 110.0), 45.0);
        assert!(layout.slices.is_empty());
        assert_eq!(layout.total, 0.0);
    }
}
