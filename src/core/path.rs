use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::types::Point;

/// Default horizontal tension for smoothed line series.
pub const DEFAULT_TENSION: f64 = 0.3;

const FULL_TURN_DEG: f64 = 360.0;
const SWEEP_EPSILON_DEG: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    CubicTo {
        control1: Point,
        control2: Point,
        to: Point,
    },
    /// Elliptical arc with SVG flag semantics (`sweep == true` is clockwise
    /// in screen space).
    ArcTo {
        radius: f64,
        large_arc: bool,
        sweep: bool,
        to: Point,
    },
    Close,
}

/// Vector path in pixel space, serializable to SVG path syntax via `Display`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PathData {
    commands: Vec<PathCommand>,
}

impl PathData {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn move_to(&mut self, to: Point) -> &mut Self {
        self.commands.push(PathCommand::MoveTo(to));
        self
    }

    pub fn line_to(&mut self, to: Point) -> &mut Self {
        self.commands.push(PathCommand::LineTo(to));
        self
    }

    pub fn cubic_to(&mut self, control1: Point, control2: Point, to: Point) -> &mut Self {
        self.commands.push(PathCommand::CubicTo {
            control1,
            control2,
            to,
        });
        self
    }

    pub fn arc_to(&mut self, radius: f64, large_arc: bool, sweep: bool, to: Point) -> &mut Self {
        self.commands.push(PathCommand::ArcTo {
            radius,
            large_arc,
            sweep,
            to,
        });
        self
    }

    pub fn close(&mut self) -> &mut Self {
        self.commands.push(PathCommand::Close);
        self
    }

    /// Every coordinate the path visits, control points excluded.
    pub fn vertices(&self) -> impl Iterator<Item = Point> + '_ {
        self.commands.iter().filter_map(|command| match *command {
            PathCommand::MoveTo(to)
            | PathCommand::LineTo(to)
            | PathCommand::CubicTo { to, .. }
            | PathCommand::ArcTo { to, .. } => Some(to),
            PathCommand::Close => None,
        })
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.commands.iter().all(|command| match *command {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => point_is_finite(p),
            PathCommand::CubicTo {
                control1,
                control2,
                to,
            } => point_is_finite(control1) && point_is_finite(control2) && point_is_finite(to),
            PathCommand::ArcTo { radius, to, .. } => radius.is_finite() && point_is_finite(to),
            PathCommand::Close => true,
        })
    }
}

impl fmt::Display for PathData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, command) in self.commands.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            match *command {
                PathCommand::MoveTo(p) => write!(f, "M{}", coord(p))?,
                PathCommand::LineTo(p) => write!(f, "L{}", coord(p))?,
                PathCommand::CubicTo {
                    control1,
                    control2,
                    to,
                } => write!(f, "C{} {} {}", coord(control1), coord(control2), coord(to))?,
                PathCommand::ArcTo {
                    radius,
                    large_arc,
                    sweep,
                    to,
                } => write!(
                    f,
                    "A{r},{r} 0 {} {} {}",
                    u8::from(large_arc),
                    u8::from(sweep),
                    coord(to),
                    r = number(radius),
                )?,
                PathCommand::Close => f.write_str("Z")?,
            }
        }
        Ok(())
    }
}

/// Builds a horizontally smoothed cubic path through `points`.
///
/// Control points sit `tension` of the way along each segment with their y
/// pinned to the segment endpoints, so the curve never overshoots vertically
/// between samples ordered by x. Fewer than two points give a single `M`.
#[must_use]
pub fn smooth_path(points: &[Point], tension: f64) -> PathData {
    let mut path = PathData::new();
    let Some(first) = points.first() else {
        path.move_to(Point::new(0.0, 0.0));
        return path;
    };
    path.move_to(*first);

    for pair in points.windows(2) {
        let (prev, curr) = (pair[0], pair[1]);
        let dx = curr.x - prev.x;
        let control1 = Point::new(prev.x + tension * dx, prev.y);
        let control2 = Point::new(curr.x - tension * dx, curr.y);
        path.cubic_to(control1, control2, curr);
    }
    path
}

/// Smoothed line closed down to `baseline_y`, used for gradient fills.
#[must_use]
pub fn area_path(points: &[Point], baseline_y: f64) -> PathData {
    let mut path = smooth_path(points, DEFAULT_TENSION);
    if let (Some(first), Some(last)) = (points.first(), points.last()) {
        path.line_to(Point::new(last.x, baseline_y))
            .line_to(Point::new(first.x, baseline_y))
            .close();
    }
    path
}

/// Point on a circle; angles are degrees clockwise from 3 o'clock in screen
/// space, so `-90` is 12 o'clock.
#[must_use]
pub fn polar_point(cx: f64, cy: f64, radius: f64, angle_deg: f64) -> Point {
    let radians = angle_deg.to_radians();
    Point::new(cx + radius * radians.cos(), cy + radius * radians.sin())
}

/// Builds one donut wedge between `start_deg` and `end_deg`.
///
/// Outer arc runs clockwise, inner arc counter-clockwise back to the start.
/// `large_arc` is set when the sweep exceeds 180 degrees. A zero inner radius
/// closes through the center; a full turn is split in two half arcs.
#[must_use]
pub fn arc_slice_path(
    cx: f64,
    cy: f64,
    outer_radius: f64,
    inner_radius: f64,
    start_deg: f64,
    end_deg: f64,
) -> PathData {
    let sweep_deg = end_deg - start_deg;
    if sweep_deg >= FULL_TURN_DEG - SWEEP_EPSILON_DEG {
        return ring_path(cx, cy, outer_radius, inner_radius, start_deg);
    }

    let large_arc = sweep_deg > 180.0;
    let outer_start = polar_point(cx, cy, outer_radius, start_deg);
    let outer_end = polar_point(cx, cy, outer_radius, end_deg);

    let mut path = PathData::new();
    path.move_to(outer_start)
        .arc_to(outer_radius, large_arc, true, outer_end);

    if inner_radius > 0.0 {
        let inner_end = polar_point(cx, cy, inner_radius, end_deg);
        let inner_start = polar_point(cx, cy, inner_radius, start_deg);
        path.line_to(inner_end)
            .arc_to(inner_radius, large_arc, false, inner_start);
    } else {
        path.line_to(Point::new(cx, cy));
    }
    path.close();
    path
}

fn ring_path(cx: f64, cy: f64, outer_radius: f64, inner_radius: f64, start_deg: f64) -> PathData {
    let half = start_deg + 180.0;
    let mut path = PathData::new();
    path.move_to(polar_point(cx, cy, outer_radius, start_deg))
        .arc_to(
            outer_radius,
            false,
            true,
            polar_point(cx, cy, outer_radius, half),
        )
        .arc_to(
            outer_radius,
            false,
            true,
            polar_point(cx, cy, outer_radius, start_deg),
        )
        .close();

    if inner_radius > 0.0 {
        path.move_to(polar_point(cx, cy, inner_radius, start_deg))
            .arc_to(
                inner_radius,
                false,
                false,
                polar_point(cx, cy, inner_radius, half),
            )
            .arc_to(
                inner_radius,
                false,
                false,
                polar_point(cx, cy, inner_radius, start_deg),
            )
            .close();
    }
    path
}

fn point_is_finite(point: Point) -> bool {
    point.x.is_finite() && point.y.is_finite()
}

fn coord(point: Point) -> String {
    format!("{},{}", number(point.x), number(point.y))
}

fn number(value: f64) -> String {
    let mut text = format!("{value:.2}");
    if text.contains('.') {
        while text.ends_with('0') {
            text.pop();
        }
        if text.ends_with('.') {
            text.pop();
        }
    }
    if text == "-0" { "0".to_owned() } else { text }
}
