//! Geometry kernel: pure numeric-to-pixel transforms and the chart data model.

pub mod format;
pub mod path;
pub mod scale;
pub mod ticks;
pub mod types;

pub use format::{NumberLocale, format_compact, format_number, format_percentage};
pub use path::{
    DEFAULT_TENSION, PathCommand, PathData, arc_slice_path, area_path, polar_point, smooth_path,
};
pub use scale::{Scale, compute_scale, project_point, usable_height, usable_width};
pub use ticks::{DEFAULT_TICK_COUNT, Tick, TickSet, compute_ticks};
pub use types::{Bounds, ChartData, Dataset, Padding, PathPoint, Point, Viewport};
